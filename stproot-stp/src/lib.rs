//! IEEE 802.1D Spanning Tree Configuration BPDUs
//!
//! This crate builds the one message stproot sends: a Configuration BPDU in
//! which the sender claims to be both the Root Bridge and the Designated
//! Bridge, wrapped in an 802.3/LLC frame addressed to the bridge group
//! address.
//!
//! ## Packet Format
//!
//! - Destination: 01:80:C2:00:00:00 (Bridge Group Address)
//! - LLC DSAP/SSAP: 0x42 (STP), control 0x03
//! - 35-byte Configuration BPDU, all integers big-endian, timers in 1/256 s
//!
//! TCN, RSTP and MSTP BPDUs are not supported.

pub mod frame;
pub mod packet;
pub mod params;

pub use frame::{assemble_frame, EthernetLlcFrame};
pub use packet::{encode_config_bpdu, timer_to_wire, BridgeId, ConfigBpdu};
pub use params::{BpduParameters, BpduParametersBuilder};

/// STP Protocol constants
pub mod constants {
    use stproot_core::MacAddr;

    /// STP multicast destination MAC address
    pub const STP_MULTICAST_MAC: MacAddr = MacAddr([0x01, 0x80, 0xC2, 0x00, 0x00, 0x00]);

    /// Protocol ID (always 0x0000)
    pub const STP_PROTOCOL_ID: u16 = 0x0000;

    /// Protocol version for classic STP
    pub const STP_VERSION_STP: u8 = 0x00;

    /// BPDU type of a Configuration BPDU
    pub const BPDU_TYPE_CONFIG: u8 = 0x00;

    /// Timer fields count 1/256 of a second
    pub const TIMER_UNITS_PER_SECOND: u16 = 256;

    /// Largest whole-second timer the 16-bit fixed-point field can hold
    pub const MAX_TIMER_SECONDS: u64 = 255;

    /// Default hello time in seconds (802.1D recommended value)
    pub const DEFAULT_HELLO_TIME: u16 = 2;

    /// Default max age in seconds (802.1D recommended value)
    pub const DEFAULT_MAX_AGE: u16 = 20;

    /// Default forward delay in seconds (802.1D recommended value)
    pub const DEFAULT_FORWARD_DELAY: u16 = 15;

    /// Message age of a BPDU sent by the root itself
    pub const DEFAULT_MESSAGE_AGE: u16 = 0;

    /// Default port ID (priority 0x80, port number 1)
    pub const DEFAULT_PORT_ID: u16 = 0x8001;

    /// Lowest (best) bridge priority
    pub const LOWEST_PRIORITY: u16 = 0;

    /// Configuration BPDU size in bytes
    pub const CONFIG_BPDU_SIZE: usize = 35;
}
