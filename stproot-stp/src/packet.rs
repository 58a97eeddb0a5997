//! Configuration BPDU structure, encoding and parsing

use bytes::{Buf, BufMut};
use std::fmt;
use stproot_core::{Error, MacAddr, Result};

use crate::constants::*;
use crate::params::BpduParameters;

/// Bridge ID (8 bytes: 2 bytes priority + 6 bytes MAC)
///
/// Ordering follows root election: lower priority wins, then lower MAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BridgeId {
    /// Bridge priority (0-65535, default 32768)
    pub priority: u16,
    /// Bridge MAC address
    pub mac: MacAddr,
}

impl BridgeId {
    /// Size of a Bridge ID on the wire
    pub const SIZE: usize = 8;

    /// Create a new Bridge ID
    pub fn new(priority: u16, mac: MacAddr) -> Self {
        Self { priority, mac }
    }

    /// Parse Bridge ID from 8 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(Error::parsing("Bridge ID requires 8 bytes"));
        }

        let priority = u16::from_be_bytes([bytes[0], bytes[1]]);
        let mac = MacAddr([bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]]);

        Ok(Self { priority, mac })
    }

    /// Convert Bridge ID to bytes
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0..2].copy_from_slice(&self.priority.to_be_bytes());
        bytes[2..8].copy_from_slice(&self.mac.0);
        bytes
    }
}

impl fmt::Display for BridgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}.{}", self.priority, self.mac)
    }
}

/// Convert whole seconds to the 802.1D 1/256-second timer representation.
///
/// The multiplication wraps modulo 2^16, so 256 s and above do not fit and
/// alias to smaller values (256 s encodes as 0). [`BpduParameters`] refuses
/// such timers before they get here.
pub fn timer_to_wire(seconds: u16) -> u16 {
    seconds.wrapping_mul(TIMER_UNITS_PER_SECOND)
}

/// Configuration BPDU (IEEE 802.1D, protocol version 0, type 0x00)
///
/// Protocol ID, version, type and flags are constant for the BPDUs this
/// crate produces and are not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigBpdu {
    /// Root bridge identifier
    pub root_id: BridgeId,
    /// Root path cost
    pub root_path_cost: u32,
    /// Bridge identifier
    pub bridge_id: BridgeId,
    /// Port identifier
    pub port_id: u16,
    /// Message age (in 1/256 seconds)
    pub message_age: u16,
    /// Max age (in 1/256 seconds)
    pub max_age: u16,
    /// Hello time (in 1/256 seconds)
    pub hello_time: u16,
    /// Forward delay (in 1/256 seconds)
    pub forward_delay: u16,
}

/// Encode session parameters into a Configuration BPDU claiming root.
///
/// Both Root ID and Bridge ID carry the source MAC, and the root path cost is
/// zero as it is for a bridge advertising itself as root.
pub fn encode_config_bpdu(params: &BpduParameters) -> ConfigBpdu {
    let mac = params.source_mac();

    ConfigBpdu {
        root_id: BridgeId::new(params.root_priority(), mac),
        root_path_cost: 0,
        bridge_id: BridgeId::new(params.bridge_priority(), mac),
        port_id: params.port_id(),
        message_age: timer_to_wire(params.message_age()),
        max_age: timer_to_wire(params.max_age()),
        hello_time: timer_to_wire(params.hello_time()),
        forward_delay: timer_to_wire(params.forward_delay()),
    }
}

impl ConfigBpdu {
    /// Parse Config BPDU from bytes
    ///
    /// Trailing bytes (frame padding) are ignored. The flags byte is not
    /// interpreted.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < CONFIG_BPDU_SIZE {
            return Err(Error::parsing(format!(
                "Config BPDU too short: {} bytes (need {})",
                data.len(),
                CONFIG_BPDU_SIZE
            )));
        }

        let mut buf = &data[..CONFIG_BPDU_SIZE];

        let protocol_id = buf.get_u16();
        if protocol_id != STP_PROTOCOL_ID {
            return Err(Error::parsing(format!(
                "Unknown protocol ID: 0x{:04x}",
                protocol_id
            )));
        }

        let version = buf.get_u8();
        let bpdu_type = buf.get_u8();
        if version != STP_VERSION_STP || bpdu_type != BPDU_TYPE_CONFIG {
            return Err(Error::parsing(format!(
                "Not an STP Config BPDU: version={}, type=0x{:02x}",
                version, bpdu_type
            )));
        }

        let _flags = buf.get_u8();
        let root_id = BridgeId::from_bytes(&buf[..BridgeId::SIZE])?;
        buf.advance(BridgeId::SIZE);
        let root_path_cost = buf.get_u32();
        let bridge_id = BridgeId::from_bytes(&buf[..BridgeId::SIZE])?;
        buf.advance(BridgeId::SIZE);

        Ok(Self {
            root_id,
            root_path_cost,
            bridge_id,
            port_id: buf.get_u16(),
            message_age: buf.get_u16(),
            max_age: buf.get_u16(),
            hello_time: buf.get_u16(),
            forward_delay: buf.get_u16(),
        })
    }

    /// Build Config BPDU to its 35-byte wire form
    pub fn to_bytes(&self) -> [u8; CONFIG_BPDU_SIZE] {
        let mut bytes = [0u8; CONFIG_BPDU_SIZE];
        let mut buf = &mut bytes[..];

        buf.put_u16(STP_PROTOCOL_ID);
        buf.put_u8(STP_VERSION_STP);
        buf.put_u8(BPDU_TYPE_CONFIG);
        // Flags: no topology change
        buf.put_u8(0x00);
        buf.put_slice(&self.root_id.to_bytes());
        buf.put_u32(self.root_path_cost);
        buf.put_slice(&self.bridge_id.to_bytes());
        buf.put_u16(self.port_id);
        buf.put_u16(self.message_age);
        buf.put_u16(self.max_age);
        buf.put_u16(self.hello_time);
        buf.put_u16(self.forward_delay);

        bytes
    }

    /// Whether this BPDU advertises its sender as the root bridge
    pub fn claims_root(&self) -> bool {
        self.root_path_cost == 0 && self.root_id.mac == self.bridge_id.mac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: MacAddr = MacAddr([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

    fn scenario() -> BpduParameters {
        BpduParameters::builder(MAC).build().unwrap()
    }

    #[test]
    fn test_bridge_id() {
        let mac = MacAddr([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
        let bridge_id = BridgeId::new(32768, mac);

        assert_eq!(
            bridge_id.to_bytes(),
            [0x80, 0x00, 0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]
        );
        assert_eq!(BridgeId::from_bytes(&bridge_id.to_bytes()).unwrap(), bridge_id);
        assert_eq!(bridge_id.to_string(), "8000.00:1a:2b:3c:4d:5e");
    }

    #[test]
    fn test_bridge_id_election_order() {
        let low_mac = MacAddr([0x00, 0x00, 0x00, 0x00, 0x00, 0x01]);
        let high_mac = MacAddr([0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);

        assert!(BridgeId::new(LOWEST_PRIORITY, high_mac) < BridgeId::new(1, low_mac));
        assert!(BridgeId::new(4096, low_mac) < BridgeId::new(4096, high_mac));
    }

    #[test]
    fn test_encoded_length() {
        assert_eq!(encode_config_bpdu(&scenario()).to_bytes().len(), CONFIG_BPDU_SIZE);

        let params = BpduParameters::builder(MacAddr([0xff; 6]))
            .root_priority(65535)
            .bridge_priority(65535)
            .port_id(0xffff)
            .hello_time(255)
            .max_age(255)
            .forward_delay(255)
            .message_age(255)
            .build()
            .unwrap();
        assert_eq!(encode_config_bpdu(&params).to_bytes().len(), CONFIG_BPDU_SIZE);
    }

    #[test]
    fn test_reference_scenario_bytes() {
        let bytes = encode_config_bpdu(&scenario()).to_bytes();

        assert_eq!(&bytes[0..5], &[0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[5..13], &[0x00, 0x00, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(&bytes[13..17], &[0x00, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[17..25], &[0x00, 0x00, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(&bytes[25..27], &[0x80, 0x01]);
        assert_eq!(&bytes[27..29], &[0x00, 0x00]); // message age
        assert_eq!(&bytes[29..31], &[0x14, 0x00]); // max age 20 s
        assert_eq!(&bytes[31..33], &[0x02, 0x00]); // hello 2 s
        assert_eq!(&bytes[33..35], &[0x0F, 0x00]); // forward delay 15 s
    }

    #[test]
    fn test_root_id_decodes_to_inputs() {
        let params = BpduParameters::builder(MAC)
            .root_priority(4096)
            .bridge_priority(8192)
            .build()
            .unwrap();

        let bytes = encode_config_bpdu(&params).to_bytes();
        let root_id = BridgeId::from_bytes(&bytes[5..13]).unwrap();
        let bridge_id = BridgeId::from_bytes(&bytes[17..25]).unwrap();

        assert_eq!(root_id, BridgeId::new(4096, MAC));
        assert_eq!(bridge_id, BridgeId::new(8192, MAC));
    }

    #[test]
    fn test_root_path_cost_always_zero() {
        for (root, bridge, port) in [(0, 0, 0x8001), (65535, 1, 0), (32768, 32768, 0xffff)] {
            let params = BpduParameters::builder(MAC)
                .root_priority(root)
                .bridge_priority(bridge)
                .port_id(port)
                .build()
                .unwrap();
            let bpdu = encode_config_bpdu(&params);

            assert_eq!(bpdu.root_path_cost, 0);
            assert_eq!(&bpdu.to_bytes()[13..17], &[0, 0, 0, 0]);
            assert!(bpdu.claims_root());
        }
    }

    #[test]
    fn test_timer_conversion() {
        assert_eq!(timer_to_wire(0), 0);
        assert_eq!(timer_to_wire(2), 512);
        assert_eq!(timer_to_wire(20), 0x1400);
        assert_eq!(timer_to_wire(255), 0xFF00);

        for t in [0u16, 1, 15, 100, 255, 256, 300, 1000, u16::MAX] {
            assert_eq!(timer_to_wire(t) as u32, (t as u32 * 256) % 65536);
        }
    }

    #[test]
    fn test_timer_conversion_wraps_at_256_seconds() {
        // The 8.8 fixed-point field cannot hold 256 s: it aliases to 0 s.
        assert_eq!(timer_to_wire(256), 0);
        assert_eq!(timer_to_wire(257), 256);
    }

    #[test]
    fn test_parse_matches_encoded_fields() {
        let params = BpduParameters::builder(MAC)
            .root_priority(1)
            .port_id(0x8002)
            .hello_time(1)
            .max_age(6)
            .forward_delay(4)
            .message_age(3)
            .build()
            .unwrap();
        let bpdu = encode_config_bpdu(&params);

        let parsed = ConfigBpdu::parse(&bpdu.to_bytes()).unwrap();
        assert_eq!(parsed, bpdu);
        assert_eq!(parsed.message_age, 3 * 256);
    }

    #[test]
    fn test_parse_ignores_padding() {
        let mut data = encode_config_bpdu(&scenario()).to_bytes().to_vec();
        data.extend_from_slice(&[0u8; 8]);
        assert!(ConfigBpdu::parse(&data).is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let bytes = encode_config_bpdu(&scenario()).to_bytes();

        assert!(ConfigBpdu::parse(&bytes[..34]).is_err());

        let mut tcn = bytes;
        tcn[3] = 0x80;
        assert!(matches!(ConfigBpdu::parse(&tcn), Err(Error::PacketParsing(_))));

        let mut rstp = bytes;
        rstp[2] = 0x02;
        assert!(ConfigBpdu::parse(&rstp).is_err());

        let mut other = bytes;
        other[1] = 0x01;
        assert!(ConfigBpdu::parse(&other).is_err());
    }
}
