//! Ethernet/LLC framing of Configuration BPDUs

use stproot_core::{Error, MacAddr, Result};
use stproot_packet::{EthernetFrame, LlcHeader};

use crate::constants::{CONFIG_BPDU_SIZE, STP_MULTICAST_MAC};
use crate::packet::ConfigBpdu;

/// Transmit-ready STP frame: 802.3 header, LLC header and one Config BPDU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetLlcFrame {
    /// Always the bridge group address
    pub destination: MacAddr,
    /// Sender hardware address
    pub source: MacAddr,
    /// Always DSAP/SSAP 0x42, control 0x03
    pub llc: LlcHeader,
    pub bpdu: ConfigBpdu,
}

impl EthernetLlcFrame {
    /// LLC header plus BPDU, the value of the 802.3 length field
    pub const PAYLOAD_SIZE: usize = LlcHeader::SIZE + CONFIG_BPDU_SIZE;

    /// Serialize to the bytes handed to the link (no FCS, padded to 60 bytes)
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut payload = Vec::with_capacity(Self::PAYLOAD_SIZE);
        payload.extend_from_slice(&self.llc.to_bytes());
        payload.extend_from_slice(&self.bpdu.to_bytes());

        EthernetFrame::new(self.destination, self.source, payload).to_bytes()
    }

    /// Parse a captured or previously built STP frame
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let frame = EthernetFrame::from_bytes(data)
            .ok_or_else(|| Error::parsing("not an 802.3 frame"))?;

        let llc = LlcHeader::from_bytes(&frame.payload)
            .ok_or_else(|| Error::parsing("LLC header truncated"))?;
        if !llc.is_stp() {
            return Err(Error::parsing(format!(
                "not an STP LLC header: {:02x?}",
                llc.to_bytes()
            )));
        }

        let bpdu = ConfigBpdu::parse(&frame.payload[LlcHeader::SIZE..])?;

        Ok(Self {
            destination: frame.destination,
            source: frame.source,
            llc,
            bpdu,
        })
    }
}

/// Wrap a BPDU for transmission to the spanning tree group address.
pub fn assemble_frame(source_mac: MacAddr, bpdu: ConfigBpdu) -> EthernetLlcFrame {
    EthernetLlcFrame {
        destination: STP_MULTICAST_MAC,
        source: source_mac,
        llc: LlcHeader::stp(),
        bpdu,
    }
}
