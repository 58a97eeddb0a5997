//! LLC (Logical Link Control, IEEE 802.2) header
//!
//! BPDUs ride directly on LLC with both service access points set to the
//! bridge spanning tree SAP and an Unnumbered Information control field.

/// LLC Service Access Point (used for both DSAP and SSAP)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlcSap {
    /// Bridge Spanning Tree Protocol (0x42)
    STP,
    /// Any other SAP value
    Custom(u8),
}

impl LlcSap {
    pub fn to_u8(self) -> u8 {
        match self {
            LlcSap::STP => 0x42,
            LlcSap::Custom(val) => val,
        }
    }

    pub fn from_u8(value: u8) -> Self {
        match value {
            0x42 => LlcSap::STP,
            val => LlcSap::Custom(val),
        }
    }
}

/// LLC Control field values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlcControl {
    /// Unnumbered Information (0x03)
    UnnumberedInformation,
    /// Custom control value
    Custom(u8),
}

impl LlcControl {
    pub fn to_u8(self) -> u8 {
        match self {
            LlcControl::UnnumberedInformation => 0x03,
            LlcControl::Custom(val) => val,
        }
    }

    pub fn from_u8(value: u8) -> Self {
        match value {
            0x03 => LlcControl::UnnumberedInformation,
            val => LlcControl::Custom(val),
        }
    }
}

/// LLC header (3 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlcHeader {
    /// Destination Service Access Point
    pub dsap: LlcSap,
    /// Source Service Access Point
    pub ssap: LlcSap,
    /// Control field
    pub control: LlcControl,
}

impl LlcHeader {
    /// LLC header size in bytes
    pub const SIZE: usize = 3;

    /// Create an STP LLC header (DSAP=0x42, SSAP=0x42, Control=0x03)
    pub fn stp() -> Self {
        LlcHeader {
            dsap: LlcSap::STP,
            ssap: LlcSap::STP,
            control: LlcControl::UnnumberedInformation,
        }
    }

    /// Convert to bytes
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.dsap.to_u8(), self.ssap.to_u8(), self.control.to_u8()]
    }

    /// Parse from bytes
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SIZE {
            return None;
        }

        Some(LlcHeader {
            dsap: LlcSap::from_u8(data[0]),
            ssap: LlcSap::from_u8(data[1]),
            control: LlcControl::from_u8(data[2]),
        })
    }

    pub fn is_stp(&self) -> bool {
        *self == Self::stp()
    }
}
