//! IEEE 802.3 frame construction and parsing
//!
//! Frames built here always use the length form of the type/length field,
//! which is what LLC-encapsulated protocols such as STP expect.

use bytes::{BufMut, BytesMut};
use stproot_core::{Error, MacAddr, Result};

/// 802.3 Ethernet frame (length field, no FCS)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    /// Payload data (LLC header onwards)
    pub payload: Vec<u8>,
}

impl EthernetFrame {
    /// Minimum Ethernet frame size (without FCS)
    pub const MIN_FRAME_SIZE: usize = 60;

    /// Ethernet header size (dst + src + length)
    pub const HEADER_SIZE: usize = 14;

    /// Largest value of the type/length field that is a length
    pub const MAX_PAYLOAD_SIZE: usize = 1500;

    /// Create a new frame
    pub fn new(destination: MacAddr, source: MacAddr, payload: Vec<u8>) -> Self {
        EthernetFrame {
            destination,
            source,
            payload,
        }
    }

    /// Convert the frame to bytes
    ///
    /// The length field carries the unpadded payload length; the frame is then
    /// zero-padded up to [`Self::MIN_FRAME_SIZE`]. Payloads longer than
    /// [`Self::MAX_PAYLOAD_SIZE`] cannot be described by a length field and
    /// are refused.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let length = self.length_field()?;
        let raw_len = Self::HEADER_SIZE + self.payload.len();
        let mut buffer = BytesMut::with_capacity(raw_len.max(Self::MIN_FRAME_SIZE));

        buffer.put_slice(self.destination.as_bytes());
        buffer.put_slice(self.source.as_bytes());
        buffer.put_u16(length);
        buffer.put_slice(&self.payload);

        if buffer.len() < Self::MIN_FRAME_SIZE {
            buffer.resize(Self::MIN_FRAME_SIZE, 0);
        }

        Ok(buffer.to_vec())
    }

    fn length_field(&self) -> Result<u16> {
        let size = self.payload.len();
        let too_large = || Error::FrameTooLarge {
            size,
            max: Self::MAX_PAYLOAD_SIZE,
        };

        if size > Self::MAX_PAYLOAD_SIZE {
            return Err(too_large());
        }
        u16::try_from(size).map_err(|_| too_large())
    }

    /// Parse an 802.3 frame from bytes
    ///
    /// Returns `None` when the frame is truncated or its type/length field is
    /// an EtherType rather than a length. Padding past the declared length is
    /// dropped.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::HEADER_SIZE {
            return None;
        }

        let destination = MacAddr::from_slice(&data[0..6])?;
        let source = MacAddr::from_slice(&data[6..12])?;

        let length = u16::from_be_bytes([data[12], data[13]]) as usize;
        if length > Self::MAX_PAYLOAD_SIZE || data.len() < Self::HEADER_SIZE + length {
            return None;
        }

        let payload = data[Self::HEADER_SIZE..Self::HEADER_SIZE + length].to_vec();

        Some(EthernetFrame {
            destination,
            source,
            payload,
        })
    }
}
