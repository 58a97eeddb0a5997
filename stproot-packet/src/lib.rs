//! Link-layer frame construction and parsing for stproot
//!
//! Spanning tree BPDUs travel in IEEE 802.3 frames (length field instead of
//! an EtherType) carrying an 802.2 LLC header. This crate provides:
//!
//! - [`ethernet`] - 802.3 frame construction, padding and parsing
//! - [`llc`] - LLC header with service access point and control values
//!
//! # Example
//!
//! ```rust
//! use stproot_core::MacAddr;
//! use stproot_packet::{EthernetFrame, LlcHeader};
//!
//! let src = MacAddr([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
//! let dst = MacAddr([0x01, 0x80, 0xC2, 0x00, 0x00, 0x00]);
//!
//! let mut payload = LlcHeader::stp().to_bytes().to_vec();
//! payload.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
//!
//! let bytes = EthernetFrame::new(dst, src, payload).to_bytes()?;
//! assert_eq!(bytes.len(), EthernetFrame::MIN_FRAME_SIZE);
//! # Ok::<(), stproot_core::Error>(())
//! ```

pub mod ethernet;
pub mod llc;

pub use ethernet::EthernetFrame;
pub use llc::{LlcControl, LlcHeader, LlcSap};
