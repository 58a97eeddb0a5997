//! stproot core library
//!
//! Shared error handling, the hardware address type and link-layer access
//! (interface resolution and raw frame transmission) used by the other
//! stproot crates.

pub mod error;
pub mod interface;
pub mod types;

pub use error::{Error, Result};
pub use interface::{FrameSink, Interface, RawSender};
pub use types::MacAddr;
