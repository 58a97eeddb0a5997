//! BPDU transmit loop for stproot
//!
//! This crate replays one pre-built STP frame at a fixed interval:
//!
//! - [`TransmitSession`]: owns the frame sink and runs the send loop
//! - [`StopSignal`]: cooperative cancellation shared with the interrupt handler
//! - [`SessionSummary`]: final count, elapsed time and why the loop stopped
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use stproot_attack::{SessionConfig, StopSignal, TransmitSession};
//! use stproot_core::Interface;
//! use stproot_stp::{assemble_frame, encode_config_bpdu, BpduParameters};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let interface = Interface::by_name("eth0")?;
//!     let params = BpduParameters::builder(interface.mac_address).build()?;
//!     let frame = assemble_frame(interface.mac_address, encode_config_bpdu(&params));
//!
//!     let config = SessionConfig {
//!         count: Some(10),
//!         delay: Duration::from_secs(2),
//!         ..Default::default()
//!     };
//!     let mut session =
//!         TransmitSession::new(interface.open_sender()?, frame, config, StopSignal::new())?;
//!     let summary = session.run().await;
//!     println!("{} BPDUs sent", summary.sent);
//!     Ok(())
//! }
//! ```

pub mod session;
pub mod stop;

pub use session::{SessionConfig, SessionSummary, StopReason, TransmitSession};
pub use stop::StopSignal;
