//! CLI interface for stproot
//!
//! Argument parsing and the conversion of raw command-line values into
//! validated BPDU parameters and transmit-loop settings.

pub mod args;

pub use args::Cli;
