//! CLI argument parsing

use clap::Parser;
use std::time::Duration;
use stproot_attack::SessionConfig;
use stproot_core::{Error, MacAddr, Result};
use stproot_stp::BpduParameters;

#[derive(Parser, Debug)]
#[command(name = "stproot")]
#[command(
    version,
    about = "Claim the STP root bridge role by sending lowest-priority Configuration BPDUs",
    long_about = None,
    after_help = "Examples:\n  stproot -i eth0\n  stproot -i eth0 --count 200 --delay 0.5\n  stproot -i eth0 -v --hello 1 --max-age 10"
)]
pub struct Cli {
    /// Network interface to send on (e.g. eth0)
    #[arg(short = 'i', long)]
    pub interface: String,

    /// Root Bridge priority to advertise (0 is the best possible)
    #[arg(long, value_name = "PRIORITY", default_value_t = 0)]
    pub root_priority: u64,

    /// Own bridge priority to advertise
    #[arg(long, value_name = "PRIORITY", default_value_t = 0)]
    pub bridge_priority: u64,

    /// Hello Time in seconds
    #[arg(long = "hello", value_name = "SECONDS", default_value_t = 2)]
    pub hello_time: u64,

    /// Max Age in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 20)]
    pub max_age: u64,

    /// Forward Delay in seconds
    #[arg(long = "fwd-delay", value_name = "SECONDS", default_value_t = 15)]
    pub forward_delay: u64,

    /// Message Age in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 0)]
    pub message_age: u64,

    /// Port ID (priority byte, port number byte); decimal or 0x-prefixed hex
    #[arg(long, value_name = "ID", value_parser = parse_port_id, default_value = "0x8001")]
    pub port_id: u64,

    /// Number of BPDUs to send (0 = until interrupted)
    #[arg(short = 'c', long, default_value_t = 0)]
    pub count: u64,

    /// Delay between BPDUs in seconds
    #[arg(short = 'd', long, value_name = "SECONDS", default_value_t = 2.0)]
    pub delay: f64,

    /// Log every BPDU sent instead of a periodic rate summary
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the BPDU fields and bind them to the sender's address
    pub fn bpdu_parameters(&self, source_mac: MacAddr) -> Result<BpduParameters> {
        BpduParameters::builder(source_mac)
            .root_priority(self.root_priority)
            .bridge_priority(self.bridge_priority)
            .port_id(self.port_id)
            .hello_time(self.hello_time)
            .max_age(self.max_age)
            .forward_delay(self.forward_delay)
            .message_age(self.message_age)
            .build()
    }

    /// Transmit loop settings; a count of 0 means unbounded
    pub fn session_config(&self) -> Result<SessionConfig> {
        let delay = Duration::try_from_secs_f64(self.delay).map_err(|_| {
            Error::invalid_parameter("delay", "must be a finite, non-negative number of seconds")
        })?;

        Ok(SessionConfig {
            count: (self.count > 0).then_some(self.count),
            delay,
            verbose: self.verbose,
            ..Default::default()
        })
    }
}

fn parse_port_id(s: &str) -> std::result::Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid port ID '{}': {}", s, e))
}
