//! Validated BPDU parameters

use stproot_core::{Error, MacAddr, Result};

use crate::constants::*;

/// Parameters of the Configuration BPDU sent for a whole session.
///
/// Built through [`BpduParameters::builder`], which checks every numeric
/// field against the width of the wire field it ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpduParameters {
    root_priority: u16,
    bridge_priority: u16,
    source_mac: MacAddr,
    port_id: u16,
    hello_time: u16,
    max_age: u16,
    forward_delay: u16,
    message_age: u16,
}

impl BpduParameters {
    /// Start building parameters for the given source address.
    ///
    /// Defaults: both priorities 0, port 0x8001, hello 2 s, max age 20 s,
    /// forward delay 15 s, message age 0 s.
    pub fn builder(source_mac: MacAddr) -> BpduParametersBuilder {
        BpduParametersBuilder {
            source_mac,
            root_priority: LOWEST_PRIORITY as u64,
            bridge_priority: LOWEST_PRIORITY as u64,
            port_id: DEFAULT_PORT_ID as u64,
            hello_time: DEFAULT_HELLO_TIME as u64,
            max_age: DEFAULT_MAX_AGE as u64,
            forward_delay: DEFAULT_FORWARD_DELAY as u64,
            message_age: DEFAULT_MESSAGE_AGE as u64,
        }
    }

    pub fn root_priority(&self) -> u16 {
        self.root_priority
    }

    pub fn bridge_priority(&self) -> u16 {
        self.bridge_priority
    }

    pub fn source_mac(&self) -> MacAddr {
        self.source_mac
    }

    pub fn port_id(&self) -> u16 {
        self.port_id
    }

    /// Hello time in seconds
    pub fn hello_time(&self) -> u16 {
        self.hello_time
    }

    /// Max age in seconds
    pub fn max_age(&self) -> u16 {
        self.max_age
    }

    /// Forward delay in seconds
    pub fn forward_delay(&self) -> u16 {
        self.forward_delay
    }

    /// Message age in seconds
    pub fn message_age(&self) -> u16 {
        self.message_age
    }
}

/// Builder taking raw (unchecked) integers, typically straight from the CLI
#[derive(Debug, Clone)]
pub struct BpduParametersBuilder {
    source_mac: MacAddr,
    root_priority: u64,
    bridge_priority: u64,
    port_id: u64,
    hello_time: u64,
    max_age: u64,
    forward_delay: u64,
    message_age: u64,
}

impl BpduParametersBuilder {
    pub fn root_priority(mut self, value: u64) -> Self {
        self.root_priority = value;
        self
    }

    pub fn bridge_priority(mut self, value: u64) -> Self {
        self.bridge_priority = value;
        self
    }

    pub fn port_id(mut self, value: u64) -> Self {
        self.port_id = value;
        self
    }

    pub fn hello_time(mut self, seconds: u64) -> Self {
        self.hello_time = seconds;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn forward_delay(mut self, seconds: u64) -> Self {
        self.forward_delay = seconds;
        self
    }

    pub fn message_age(mut self, seconds: u64) -> Self {
        self.message_age = seconds;
        self
    }

    /// Validate every field and produce the immutable parameters.
    ///
    /// Priorities and the port ID must fit 16 bits. Timers must be below
    /// 256 s, the first value whose 1/256 s encoding overflows 16 bits.
    pub fn build(self) -> Result<BpduParameters> {
        Ok(BpduParameters {
            root_priority: narrow("root_priority", self.root_priority, u16::MAX as u64)?,
            bridge_priority: narrow("bridge_priority", self.bridge_priority, u16::MAX as u64)?,
            source_mac: self.source_mac,
            port_id: narrow("port_id", self.port_id, u16::MAX as u64)?,
            hello_time: narrow("hello_time", self.hello_time, MAX_TIMER_SECONDS)?,
            max_age: narrow("max_age", self.max_age, MAX_TIMER_SECONDS)?,
            forward_delay: narrow("forward_delay", self.forward_delay, MAX_TIMER_SECONDS)?,
            message_age: narrow("message_age", self.message_age, MAX_TIMER_SECONDS)?,
        })
    }
}

fn narrow(name: &str, value: u64, max: u64) -> Result<u16> {
    if value > max {
        return Err(Error::out_of_range(name, value, max));
    }
    u16::try_from(value).map_err(|_| Error::out_of_range(name, value, max))
}
