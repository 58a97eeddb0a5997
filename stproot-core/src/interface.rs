//! Network interface resolution and raw frame transmission

use crate::{Error, MacAddr, Result};
use pnet_datalink::{self, Channel, DataLinkSender};
use std::fmt;
use std::io;
use tracing::debug;

/// Destination for fully built link-layer frames.
///
/// The transmit loop only ever talks to this trait, so the pnet-backed
/// [`RawSender`] can be swapped for an in-memory sink.
pub trait FrameSink {
    /// Hand one complete frame (Ethernet header included) to the link.
    fn send_frame(&mut self, frame: &[u8]) -> Result<()>;
}

/// Network interface
#[derive(Debug, Clone)]
pub struct Interface {
    /// Interface name (e.g., "eth0", "en0")
    pub name: String,
    /// MAC address
    pub mac_address: MacAddr,
    /// Is interface up?
    pub is_up: bool,
}

impl Interface {
    /// Look up an interface by name and resolve its hardware address
    pub fn by_name(name: &str) -> Result<Self> {
        let iface = find_interface(name)?;
        let mac_address = hardware_address(&iface.name, iface.mac)?;

        Ok(Self {
            name: iface.name.clone(),
            mac_address,
            is_up: iface.is_up(),
        })
    }

    /// Open a raw Ethernet channel on this interface.
    ///
    /// The returned sender is owned by the caller for as long as it keeps
    /// transmitting; the channel closes when it is dropped.
    pub fn open_sender(&self) -> Result<RawSender> {
        let iface = find_interface(&self.name)?;

        let tx = match pnet_datalink::channel(&iface, Default::default()) {
            Ok(Channel::Ethernet(tx, _rx)) => tx,
            Ok(_) => {
                return Err(Error::InterfaceResolution {
                    name: self.name.clone(),
                    reason: "unsupported channel type".to_string(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return Err(Error::InsufficientPrivileges(format!(
                    "cannot open raw socket on {} (run as root or grant CAP_NET_RAW)",
                    self.name
                )))
            }
            Err(e) => return Err(Error::Io(e)),
        };

        debug!(interface = %self.name, "Raw channel opened");

        Ok(RawSender {
            interface: self.name.clone(),
            tx,
        })
    }
}

/// Exclusive raw-link sender bound to one interface
pub struct RawSender {
    interface: String,
    tx: Box<dyn DataLinkSender>,
}

impl FrameSink for RawSender {
    fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.tx
            .send_to(frame, None)
            .ok_or_else(|| Error::transmit(format!("send on {} not attempted", self.interface)))?
            .map_err(|e| Error::transmit(format!("send on {} failed: {}", self.interface, e)))
    }
}

impl fmt::Debug for RawSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSender")
            .field("interface", &self.interface)
            .finish_non_exhaustive()
    }
}

fn find_interface(name: &str) -> Result<pnet_datalink::NetworkInterface> {
    pnet_datalink::interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| Error::InterfaceNotFound(name.to_string()))
}

/// Turn the address reported by the OS into a usable source MAC.
fn hardware_address(name: &str, mac: Option<pnet_datalink::MacAddr>) -> Result<MacAddr> {
    let mac = mac.ok_or_else(|| Error::InterfaceResolution {
        name: name.to_string(),
        reason: "interface has no hardware address".to_string(),
    })?;

    let mac = MacAddr([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]);
    if mac.is_zero() {
        return Err(Error::InterfaceResolution {
            name: name.to_string(),
            reason: "hardware address is 00:00:00:00:00:00".to_string(),
        });
    }

    Ok(mac)
}
