//! Common types used throughout stproot

use std::fmt;

/// MAC Address (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// Create a MAC address from a slice, which must be exactly 6 bytes
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; 6]>::try_from(slice).ok().map(MacAddr)
    }

    /// Get bytes as slice
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0x00; 6]
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_display() {
        let mac = MacAddr([0xAA, 0xBB, 0xCC, 0x0D, 0xEE, 0xFF]);
        assert_eq!(mac.to_string(), "aa:bb:cc:0d:ee:ff");
    }

    #[test]
    fn test_from_slice_requires_six_bytes() {
        assert!(MacAddr::from_slice(&[1, 2, 3, 4, 5]).is_none());
        assert!(MacAddr::from_slice(&[1, 2, 3, 4, 5, 6, 7]).is_none());
        assert_eq!(
            MacAddr::from_slice(&[1, 2, 3, 4, 5, 6]),
            Some(MacAddr([1, 2, 3, 4, 5, 6]))
        );
    }

    #[test]
    fn test_zero() {
        assert!(MacAddr([0x00; 6]).is_zero());
        assert!(!MacAddr([0x00, 0x00, 0x00, 0x00, 0x00, 0x01]).is_zero());
    }

    #[test]
    fn test_ordering_is_bytewise() {
        assert!(MacAddr([0x00, 0xff, 0xff, 0xff, 0xff, 0xff]) < MacAddr([0x01, 0, 0, 0, 0, 0]));
    }
}
