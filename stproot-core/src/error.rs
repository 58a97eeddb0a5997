//! Error types for stproot

use thiserror::Error;

/// Result type alias for stproot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for stproot
#[derive(Error, Debug)]
pub enum Error {
    /// Network I/O error
    #[error("Network I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric input does not fit the field it is written to
    #[error("Parameter '{name}' out of range: {value} (maximum {max})")]
    ParameterOutOfRange {
        name: String,
        value: String,
        max: u64,
    },

    /// Invalid parameter error
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Interface not found
    #[error("Interface '{0}' not found")]
    InterfaceNotFound(String),

    /// Interface exists but its hardware address cannot be used
    #[error("Cannot resolve hardware address of '{name}': {reason}")]
    InterfaceResolution { name: String, reason: String },

    /// Insufficient privileges
    #[error("Insufficient privileges: {0}")]
    InsufficientPrivileges(String),

    /// The link-layer send primitive failed
    #[error("Transmit error: {0}")]
    Transmit(String),

    /// Packet parsing error
    #[error("Packet parsing error: {0}")]
    PacketParsing(String),

    /// Payload does not fit the 802.3 length field
    #[error("Frame payload too large: {size} bytes (maximum {max})")]
    FrameTooLarge { size: usize, max: usize },
}

impl Error {
    /// Create a parameter out of range error
    pub fn out_of_range<S: Into<String>, V: ToString>(name: S, value: V, max: u64) -> Self {
        Error::ParameterOutOfRange {
            name: name.into(),
            value: value.to_string(),
            max,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a transmit error with a custom message
    pub fn transmit<S: Into<String>>(msg: S) -> Self {
        Error::Transmit(msg.into())
    }

    /// Create a packet parsing error with a custom message
    pub fn parsing<S: Into<String>>(msg: S) -> Self {
        Error::PacketParsing(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("root_priority", 70000u64, 65535);
        assert_eq!(
            err.to_string(),
            "Parameter 'root_priority' out of range: 70000 (maximum 65535)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
