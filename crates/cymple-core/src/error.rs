//! Error types for the Cymple face receiver

use std::path::PathBuf;

use thiserror::Error;

/// Receiver errors
#[derive(Error, Debug)]
pub enum CympleError {
    // Decode errors
    #[error("packet too short: expected {expected}, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("bad magic prefix: {0:#010x}")]
    BadMagic(i32),

    #[error("unknown message type: {0}")]
    UnknownType(u16),

    // Transport errors
    #[error("transport unavailable: {0}")]
    TransportUnavailable(String),

    #[error("transport error: {0}")]
    TransportError(String),

    #[error("receive timed out")]
    TransportTimeout,

    // Config errors
    #[error("config file not found: {0}")]
    ConfigMissing(PathBuf),
}

impl CympleError {
    /// Decode failures are per-packet and never fatal to the receive loop.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            CympleError::TooShort { .. } | CympleError::BadMagic(_) | CympleError::UnknownType(_)
        )
    }
}

/// Result type for receiver operations
pub type CympleResult<T> = Result<T, CympleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_classification() {
        assert!(CympleError::TooShort {
            expected: 12,
            actual: 3
        }
        .is_decode());
        assert!(CympleError::BadMagic(0x1234).is_decode());
        assert!(CympleError::UnknownType(7).is_decode());
        assert!(!CympleError::TransportTimeout.is_decode());
        assert!(!CympleError::TransportError("refused".into()).is_decode());
    }
}
