//! Storage error type shared by the showroom components.

use thiserror::Error;

/// Errors raised by slot persistence and the components built on it.
///
/// Expected business outcomes (failed authentication, duplicate username,
/// insufficient funds) are NOT represented here - they are typed results on
/// the operations that produce them. This enum is for faults: an unwritable
/// medium, a corrupt slot, a caller-side index bug.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying medium could not be read or written.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// A slot file exists but its contents do not decode.
    #[error("corrupt data in slot {slot:?}: {source}")]
    Corrupt {
        /// Slot whose contents failed to decode or encode.
        slot: String,
        /// Underlying serialization error.
        source: serde_json::Error,
    },

    /// An index-based cart operation was called out of range.
    #[error("index {index} out of range for {len} item(s)")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of items present at the time of the call.
        len: usize,
    },
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of range for 2 item(s)");
    }
}
