//! Error types for encoded store operations.

use thiserror::Error;

/// Errors returned by the encoded read/write helpers.
///
/// A missing or expired key is never an error; only serialization failures are.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A value could not be serialized; the store was not touched
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A live value could not be parsed into the requested type
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

impl CacheError {
    /// Returns `true` if this error came from reading a stored value.
    pub fn is_decode(&self) -> bool {
        matches!(self, CacheError::Decode(_))
    }

    /// Returns `true` if this error came from serializing a value to store.
    pub fn is_encode(&self) -> bool {
        matches!(self, CacheError::Encode(_))
    }
}

/// Result alias for encoded store operations
pub type Result<T> = std::result::Result<T, CacheError>;
