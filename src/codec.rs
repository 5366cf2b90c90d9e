//! Value Codec
//!
//! JSON encoding between structured values and the stored byte form.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CacheError, Result};

/// Serialize a value to stored bytes
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(CacheError::Encode)
}

/// Parse stored bytes into `T`
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(CacheError::Decode)
}
