//! Cache Contract
//!
//! The operations an expiring key/value store exposes to callers.

use bytes::Bytes;
use chrono::TimeDelta;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::codec;
use crate::error::Result;

/// Remaining-time value reported for keys that are absent or expired.
///
/// Callers should only rely on its sign: negative means "no live entry".
pub fn absent_ttl() -> TimeDelta {
    TimeDelta::seconds(-1)
}

/// Expiring key/value store
///
/// TTLs are signed: a zero or negative TTL stores an entry that is already
/// expired for every later read.
pub trait Cache {
    /// Get the raw value for `key`, or `None` if it is absent or expired
    fn get_bytes(&self, key: &str) -> Option<Bytes>;

    /// Insert or overwrite `key`, expiring `ttl` from now
    fn set_bytes(&self, key: &str, value: Bytes, ttl: TimeDelta);

    /// Remaining time to live, or [`absent_ttl`] if the key is absent or expired
    fn ttl(&self, key: &str) -> TimeDelta;

    /// Move the expiration of a live key to `ttl` from now.
    ///
    /// Returns `false` without creating anything if the key is absent or expired.
    fn expire(&self, key: &str, ttl: TimeDelta) -> bool;

    /// Get the value as text. Invalid UTF-8 is replaced, not rejected.
    fn get(&self, key: &str) -> Option<String> {
        self.get_bytes(key)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Store text under `key`
    fn set(&self, key: &str, value: &str, ttl: TimeDelta) {
        self.set_bytes(key, Bytes::copy_from_slice(value.as_bytes()), ttl);
    }

    /// Remaining time to live as an `Option`, `None` if absent or expired
    fn remaining(&self, key: &str) -> Option<Duration> {
        self.ttl(key).to_std().ok()
    }

    /// Decode the live value for `key`.
    ///
    /// An absent or expired key yields `Ok(None)` and nothing is decoded.
    /// A live value that doesn't parse as `T` is an error and stays stored.
    fn get_decoded<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(bytes) = self.get_bytes(key) else {
            return Ok(None);
        };
        codec::decode(&bytes).map(Some).map_err(|e| {
            debug!(key, error = %e, "Failed to decode stored value");
            e
        })
    }

    /// Encode `value` and store it under `key`.
    ///
    /// If encoding fails the store is left unchanged.
    fn set_encoded<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: TimeDelta) -> Result<()>
    where
        Self: Sized,
    {
        let bytes = codec::encode(value).map_err(|e| {
            debug!(key, error = %e, "Failed to encode value");
            e
        })?;
        self.set_bytes(key, Bytes::from(bytes), ttl);
        Ok(())
    }
}
