//! Expiring Key-Value Store
//!
//! Hashmap of values with expiration deadlines behind a single mutex.
//! Expired entries are removed lazily, by whichever read first notices them.

use bytes::Bytes;
use chrono::TimeDelta;
use hashbrown::HashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use super::StoreConfig;
use crate::cache::{absent_ttl, Cache};
use crate::metrics::Metrics;

/// Deadlines are capped ~100 years out so `Instant` arithmetic can't overflow
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Absolute deadline for `ttl` measured from `now`
fn deadline(now: Instant, ttl: TimeDelta) -> Instant {
    match ttl.to_std() {
        Ok(ttl) => now + ttl.min(MAX_TTL),
        // negative: already in the past
        Err(_) => now,
    }
}

/// Entry in the store with value and expiration
#[derive(Debug, Clone)]
struct Entry {
    value: Bytes,
    expires_at: Instant,
}

impl Entry {
    fn new(value: Bytes, expires_at: Instant) -> Self {
        Self { value, expires_at }
    }

    /// Live only while `now` is strictly before the deadline
    fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Thread-safe in-memory key-value store with per-key expiration
///
/// Every operation, reads included, holds the one lock for its whole
/// duration because a read may delete an expired entry. Clones share the
/// same map.
#[derive(Debug, Clone)]
pub struct ExpiringStore {
    inner: Arc<Mutex<HashMap<String, Entry>>>,
    metrics: Arc<Metrics>,
}

impl Default for ExpiringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpiringStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store from explicit configuration
    pub fn with_config(config: StoreConfig) -> Self {
        debug!(
            initial_capacity = config.initial_capacity,
            "Creating expiring store"
        );
        Self {
            inner: Arc::new(Mutex::new(HashMap::with_capacity(config.initial_capacity))),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Get the number of resident entries (including expired ones not yet evicted)
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counters shared by every clone of this store
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    /// Look up a live entry, evicting it first if it has expired
    fn live_entry<'m>(
        &self,
        map: &'m mut HashMap<String, Entry>,
        key: &str,
        now: Instant,
    ) -> Option<&'m mut Entry> {
        if map.get(key)?.is_expired_at(now) {
            map.remove(key);
            self.metrics.record_lazy_eviction();
            trace!(key, "Evicted expired key");
            return None;
        }
        map.get_mut(key)
    }
}

impl Cache for ExpiringStore {
    fn get_bytes(&self, key: &str) -> Option<Bytes> {
        let mut map = self.inner.lock();
        let value = self
            .live_entry(&mut map, key, Instant::now())
            .map(|entry| entry.value.clone());

        match value {
            Some(_) => self.metrics.record_hit(),
            None => self.metrics.record_miss(),
        }
        value
    }

    fn set_bytes(&self, key: &str, value: Bytes, ttl: TimeDelta) {
        let mut map = self.inner.lock();
        let entry = Entry::new(value, deadline(Instant::now(), ttl));
        map.insert(key.to_owned(), entry);
        self.metrics.record_write();
    }

    fn ttl(&self, key: &str) -> TimeDelta {
        let mut map = self.inner.lock();
        let now = Instant::now();
        match self.live_entry(&mut map, key, now) {
            Some(entry) => TimeDelta::from_std(entry.expires_at.duration_since(now))
                .unwrap_or_else(|_| TimeDelta::max_value()),
            None => absent_ttl(),
        }
    }

    fn expire(&self, key: &str, ttl: TimeDelta) -> bool {
        let mut map = self.inner.lock();
        let now = Instant::now();
        match self.live_entry(&mut map, key, now) {
            Some(entry) => {
                entry.expires_at = deadline(now, ttl);
                self.metrics.record_expire_update();
                true
            }
            None => false,
        }
    }
}
