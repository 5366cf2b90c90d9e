//! Store Metrics
//!
//! Hit/miss and expiration counters, updated without taking the store lock.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector
#[derive(Debug, Default)]
pub struct Metrics {
    /// Reads that found a live entry
    hits: AtomicU64,

    /// Reads that found nothing (absent or expired)
    misses: AtomicU64,

    /// Expired entries removed on access
    lazy_evictions: AtomicU64,

    /// Inserts and overwrites
    writes: AtomicU64,

    /// Successful expiration updates
    expire_updates: AtomicU64,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_lazy_eviction(&self) {
        self.lazy_evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_expire_update(&self) {
        self.expire_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn lazy_evictions(&self) -> u64 {
        self.lazy_evictions.load(Ordering::Relaxed)
    }

    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn expire_updates(&self) -> u64 {
        self.expire_updates.load(Ordering::Relaxed)
    }

    /// Fraction of reads that were hits, 0.0 when nothing was read yet
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            return 0.0;
        }
        hits as f64 / total as f64
    }

    /// Get a summary of metrics
    pub fn summary(&self) -> String {
        format!(
            "Reads: {} hits / {} misses ({:.1}% hit) | Writes: {} | Expire updates: {} | Lazy evictions: {}",
            self.hits(),
            self.misses(),
            self.hit_rate() * 100.0,
            self.writes(),
            self.expire_updates(),
            self.lazy_evictions()
        )
    }
}
