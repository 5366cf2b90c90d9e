//! Storage Engine
//!
//! In-memory key-value store with per-key TTL and lazy expiration.

mod config;
mod store;

pub use config::StoreConfig;
pub use store::ExpiringStore;
