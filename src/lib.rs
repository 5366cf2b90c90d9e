//! ttlstore - In-Process Expiring Key-Value Store
//!
//! Byte values keyed by string, each with its own time-to-live. Expired
//! entries are removed lazily on access; nothing runs in the background.
//!
//! ```rust
//! use chrono::TimeDelta;
//! use ttlstore::{Cache, ExpiringStore};
//!
//! let store = ExpiringStore::new();
//! store.set("session:1", "alice", TimeDelta::seconds(30));
//! assert_eq!(store.get("session:1").as_deref(), Some("alice"));
//! assert!(store.ttl("missing") < TimeDelta::zero());
//! ```

pub mod cache;
pub mod codec;
pub mod error;
pub mod metrics;
pub mod storage;

pub use cache::{absent_ttl, Cache};
pub use error::CacheError;
pub use metrics::Metrics;
pub use storage::{ExpiringStore, StoreConfig};
