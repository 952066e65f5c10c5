//! evictkit: bounded key-value caches with pluggable eviction policies.
//!
//! One facade, [`Cache`], composes a [`HashMapStore`](store::HashMapStore)
//! with an [`EvictionPolicy`](traits::EvictionPolicy) chosen by type:
//!
//! | Alias        | Victim when a new key overflows the cache             |
//! |--------------|-------------------------------------------------------|
//! | [`FifoCache`]| oldest insert                                         |
//! | [`LifoCache`]| newest resident write                                 |
//! | [`LruCache`] | least recently used                                   |
//! | [`MruCache`] | most recently used                                    |
//! | [`LfuCache`] | lowest access count, least recently touched on a tie  |
//!
//! Evictions are reported to a [`DiscardListener`](listener::DiscardListener);
//! policies chosen at runtime go through [`builder::CacheBuilder`].
//!
//! ```
//! use evictkit::LruCache;
//!
//! let mut cache = LruCache::new().with_listener(Vec::new());
//! for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
//!     cache.put(k, v);
//! }
//! cache.get(&"A");
//! cache.put("E", 5);
//! assert_eq!(cache.listener(), &vec!["B"]);
//! ```

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod listener;
pub mod policy;
pub mod prelude;
pub mod store;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(feature = "concurrency")]
pub mod sync;

/// Default number of entries a cache holds.
pub const MAX_ITEMS: usize = 4;

pub use crate::cache::{Cache, FifoCache, LfuCache, LifoCache, LruCache, MruCache};
#[cfg(feature = "metrics")]
pub use crate::metrics::CacheMetricsSnapshot;
