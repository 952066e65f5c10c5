//! Eviction policies.
//!
//! Every policy implements [`EvictionPolicy`](crate::traits::EvictionPolicy)
//! and tracks keys only; values live in the cache's store.

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lifo::LifoPolicy;
pub use lru::LruPolicy;
pub use mru::MruPolicy;
