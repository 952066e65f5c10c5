//! Primary key/value storage.
//!
//! Stores own entries and answer lookups. They never evict: capacity is
//! enforced by the cache facade together with its eviction policy.

pub mod hashmap;
pub mod traits;

pub use hashmap::HashMapStore;
pub use traits::{StoreCore, StoreMut};
