//! HashMap-backed store.
//!
//! ## Architecture
//! - Entries live in an `FxHashMap<K, V>`; lookups are O(1) on average.
//! - The store has no capacity of its own. The facade checks the bound
//!   after every insert and asks the policy for a victim.
//!
//! ## Example Usage
//! ```rust
//! use evictkit::store::{HashMapStore, StoreCore, StoreMut};
//!
//! let mut store: HashMapStore<u64, String> = HashMapStore::new();
//! assert_eq!(store.set(1, "a".to_string()), None);
//! assert_eq!(store.set(1, "b".to_string()), Some("a".to_string()));
//! assert!(store.contains(&1));
//! assert_eq!(store.len(), 1);
//! ```
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::store::traits::{StoreCore, StoreMut};

/// Single-threaded `FxHashMap`-backed store.
#[derive(Debug, Clone)]
pub struct HashMapStore<K, V> {
    map: FxHashMap<K, V>,
}

impl<K, V> HashMapStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a store with room for `capacity` entries before rehashing.
    ///
    /// The extra slot covers the transient overshoot between an insert and
    /// the eviction it triggers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(
                capacity.saturating_add(1),
                Default::default(),
            ),
        }
    }

    /// Iterate over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.map.iter()
    }
}

impl<K, V> Default for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> StoreCore<K, V> for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.map.keys())
    }
}

impl<K, V> StoreMut<K, V> for HashMapStore<K, V>
where
    K: Eq + Hash,
{
    #[inline]
    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    #[inline]
    fn delete(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}
