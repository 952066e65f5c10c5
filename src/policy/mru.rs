//! MRU (Most Recently Used) eviction policy.
//!
//! Bookkeeping is identical to LRU (writes and reads move a key to the
//! tail) but the victim is the tail: the resident entry touched most
//! recently before the incoming key. Suited to cyclic scans where the item
//! just used is the one needed furthest in the future.
//!
//! ```text
//!   put A, B, C, D      [A] [B] [C] [D]
//!   get A               [B] [C] [D] [A]
//!   put E → victim A    [B] [C] [D] [E]
//! ```
//!
//! ## Example
//!
//! ```
//! use evictkit::MruCache;
//!
//! let mut cache = MruCache::new();
//! for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
//!     cache.put(k, v);
//! }
//! cache.get(&"A");
//! cache.put("E", 5);
//!
//! assert!(!cache.contains(&"A"));
//! assert!(cache.contains(&"B"));
//! ```

use std::hash::Hash;

use crate::ds::KeyOrder;
use crate::traits::EvictionPolicy;

#[derive(Debug)]
pub struct MruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    recency: KeyOrder<K>,
}

impl<K> EvictionPolicy<K> for MruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            recency: KeyOrder::with_capacity(capacity),
        }
    }

    fn name(&self) -> &'static str {
        "mru"
    }

    #[inline]
    fn on_put(&mut self, key: &K, _is_new: bool) {
        if !self.recency.move_to_back(key) {
            self.recency.push_back(key.clone());
        }
    }

    #[inline]
    fn on_get(&mut self, key: &K) {
        self.recency.move_to_back(key);
    }

    #[inline]
    fn select_victim(&self) -> Option<&K> {
        self.recency.back()
    }

    fn remove(&mut self, key: &K) -> bool {
        self.recency.remove(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.recency.contains(key)
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn clear(&mut self) {
        self.recency.clear();
    }

    fn eviction_order(&self) -> Vec<&K> {
        let mut keys: Vec<&K> = self.recency.iter().collect();
        keys.reverse();
        keys
    }
}
