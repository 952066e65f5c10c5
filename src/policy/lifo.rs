//! LIFO (Last In, First Out) eviction policy.
//!
//! The tracker is a stack of keys. New keys are pushed on top and so are
//! keys whose value is overwritten; lookups leave the stack alone. When an
//! insert overflows the cache, the victim is the top of the stack as it
//! stood before the incoming key: the most recently written resident entry.
//!
//! ```text
//!   stack: bottom [A] [B] [C] [D] top
//!
//!   put(E): victim = D (top), then E is pushed
//!   stack: bottom [A] [B] [C] [E] top
//! ```
//!
//! Use when the newest writes are the least likely to be read back, e.g.
//! scratch buffers. Avoid for general caching.
//!
//! ## Example
//!
//! ```
//! use evictkit::LifoCache;
//!
//! let mut cache = LifoCache::new();
//! for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
//!     cache.put(k, v);
//! }
//! cache.put("E", 5);
//!
//! assert!(!cache.contains(&"D"));
//! assert!(cache.contains(&"E"));
//! ```

use std::hash::Hash;

use crate::ds::KeyOrder;
use crate::traits::EvictionPolicy;

/// Write-order stack: victim is the top.
#[derive(Debug)]
pub struct LifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    stack: KeyOrder<K>,
}

impl<K> EvictionPolicy<K> for LifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: KeyOrder::with_capacity(capacity),
        }
    }

    fn name(&self) -> &'static str {
        "lifo"
    }

    #[inline]
    fn on_put(&mut self, key: &K, is_new: bool) {
        if is_new || !self.stack.move_to_back(key) {
            self.stack.push_back(key.clone());
        }
    }

    #[inline]
    fn on_get(&mut self, _key: &K) {}

    #[inline]
    fn select_victim(&self) -> Option<&K> {
        self.stack.back()
    }

    fn remove(&mut self, key: &K) -> bool {
        self.stack.remove(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.stack.contains(key)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn eviction_order(&self) -> Vec<&K> {
        let mut keys: Vec<&K> = self.stack.iter().collect();
        keys.reverse();
        keys
    }
}
