//! FIFO (First In, First Out) eviction policy.
//!
//! Evicts the entry that was inserted earliest. Neither lookups nor value
//! updates change the order: a key's position is fixed the moment it first
//! enters the cache.
//!
//! ```text
//!   order: head ─► [A] ◄──► [B] ◄──► [C] ◄──► [D] ◄── tail
//!                  EVICT                      newest
//!
//!   put(E): victim = A, then E is appended
//!   order: head ─► [B] ◄──► [C] ◄──► [D] ◄──► [E] ◄── tail
//! ```
//!
//! ## Example
//!
//! ```
//! use evictkit::FifoCache;
//!
//! let mut cache = FifoCache::new();
//! for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
//!     cache.put(k, v);
//! }
//!
//! // reads do not protect "A"
//! cache.get(&"A");
//! cache.put("E", 5);
//!
//! assert!(!cache.contains(&"A"));
//! assert_eq!(cache.len(), 4);
//! ```

use std::hash::Hash;

use crate::ds::KeyOrder;
use crate::traits::EvictionPolicy;

/// Insertion-order tracker: victim is the head of the sequence.
#[derive(Debug)]
pub struct FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    order: KeyOrder<K>,
}

impl<K> FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    /// Zero-based insertion age, oldest first.
    pub fn age_rank(&self, key: &K) -> Option<usize> {
        self.order.position(key)
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            order: KeyOrder::with_capacity(capacity),
        }
    }

    fn name(&self) -> &'static str {
        "fifo"
    }

    #[inline]
    fn on_put(&mut self, key: &K, is_new: bool) {
        if is_new {
            self.order.push_back(key.clone());
        }
    }

    #[inline]
    fn on_get(&mut self, _key: &K) {}

    #[inline]
    fn select_victim(&self) -> Option<&K> {
        self.order.front()
    }

    fn remove(&mut self, key: &K) -> bool {
        self.order.remove(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.order.contains(key)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn eviction_order(&self) -> Vec<&K> {
        self.order.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_with(keys: &[&'static str]) -> FifoPolicy<&'static str> {
        let mut policy = FifoPolicy::with_capacity(keys.len());
        for key in keys {
            policy.on_put(key, true);
        }
        policy
    }

    #[test]
    fn victim_is_oldest_insert() {
        let policy = policy_with(&["a", "b", "c"]);
        assert_eq!(policy.select_victim(), Some(&"a"));
        assert_eq!(policy.eviction_order(), vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn updates_and_reads_keep_position() {
        let mut policy = policy_with(&["a", "b", "c"]);
        policy.on_put(&"a", false);
        policy.on_get(&"a");
        policy.on_get(&"a");

        assert_eq!(policy.select_victim(), Some(&"a"));
        assert_eq!(policy.age_rank(&"a"), Some(0));
        assert_eq!(policy.age_rank(&"c"), Some(2));
    }

    #[test]
    fn remove_advances_victim() {
        let mut policy = policy_with(&["a", "b"]);
        assert!(policy.remove(&"a"));
        assert!(!policy.contains(&"a"));
        assert_eq!(policy.select_victim(), Some(&"b"));
        assert_eq!(policy.len(), 1);
    }

    #[test]
    fn empty_policy_has_no_victim() {
        let mut policy = policy_with(&["a"]);
        policy.clear();
        assert!(policy.is_empty());
        assert_eq!(policy.select_victim(), None);
        assert_eq!(policy.name(), "fifo");
    }
}
