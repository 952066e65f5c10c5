//! Frequency buckets for LFU tracking.
//!
//! Each key carries an access count. Keys sharing a count live in one
//! bucket, a [`KeyOrder`] ordered by the moment they entered that bucket.
//! A key enters a bucket exactly when it is inserted or touched, so bucket
//! order is also recency order among the keys at that frequency: the head
//! of the lowest bucket is the least frequently used key, and among equal
//! counts the least recently touched one.
//!
//! ## Architecture
//!
//! ```text
//!   freq: FxHashMap<K, u64>          buckets: BTreeMap<u64, KeyOrder<K>>
//!   ┌──────┬──────┐
//!   │ "a"  │  3   │                  1 ─► [d] ◄──► [b]        (head = victim)
//!   │ "b"  │  1   │                  3 ─► [a]
//!   │ "c"  │  5   │                  5 ─► [c]
//!   │ "d"  │  1   │
//!   └──────┴──────┘
//! ```
//!
//! ## Operations
//!
//! | Operation  | Time        | Notes                                 |
//! |------------|-------------|---------------------------------------|
//! | `insert`   | O(log F)    | New keys start at frequency 1         |
//! | `touch`    | O(log F)    | Frequency + 1, moves to bucket tail   |
//! | `remove`   | O(log F)    | Drops empty buckets                   |
//! | `peek_min` | O(log F)    | F = number of distinct frequencies    |
//!
//! ## Example
//!
//! ```
//! use evictkit::ds::FrequencyBuckets;
//!
//! let mut buckets = FrequencyBuckets::new();
//! buckets.insert("a");
//! buckets.insert("b");
//! buckets.touch(&"a");
//!
//! assert_eq!(buckets.frequency(&"a"), Some(2));
//! assert_eq!(buckets.peek_min(), Some(&"b"));
//! ```

use std::collections::BTreeMap;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::KeyOrder;

/// Frequency at which freshly inserted keys start.
pub const INITIAL_FREQUENCY: u64 = 1;

#[derive(Debug)]
pub struct FrequencyBuckets<K>
where
    K: Clone + Eq + Hash,
{
    freq: FxHashMap<K, u64>,
    buckets: BTreeMap<u64, KeyOrder<K>>,
}

impl<K> FrequencyBuckets<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            freq: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            buckets: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.freq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.freq.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.freq.contains_key(key)
    }

    #[inline]
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.freq.get(key).copied()
    }

    /// Smallest frequency currently tracked.
    pub fn min_frequency(&self) -> Option<u64> {
        self.buckets.keys().next().copied()
    }

    /// Starts tracking `key` at [`INITIAL_FREQUENCY`].
    ///
    /// Returns `false` and leaves the count untouched if `key` is tracked.
    pub fn insert(&mut self, key: K) -> bool {
        if self.freq.contains_key(&key) {
            return false;
        }
        self.freq.insert(key.clone(), INITIAL_FREQUENCY);
        self.buckets
            .entry(INITIAL_FREQUENCY)
            .or_default()
            .push_back(key);
        true
    }

    /// Bumps the frequency of `key` and returns the new value.
    pub fn touch(&mut self, key: &K) -> Option<u64> {
        let slot = self.freq.get_mut(key)?;
        let old = *slot;
        let new = old.saturating_add(1);
        *slot = new;

        self.unlink(key, old);
        self.buckets.entry(new).or_default().push_back(key.clone());
        Some(new)
    }

    /// Stops tracking `key`, returning its last frequency.
    pub fn remove(&mut self, key: &K) -> Option<u64> {
        let freq = self.freq.remove(key)?;
        self.unlink(key, freq);
        Some(freq)
    }

    /// Least frequently used key; ties go to the least recently touched.
    pub fn peek_min(&self) -> Option<&K> {
        self.buckets.values().next().and_then(KeyOrder::front)
    }

    /// Removes and returns the key [`peek_min`](Self::peek_min) would name.
    pub fn pop_min(&mut self) -> Option<(K, u64)> {
        let key = self.peek_min()?.clone();
        let freq = self.remove(&key)?;
        Some((key, freq))
    }

    /// Keys in eviction order: ascending frequency, then recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(freq, bucket)| bucket.iter().map(move |key| (key, *freq)))
    }

    pub fn clear(&mut self) {
        self.freq.clear();
        self.buckets.clear();
    }

    fn unlink(&mut self, key: &K, freq: u64) {
        if let Some(bucket) = self.buckets.get_mut(&freq) {
            bucket.remove(key);
            if bucket.is_empty() {
                self.buckets.remove(&freq);
            }
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut bucketed = 0usize;
        for (freq, bucket) in &self.buckets {
            assert!(!bucket.is_empty(), "empty bucket at frequency {freq}");
            bucket.debug_validate_invariants();
            for key in bucket.iter() {
                assert_eq!(self.freq.get(key), Some(freq), "bucket/frequency mismatch");
            }
            bucketed += bucket.len();
        }
        assert_eq!(bucketed, self.freq.len());
    }
}

impl<K> Default for FrequencyBuckets<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_starts_at_one() {
        let mut buckets = FrequencyBuckets::new();
        assert!(buckets.insert("a"));
        assert!(!buckets.insert("a"));

        assert_eq!(buckets.frequency(&"a"), Some(1));
        assert_eq!(buckets.min_frequency(), Some(1));
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn touch_moves_key_up_a_bucket() {
        let mut buckets = FrequencyBuckets::new();
        buckets.insert("a");
        buckets.insert("b");

        assert_eq!(buckets.touch(&"a"), Some(2));
        assert_eq!(buckets.touch(&"a"), Some(3));
        assert_eq!(buckets.touch(&"missing"), None);

        assert_eq!(buckets.peek_min(), Some(&"b"));
        assert_eq!(buckets.min_frequency(), Some(1));
        buckets.debug_validate_invariants();
    }

    #[test]
    fn ties_resolve_to_least_recently_touched() {
        let mut buckets = FrequencyBuckets::new();
        buckets.insert("a");
        buckets.insert("b");
        buckets.insert("c");

        buckets.touch(&"b");
        buckets.touch(&"a");
        buckets.touch(&"c");

        // all at 2; "b" reached 2 first
        assert_eq!(buckets.peek_min(), Some(&"b"));
    }

    #[test]
    fn empty_buckets_are_dropped() {
        let mut buckets = FrequencyBuckets::new();
        buckets.insert("a");
        buckets.touch(&"a");

        assert_eq!(buckets.buckets.len(), 1);
        assert_eq!(buckets.min_frequency(), Some(2));

        assert_eq!(buckets.remove(&"a"), Some(2));
        assert!(buckets.is_empty());
        assert!(buckets.buckets.is_empty());
        assert_eq!(buckets.peek_min(), None);
    }

    #[test]
    fn pop_min_and_iter_follow_eviction_order() {
        let mut buckets = FrequencyBuckets::new();
        for k in ["a", "b", "c"] {
            buckets.insert(k);
        }
        buckets.touch(&"a");
        buckets.touch(&"a");
        buckets.touch(&"c");

        let order: Vec<_> = buckets.iter().map(|(k, f)| (*k, f)).collect();
        assert_eq!(order, vec![("b", 1), ("c", 2), ("a", 3)]);

        assert_eq!(buckets.pop_min(), Some(("b", 1)));
        assert_eq!(buckets.pop_min(), Some(("c", 2)));
        assert_eq!(buckets.pop_min(), Some(("a", 3)));
        assert_eq!(buckets.pop_min(), None);
    }

    #[test]
    fn clear_forgets_all_counts() {
        let mut buckets = FrequencyBuckets::new();
        buckets.insert(1);
        buckets.touch(&1);
        buckets.clear();

        assert!(buckets.is_empty());
        buckets.insert(1);
        assert_eq!(buckets.frequency(&1), Some(1));
        buckets.debug_validate_invariants();
    }
}
