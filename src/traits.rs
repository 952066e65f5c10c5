//! # Cache Trait Hierarchy
//!
//! Two seams hold the crate together:
//!
//! ```text
//!   ┌─────────────────────────────────────┐      ┌───────────────────────────────────┐
//!   │          CoreCache<K, V>            │      │        EvictionPolicy<K>          │
//!   │  (what callers see)                 │      │  (what a policy decides)          │
//!   │                                     │      │                                   │
//!   │  put(&mut, K, V)                    │      │  on_put(&mut, &K, is_new)         │
//!   │  put_opt(&mut, Option<K>, Option<V>)│      │  on_get(&mut, &K)                 │
//!   │  get(&mut, &K) → Option<&V>         │      │  select_victim(&) → Option<&K>    │
//!   │  get_opt(&mut, Option<&K>)          │      │  remove(&mut, &K) → bool          │
//!   │  contains / len / capacity / keys   │      │  contains / len / clear           │
//!   │  clear(&mut)                        │      │  eviction_order(&) → Vec<&K>      │
//!   └──────────────────┬──────────────────┘      └─────────────────┬─────────────────┘
//!                      │                                           │
//!                      ▼                                           ▼
//!        Cache<K, V, P, L>, DynCache<K, V>         FifoPolicy, LifoPolicy, LruPolicy,
//!                                                  MruPolicy, LfuPolicy
//! ```
//!
//! [`Cache`](crate::cache::Cache) is generic over the policy, so each policy
//! is an ordinary value that can be tested on its own, and the facade owns
//! the store/tracker lock-step.
//!
//! ## Policy Comparison
//!
//! | Policy | Tracker               | `on_get` reorders | Victim                         |
//! |--------|-----------------------|-------------------|--------------------------------|
//! | FIFO   | insertion order       | no                | oldest insert                  |
//! | LIFO   | insertion/update order| no                | newest insert before incoming  |
//! | LRU    | access order          | yes               | least recently used            |
//! | MRU    | access order          | yes               | most recently used             |
//! | LFU    | frequency + recency   | yes (count + 1)   | lowest count, then oldest touch|
//!
//! ## Thread Safety
//!
//! Nothing here is synchronized. Callers that share a cache across threads
//! serialize access themselves, e.g. with `SharedCache` (feature
//! `concurrency`).

use std::collections::HashSet;

/// Caller-facing cache operations, identical for every policy.
///
/// # Example
///
/// ```
/// use evictkit::traits::CoreCache;
/// use evictkit::{FifoCache, LruCache};
///
/// fn warm<C: CoreCache<u32, &'static str>>(cache: &mut C) {
///     for (k, v) in [(1, "one"), (2, "two"), (3, "three")] {
///         cache.put(k, v);
///     }
/// }
///
/// let mut fifo = FifoCache::new();
/// let mut lru = LruCache::new();
/// warm(&mut fifo);
/// warm(&mut lru);
/// assert_eq!(fifo.len(), 3);
/// assert_eq!(lru.get(&2), Some(&"two"));
/// ```
pub trait CoreCache<K, V> {
    /// Inserts or updates an entry, evicting at most one other entry.
    fn put(&mut self, key: K, value: V);

    /// Like [`put`](Self::put), but a missing key or value is a silent no-op.
    ///
    /// ```
    /// use evictkit::traits::CoreCache;
    /// use evictkit::MruCache;
    ///
    /// let mut cache: MruCache<&str, i32> = MruCache::new();
    /// cache.put_opt(None, Some(1));
    /// cache.put_opt(Some("a"), None);
    /// assert!(cache.is_empty());
    ///
    /// cache.put_opt(Some("a"), Some(1));
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => tracing::trace!("put ignored: missing key or value"),
        }
    }

    /// Looks up a value, recording the access with the policy on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Like [`get`](Self::get), but a missing key is simply absent.
    fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.get(key),
            None => None,
        }
    }

    /// Checks for a key without touching eviction metadata.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries held after any `put` completes.
    fn capacity(&self) -> usize;

    /// Snapshot of the resident keys.
    fn keys(&self) -> HashSet<K>;

    fn clear(&mut self);
}

/// Eviction capability plugged into [`Cache`](crate::cache::Cache).
///
/// A policy tracks keys only. The facade calls it after every store
/// mutation and keeps both sides in lock-step:
///
/// - `on_put(key, true)` after a new key was stored,
/// - `on_put(key, false)` after an existing key's value was replaced,
/// - `on_get(key)` after a successful lookup,
/// - `select_victim()` then `remove(victim)` when a new key pushed the
///   store past capacity. The facade asks for the victim *before* it
///   reports the incoming key, so the incoming key is never its own victim.
///
/// # Example
///
/// ```
/// use evictkit::traits::EvictionPolicy;
/// use evictkit::policy::lru::LruPolicy;
///
/// let mut policy = LruPolicy::with_capacity(4);
/// policy.on_put(&"a", true);
/// policy.on_put(&"b", true);
/// policy.on_get(&"a");
///
/// assert_eq!(policy.select_victim(), Some(&"b"));
/// ```
pub trait EvictionPolicy<K> {
    /// Creates an empty tracker sized for `capacity` keys.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Short lowercase policy name, e.g. `"lru"`.
    fn name(&self) -> &'static str;

    /// Records that `key` was stored; `is_new` is `false` for updates.
    fn on_put(&mut self, key: &K, is_new: bool);

    /// Records a successful lookup of `key`.
    fn on_get(&mut self, key: &K);

    /// The key this policy would evict now, if any.
    fn select_victim(&self) -> Option<&K>;

    /// Forgets `key`. Returns `false` if it was not tracked.
    fn remove(&mut self, key: &K) -> bool;

    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Tracked keys ordered by eviction priority, next victim first.
    fn eviction_order(&self) -> Vec<&K>;
}
