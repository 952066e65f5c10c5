//! The cache facade.
//!
//! [`Cache`] owns a [`HashMapStore`] and an [`EvictionPolicy`] and keeps
//! them in lock-step. Every public mutation goes through `put`/`get`, so
//! after each call the store and the tracker hold the same keys and the
//! store holds at most `capacity` of them.
//!
//! ## Put Flow
//!
//! ```text
//!   put(key, value):
//!     key resident?
//!       yes → store.set, policy.on_put(key, false)            (never evicts)
//!       no  → store.set
//!             len > capacity?
//!               yes → victim = policy.select_victim()
//!                     policy.remove(victim), store.delete(victim)
//!                     listener.on_discard(victim, value)
//!             policy.on_put(key, true)
//! ```
//!
//! The victim is chosen before the policy learns about the incoming key, so
//! the entry being written is never the one discarded.
//!
//! ## Get Flow
//!
//! ```text
//!   get(key):
//!     resident → policy.on_get(key), return &value
//!     missing  → None, policy untouched
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use std::collections::HashSet;
//!
//! use evictkit::LruCache;
//!
//! let mut cache = LruCache::new().with_listener(Vec::new());
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.put("C", 3);
//! cache.put("D", 4);
//! cache.get(&"A");
//! cache.put("E", 5);
//!
//! assert_eq!(cache.listener(), &vec!["B"]);
//! assert_eq!(cache.keys(), HashSet::from(["A", "C", "D", "E"]));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::error::{ConfigError, InvariantError};
use crate::listener::{DiscardListener, Discarded};
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::policy::{FifoPolicy, LfuPolicy, LifoPolicy, LruPolicy, MruPolicy};
use crate::store::{HashMapStore, StoreCore, StoreMut};
use crate::traits::{CoreCache, EvictionPolicy};
use crate::MAX_ITEMS;

/// FIFO cache: evicts the oldest insert.
pub type FifoCache<K, V, L = ()> = Cache<K, V, FifoPolicy<K>, L>;
/// LIFO cache: evicts the newest resident write.
pub type LifoCache<K, V, L = ()> = Cache<K, V, LifoPolicy<K>, L>;
/// LRU cache: evicts the least recently used entry.
pub type LruCache<K, V, L = ()> = Cache<K, V, LruPolicy<K>, L>;
/// MRU cache: evicts the most recently used entry.
pub type MruCache<K, V, L = ()> = Cache<K, V, MruPolicy<K>, L>;
/// LFU cache: evicts the least frequently used entry.
pub type LfuCache<K, V, L = ()> = Cache<K, V, LfuPolicy<K>, L>;

/// Bounded key-value cache generic over its eviction policy.
///
/// # Type Parameters
///
/// - `K`: key, `Clone + Eq + Hash`
/// - `V`: value
/// - `P`: eviction policy
/// - `L`: discard listener, `()` to ignore evictions
pub struct Cache<K, V, P, L = ()>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    store: HashMapStore<K, V>,
    policy: P,
    listener: L,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V, P> Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    /// Creates a cache holding at most [`MAX_ITEMS`] entries.
    ///
    /// ```
    /// use evictkit::{FifoCache, MAX_ITEMS};
    ///
    /// let cache: FifoCache<u32, u32> = FifoCache::new();
    /// assert_eq!(cache.capacity(), MAX_ITEMS);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(MAX_ITEMS)
    }

    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A zero-capacity cache accepts calls but stores nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_policy(P::with_capacity(capacity), capacity)
    }

    /// Like [`with_capacity`](Self::with_capacity), rejecting zero.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        Ok(Self::with_capacity(capacity))
    }

    /// Wraps an existing, empty policy value.
    pub fn from_policy(policy: P, capacity: usize) -> Self {
        debug_assert!(policy.is_empty(), "policy must start empty");
        Self {
            store: HashMapStore::with_capacity(capacity),
            policy,
            listener: (),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        }
    }
}

impl<K, V, P> Default for Cache<K, V, P>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P, L> Cache<K, V, P, L>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    /// Replaces the discard listener, keeping contents and counters.
    pub fn with_listener<L2>(self, listener: L2) -> Cache<K, V, P, L2>
    where
        L2: DiscardListener<K, V>,
    {
        Cache {
            store: self.store,
            policy: self.policy,
            listener,
            capacity: self.capacity,
            #[cfg(feature = "metrics")]
            metrics: self.metrics,
        }
    }

    /// Inserts or updates an entry.
    ///
    /// Updating a resident key never evicts. Inserting a new key into a
    /// full cache evicts exactly one other entry and reports it to the
    /// listener.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_put_ignored();
            tracing::trace!(policy = self.policy.name(), "put ignored: zero capacity");
            return;
        }

        let is_new = !self.store.contains(&key);
        #[cfg(feature = "metrics")]
        self.metrics.record_put(is_new);

        if !is_new {
            self.policy.on_put(&key, false);
            self.store.set(key, value);
            return;
        }

        self.store.set(key.clone(), value);
        if self.store.len() > self.capacity {
            self.evict_one();
        }
        self.policy.on_put(&key, true);

        #[cfg(debug_assertions)]
        self.debug_validate();
    }

    /// [`put`](Self::put) that silently ignores a missing key or value.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        match (key, value) {
            (Some(key), Some(value)) => self.put(key, value),
            _ => {
                #[cfg(feature = "metrics")]
                self.metrics.record_put_ignored();
                tracing::trace!(policy = self.policy.name(), "put ignored: missing key or value");
            },
        }
    }

    /// Returns the value for `key`, recording the access with the policy.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let hit = self.store.contains(key);
        #[cfg(feature = "metrics")]
        self.metrics.record_get(hit);
        if !hit {
            return None;
        }
        self.policy.on_get(key);
        self.store.get(key)
    }

    /// [`get`](Self::get) for an optional key; `None` is simply absent.
    pub fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.get(key),
            None => None,
        }
    }

    /// Reads a value without counting as an access.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Checks for a key without counting as an access.
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the resident keys.
    pub fn keys(&self) -> HashSet<K> {
        self.store.keys().cloned().collect()
    }

    /// Iterates entries in no particular order without touching the policy.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.store.iter()
    }

    /// Resident keys ordered by eviction priority, next victim first.
    pub fn eviction_order(&self) -> Vec<&K> {
        self.policy.eviction_order()
    }

    /// Drops every entry without notifying the listener.
    pub fn clear(&mut self) {
        self.store.clear();
        self.policy.clear();
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the cache, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.store.len(), self.capacity)
    }

    /// Verifies that store and tracker agree and the bound holds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.store.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "store holds {} entries, capacity is {}",
                self.store.len(),
                self.capacity
            )));
        }
        if self.policy.len() != self.store.len() {
            return Err(InvariantError::new(format!(
                "{} tracker holds {} keys, store holds {}",
                self.policy.name(),
                self.policy.len(),
                self.store.len()
            )));
        }
        if self.store.keys().any(|key| !self.policy.contains(key)) {
            return Err(InvariantError::new(format!(
                "store key missing from {} tracker",
                self.policy.name()
            )));
        }
        let order = self.policy.eviction_order();
        if order.len() != self.store.len() || order.iter().any(|key| !self.store.contains(key)) {
            return Err(InvariantError::new(format!(
                "{} eviction order disagrees with store",
                self.policy.name()
            )));
        }
        Ok(())
    }

    fn evict_one(&mut self) {
        let victim = self.policy.select_victim().cloned();
        debug_assert!(victim.is_some(), "over capacity with an empty tracker");
        let Some(victim) = victim else {
            return;
        };

        let tracked = self.policy.remove(&victim);
        let value = self.store.delete(&victim);
        debug_assert!(tracked && value.is_some(), "victim not resident");
        let Some(value) = value else {
            return;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_eviction();
        let policy = self.policy.name();
        tracing::debug!(policy, len = self.store.len(), "evicted entry");
        self.listener.on_discard(Discarded {
            key: victim,
            value,
            policy,
        });
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        debug_assert!(self.store.len() <= self.capacity);
        debug_assert_eq!(self.policy.len(), self.store.len());
    }
}

impl<K, V, P, L> CoreCache<K, V> for Cache<K, V, P, L>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    fn put(&mut self, key: K, value: V) {
        Cache::put(self, key, value);
    }

    fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        Cache::put_opt(self, key, value);
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        Cache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    fn len(&self) -> usize {
        Cache::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn keys(&self) -> HashSet<K> {
        Cache::keys(self)
    }

    fn clear(&mut self) {
        Cache::clear(self);
    }
}

impl<K, V, P, L> fmt::Debug for Cache<K, V, P, L>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("policy", &self.policy.name())
            .field("capacity", &self.capacity)
            .field("len", &self.store.len())
            .finish_non_exhaustive()
    }
}

/// Renders `Current cache:` followed by one `key: value` line per entry,
/// sorted by key.
///
/// ```
/// use evictkit::FifoCache;
///
/// let mut cache = FifoCache::new();
/// cache.put("B", "World");
/// cache.put("A", "Hello");
/// assert_eq!(cache.to_string(), "Current cache:\nA: Hello\nB: World\n");
/// ```
impl<K, V, P, L> fmt::Display for Cache<K, V, P, L>
where
    K: Clone + Eq + Hash + Ord + fmt::Display,
    V: fmt::Display,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&K, &V)> = self.store.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        writeln!(f, "Current cache:")?;
        for (key, value) in entries {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
