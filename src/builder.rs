//! Runtime policy selection.
//!
//! [`Cache`] fixes its policy in the type. When the policy comes from
//! configuration instead, [`CacheBuilder`] produces a [`DynCache`] that
//! wraps whichever concrete cache was requested behind one API.
//!
//! ## Example
//!
//! ```rust
//! use evictkit::builder::{CacheBuilder, CachePolicy};
//!
//! let policy: CachePolicy = "mru".parse().unwrap();
//! let mut cache = CacheBuilder::new(2).build::<u64, String>(policy);
//!
//! cache.put(1, "one".to_string());
//! cache.put(2, "two".to_string());
//! cache.get(&1);
//! cache.put(3, "three".to_string());
//!
//! assert!(!cache.contains(&1));
//! assert_eq!(cache.policy(), CachePolicy::Mru);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::cache::{Cache, FifoCache, LfuCache, LifoCache, LruCache, MruCache};
use crate::error::{ConfigError, InvariantError};
use crate::listener::DiscardListener;
#[cfg(feature = "metrics")]
use crate::metrics::CacheMetricsSnapshot;
use crate::traits::CoreCache;
use crate::MAX_ITEMS;

/// Available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// First In, First Out.
    Fifo,
    /// Last In, First Out.
    Lifo,
    /// Least Recently Used.
    Lru,
    /// Most Recently Used.
    Mru,
    /// Least Frequently Used, recency breaks ties.
    Lfu,
}

impl CachePolicy {
    pub const ALL: [CachePolicy; 5] = [
        CachePolicy::Fifo,
        CachePolicy::Lifo,
        CachePolicy::Lru,
        CachePolicy::Mru,
        CachePolicy::Lfu,
    ];

    /// Lowercase name, matching `EvictionPolicy::name`.
    pub fn name(self) -> &'static str {
        match self {
            CachePolicy::Fifo => "fifo",
            CachePolicy::Lifo => "lifo",
            CachePolicy::Lru => "lru",
            CachePolicy::Mru => "mru",
            CachePolicy::Lfu => "lfu",
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CachePolicy {
    type Err = ConfigError;

    /// Parses a policy name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CachePolicy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "unknown cache policy `{wanted}` (expected one of fifo, lifo, lru, mru, lfu)"
                ))
            })
    }
}

/// Cache whose policy was chosen at runtime.
pub struct DynCache<K, V, L = ()>
where
    K: Clone + Eq + Hash,
    L: DiscardListener<K, V>,
{
    inner: CacheInner<K, V, L>,
}

enum CacheInner<K, V, L>
where
    K: Clone + Eq + Hash,
    L: DiscardListener<K, V>,
{
    Fifo(FifoCache<K, V, L>),
    Lifo(LifoCache<K, V, L>),
    Lru(LruCache<K, V, L>),
    Mru(MruCache<K, V, L>),
    Lfu(LfuCache<K, V, L>),
}

macro_rules! dispatch {
    ($inner:expr, $cache:ident => $body:expr) => {
        match $inner {
            CacheInner::Fifo($cache) => $body,
            CacheInner::Lifo($cache) => $body,
            CacheInner::Lru($cache) => $body,
            CacheInner::Mru($cache) => $body,
            CacheInner::Lfu($cache) => $body,
        }
    };
}

impl<K, V, L> DynCache<K, V, L>
where
    K: Clone + Eq + Hash,
    L: DiscardListener<K, V>,
{
    pub fn policy(&self) -> CachePolicy {
        match &self.inner {
            CacheInner::Fifo(_) => CachePolicy::Fifo,
            CacheInner::Lifo(_) => CachePolicy::Lifo,
            CacheInner::Lru(_) => CachePolicy::Lru,
            CacheInner::Mru(_) => CachePolicy::Mru,
            CacheInner::Lfu(_) => CachePolicy::Lfu,
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        dispatch!(&mut self.inner, cache => cache.put(key, value))
    }

    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        dispatch!(&mut self.inner, cache => cache.put_opt(key, value))
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        dispatch!(&mut self.inner, cache => cache.get(key))
    }

    pub fn get_opt(&mut self, key: Option<&K>) -> Option<&V> {
        dispatch!(&mut self.inner, cache => cache.get_opt(key))
    }

    pub fn peek(&self, key: &K) -> Option<&V> {
        dispatch!(&self.inner, cache => cache.peek(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        dispatch!(&self.inner, cache => cache.contains(key))
    }

    pub fn len(&self) -> usize {
        dispatch!(&self.inner, cache => cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        dispatch!(&self.inner, cache => cache.capacity())
    }

    pub fn keys(&self) -> HashSet<K> {
        dispatch!(&self.inner, cache => cache.keys())
    }

    pub fn eviction_order(&self) -> Vec<&K> {
        dispatch!(&self.inner, cache => cache.eviction_order())
    }

    pub fn clear(&mut self) {
        dispatch!(&mut self.inner, cache => cache.clear())
    }

    pub fn listener(&self) -> &L {
        dispatch!(&self.inner, cache => cache.listener())
    }

    pub fn listener_mut(&mut self) -> &mut L {
        dispatch!(&mut self.inner, cache => cache.listener_mut())
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        dispatch!(&self.inner, cache => cache.check_invariants())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        dispatch!(&self.inner, cache => cache.metrics_snapshot())
    }
}

impl<K, V, L> CoreCache<K, V> for DynCache<K, V, L>
where
    K: Clone + Eq + Hash,
    L: DiscardListener<K, V>,
{
    fn put(&mut self, key: K, value: V) {
        DynCache::put(self, key, value);
    }

    fn put_opt(&mut self, key: Option<K>, value: Option<V>) {
        DynCache::put_opt(self, key, value);
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        DynCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        DynCache::contains(self, key)
    }

    fn len(&self) -> usize {
        DynCache::len(self)
    }

    fn capacity(&self) -> usize {
        DynCache::capacity(self)
    }

    fn keys(&self) -> HashSet<K> {
        DynCache::keys(self)
    }

    fn clear(&mut self) {
        DynCache::clear(self);
    }
}

impl<K, V, L> fmt::Debug for DynCache<K, V, L>
where
    K: Clone + Eq + Hash,
    L: DiscardListener<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(&self.inner, cache => fmt::Debug::fmt(cache, f))
    }
}

/// Builder for [`DynCache`] instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder<L = ()> {
    capacity: usize,
    listener: L,
}

impl CacheBuilder {
    /// Builder for caches holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            listener: (),
        }
    }
}

impl Default for CacheBuilder {
    fn default() -> Self {
        Self::new(MAX_ITEMS)
    }
}

impl<L> CacheBuilder<L> {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Routes discard events of the built cache to `listener`.
    pub fn listener<L2>(self, listener: L2) -> CacheBuilder<L2> {
        CacheBuilder {
            capacity: self.capacity,
            listener,
        }
    }

    /// Builds a cache with `policy`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evictkit::builder::{CacheBuilder, CachePolicy};
    ///
    /// let cache = CacheBuilder::default()
    ///     .listener(Vec::<u64>::new())
    ///     .build::<u64, String>(CachePolicy::Lfu);
    /// assert_eq!(cache.capacity(), 4);
    /// ```
    pub fn build<K, V>(self, policy: CachePolicy) -> DynCache<K, V, L>
    where
        K: Clone + Eq + Hash,
        L: DiscardListener<K, V>,
    {
        let capacity = self.capacity;
        let listener = self.listener;
        let inner = match policy {
            CachePolicy::Fifo => {
                CacheInner::Fifo(Cache::with_capacity(capacity).with_listener(listener))
            },
            CachePolicy::Lifo => {
                CacheInner::Lifo(Cache::with_capacity(capacity).with_listener(listener))
            },
            CachePolicy::Lru => {
                CacheInner::Lru(Cache::with_capacity(capacity).with_listener(listener))
            },
            CachePolicy::Mru => {
                CacheInner::Mru(Cache::with_capacity(capacity).with_listener(listener))
            },
            CachePolicy::Lfu => {
                CacheInner::Lfu(Cache::with_capacity(capacity).with_listener(listener))
            },
        };
        DynCache { inner }
    }

    /// Like [`build`](Self::build), rejecting a zero capacity.
    pub fn try_build<K, V>(self, policy: CachePolicy) -> Result<DynCache<K, V, L>, ConfigError>
    where
        K: Clone + Eq + Hash,
        L: DiscardListener<K, V>,
    {
        if self.capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        Ok(self.build(policy))
    }
}
