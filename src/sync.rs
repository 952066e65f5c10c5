//! Serialized shared access (feature `concurrency`).
//!
//! Caches are single-owner. [`SharedCache`] is the one-lock wrapper for
//! owners that need to share one across threads: every call takes the same
//! `parking_lot::Mutex`, so operations from all threads form one sequence.
//! A `Mutex` rather than an `RwLock` because `get` updates policy state.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use evictkit::sync::SharedCache;
//! use evictkit::LruCache;
//!
//! let shared = Arc::new(SharedCache::new(LruCache::with_capacity(64)));
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || {
//!             for i in 0..16 {
//!                 shared.put(t * 16 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(shared.len(), 64);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::cache::Cache;
use crate::listener::DiscardListener;
use crate::traits::EvictionPolicy;

pub struct SharedCache<K, V, P, L = ()>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    inner: Mutex<Cache<K, V, P, L>>,
}

impl<K, V, P, L> SharedCache<K, V, P, L>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    pub fn new(cache: Cache<K, V, P, L>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    pub fn put_opt(&self, key: Option<K>, value: Option<V>) {
        self.inner.lock().put_opt(key, value);
    }

    /// Returns a clone of the value, recording the access.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn keys(&self) -> HashSet<K> {
        self.inner.lock().keys()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs `f` with exclusive access, for multi-step operations that must
    /// not interleave with other callers.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut Cache<K, V, P, L>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn into_inner(self) -> Cache<K, V, P, L> {
        self.inner.into_inner()
    }
}

impl<K, V, P, L> fmt::Debug for SharedCache<K, V, P, L>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy<K>,
    L: DiscardListener<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f.debug_tuple("SharedCache").field(&*cache).finish(),
            None => f.write_str("SharedCache(<locked>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{FifoCache, LfuCache};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_puts_respect_capacity() {
        let shared = Arc::new(SharedCache::new(FifoCache::with_capacity(8)));
        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..100 {
                        shared.put(t * 1000 + i, i);
                        assert!(shared.len() <= 8);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 8);
        shared.with_lock(|cache| assert!(cache.check_invariants().is_ok()));
    }

    #[test]
    fn evictions_reach_listener_through_lock() {
        let shared = SharedCache::new(LfuCache::with_capacity(2).with_listener(Vec::new()));
        shared.put("a", 1);
        shared.put("b", 2);
        assert_eq!(shared.get(&"a"), Some(1));
        shared.put("c", 3);

        let cache = shared.into_inner();
        assert_eq!(cache.listener(), &vec!["b"]);
    }

    #[test]
    fn optional_put_and_keys() {
        let shared = SharedCache::new(FifoCache::new());
        shared.put_opt(None, Some(1));
        shared.put_opt(Some(1u8), Some(1));
        assert!(shared.contains(&1));
        assert_eq!(shared.keys(), HashSet::from([1]));
        shared.clear();
        assert!(shared.is_empty());
        assert!(format!("{shared:?}").contains("fifo"));
    }
}
