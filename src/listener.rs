//! Discard notifications.
//!
//! Every eviction hands the evicted entry to the cache's
//! [`DiscardListener`] exactly once, after the entry has left both the store
//! and the policy tracker. The cache core never prints; what happens to the
//! event is up to the owner:
//!
//! | Listener            | Effect                                              |
//! |---------------------|-----------------------------------------------------|
//! | `()`                | Ignore the event (the default)                      |
//! | `Vec<K>`            | Record evicted keys in eviction order               |
//! | [`TracingListener`] | `tracing::info!` with the key as a structured field |
//! | [`FnListener`]      | Call a closure                                      |
//!
//! ## Example
//!
//! ```
//! use evictkit::listener::{from_fn, Discarded};
//! use evictkit::FifoCache;
//!
//! let mut log = Vec::new();
//! {
//!     let mut cache = FifoCache::with_capacity(2)
//!         .with_listener(from_fn(|d: Discarded<&'static str, i32>| log.push(d.key)));
//!     cache.put("a", 1);
//!     cache.put("b", 2);
//!     cache.put("c", 3);
//! }
//! assert_eq!(log, vec!["a"]);
//! ```

use std::fmt;

/// An entry removed by the eviction policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded<K, V> {
    pub key: K,
    pub value: V,
    /// Name of the policy that chose the victim, e.g. `"lru"`.
    pub policy: &'static str,
}

/// Receives one event per eviction.
pub trait DiscardListener<K, V> {
    fn on_discard(&mut self, discarded: Discarded<K, V>);
}

impl<K, V> DiscardListener<K, V> for () {
    #[inline]
    fn on_discard(&mut self, _discarded: Discarded<K, V>) {}
}

/// Collects evicted keys, oldest eviction first.
impl<K, V> DiscardListener<K, V> for Vec<K> {
    fn on_discard(&mut self, discarded: Discarded<K, V>) {
        self.push(discarded.key);
    }
}

impl<K, V> DiscardListener<K, V> for Box<dyn DiscardListener<K, V>> {
    fn on_discard(&mut self, discarded: Discarded<K, V>) {
        (**self).on_discard(discarded);
    }
}

impl<K, V> DiscardListener<K, V> for Box<dyn DiscardListener<K, V> + Send> {
    fn on_discard(&mut self, discarded: Discarded<K, V>) {
        (**self).on_discard(discarded);
    }
}

/// Logs `DISCARD` at `info` level with the evicted key and policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl<K, V> DiscardListener<K, V> for TracingListener
where
    K: fmt::Debug,
{
    fn on_discard(&mut self, discarded: Discarded<K, V>) {
        tracing::info!(key = ?discarded.key, policy = discarded.policy, "DISCARD");
    }
}

/// Adapter that turns a closure into a listener. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnListener<F>(pub F);

impl<F> fmt::Debug for FnListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

impl<K, V, F> DiscardListener<K, V> for FnListener<F>
where
    F: FnMut(Discarded<K, V>),
{
    fn on_discard(&mut self, discarded: Discarded<K, V>) {
        (self.0)(discarded);
    }
}

/// Wraps `f` so it is called with every discarded entry.
pub fn from_fn<K, V, F>(f: F) -> FnListener<F>
where
    F: FnMut(Discarded<K, V>),
{
    FnListener(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn discarded(key: &'static str) -> Discarded<&'static str, u8> {
        Discarded {
            key,
            value: 0,
            policy: "fifo",
        }
    }

    #[test]
    fn vec_records_keys_in_order() {
        let mut keys: Vec<&str> = Vec::new();
        keys.on_discard(discarded("a"));
        keys.on_discard(discarded("b"));
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn closure_sees_full_entry() {
        let mut seen = Vec::new();
        let mut listener =
            from_fn(|d: Discarded<&'static str, u8>| seen.push((d.key, d.policy)));
        listener.on_discard(discarded("x"));
        drop(listener);
        assert_eq!(seen, vec![("x", "fifo")]);
    }

    #[test]
    fn boxed_listener_forwards() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut boxed: Box<dyn DiscardListener<&'static str, u8>> =
            Box::new(from_fn(move |_d: Discarded<&'static str, u8>| seen.set(seen.get() + 1)));
        boxed.on_discard(discarded("a"));
        boxed.on_discard(discarded("b"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn unit_and_tracing_listeners_accept_events() {
        let mut unit = ();
        DiscardListener::<&str, u8>::on_discard(&mut unit, discarded("a"));
        TracingListener.on_discard(discarded("b"));
    }
}
