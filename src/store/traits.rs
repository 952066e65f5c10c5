//! Store operations shared by storage backends.
//!
//! Policies only ever see keys; values stay behind these traits so the
//! facade can swap how entries are held without touching eviction logic.

/// Read-side store operations.
pub trait StoreCore<K, V> {
    /// Fetch a value by key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Check if a key exists.
    fn contains(&self, key: &K) -> bool;

    /// Current number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored keys, in no particular order.
    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_>;
}

/// Write-side store operations for single-owner backends.
pub trait StoreMut<K, V>: StoreCore<K, V> {
    /// Insert or overwrite a value. Returns the previous value if present.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Remove a value by key.
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Remove all entries.
    fn clear(&mut self);
}
