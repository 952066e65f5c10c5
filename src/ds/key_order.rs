//! Ordered key sequence with O(1) move-to-tail.
//!
//! `KeyOrder` is the recency/insertion tracker shared by the FIFO, LIFO, LRU
//! and MRU policies, and by each frequency bucket of the LFU tracker. Nodes
//! live in a slot vector and are linked by index; a key→slot index makes
//! lookup, unlink and re-append constant time.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>        slots: Vec<Option<Node<K>>>
//!   ┌──────┬────────┐                  ┌──────┬─────────────────────────────┐
//!   │ "a"  │ slot 0 │ ───────────────► │ 0    │ { key: a, prev: -, next: 2 }│
//!   │ "b"  │ slot 1 │ ───────────────► │ 1    │ { key: b, prev: 2, next: - }│
//!   │ "c"  │ slot 2 │ ───────────────► │ 2    │ { key: c, prev: 0, next: 1 }│
//!   └──────┴────────┘                  └──────┴─────────────────────────────┘
//!
//!   head ─► [a] ◄──► [c] ◄──► [b] ◄── tail
//!          oldest            newest
//! ```
//!
//! Freed slots go on a free list and are reused by the next `push_back`.
//!
//! ## Operations
//!
//! | Operation      | Time | Notes                                  |
//! |----------------|------|----------------------------------------|
//! | `push_back`    | O(1) | Rejects keys already present           |
//! | `move_to_back` | O(1) | No-op when the key is already the tail |
//! | `remove`       | O(1) | Unlinks and frees the slot             |
//! | `front`/`back` | O(1) |                                        |
//! | `pop_front`    | O(1) |                                        |
//! | `position`     | O(n) | Walks from the head                    |
//!
//! ## Example
//!
//! ```
//! use evictkit::ds::KeyOrder;
//!
//! let mut order = KeyOrder::new();
//! order.push_back("a");
//! order.push_back("b");
//! order.push_back("c");
//!
//! order.move_to_back(&"a");
//! assert_eq!(order.iter().copied().collect::<Vec<_>>(), vec!["b", "c", "a"]);
//! assert_eq!(order.front(), Some(&"b"));
//! assert_eq!(order.back(), Some(&"a"));
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SlotId(usize);

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked key sequence indexed by key.
pub struct KeyOrder<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<usize>,
    index: FxHashMap<K, SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<K> KeyOrder<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the head (oldest) key.
    pub fn front(&self) -> Option<&K> {
        self.head.and_then(|id| self.node(id)).map(|node| &node.key)
    }

    /// Returns the tail (newest) key.
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|id| self.node(id)).map(|node| &node.key)
    }

    /// Appends `key` at the tail. Returns `false` if it was already tracked.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let node = Node {
            key: key.clone(),
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                SlotId(idx)
            },
            None => {
                self.slots.push(Some(node));
                SlotId(self.slots.len() - 1)
            },
        };
        self.attach_back(id);
        self.index.insert(key, id);
        true
    }

    /// Moves `key` to the tail. Returns `false` if it is not tracked.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        let Some(&id) = self.index.get(key) else {
            return false;
        };
        if self.tail != Some(id) {
            self.detach(id);
            self.attach_back(id);
        }
        true
    }

    /// Unlinks `key`. Returns `false` if it is not tracked.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(id) = self.index.remove(key) else {
            return false;
        };
        self.detach(id);
        self.slots[id.0] = None;
        self.free.push(id.0);
        true
    }

    /// Removes and returns the head key.
    pub fn pop_front(&mut self) -> Option<K> {
        let key = self.front()?.clone();
        self.remove(&key);
        Some(key)
    }

    /// Zero-based distance of `key` from the head.
    pub fn position(&self, key: &K) -> Option<usize> {
        if !self.contains(key) {
            return None;
        }
        self.iter().position(|k| k == key)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates keys from head to tail.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            order: self,
            current: self.head,
        }
    }

    fn node(&self, id: SlotId) -> Option<&Node<K>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<K>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn detach(&mut self, id: SlotId) {
        let Some((prev, next)) = self.node(id).map(|node| (node.prev, node.next)) else {
            return;
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.node_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.node_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_back(&mut self, id: SlotId) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail_id) => {
                if let Some(tail_node) = self.node_mut(tail_id) {
                    tail_node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Walks the links and checks them against the index.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none() && self.tail.is_none());
            assert!(self.index.is_empty());
            return;
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node(id).expect("linked slot is vacant");
            assert_eq!(node.prev, prev, "broken back link");
            assert_eq!(self.index.get(&node.key), Some(&id), "index out of sync");
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.index.len(), "cycle in key order");
        }
        assert_eq!(self.tail, prev);
        assert_eq!(count, self.index.len());
        assert_eq!(self.slots.len() - self.free.len(), count);
    }
}

impl<K> Default for KeyOrder<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for KeyOrder<K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over keys from head to tail.
pub struct Iter<'a, K> {
    order: &'a KeyOrder<K>,
    current: Option<SlotId>,
}

impl<'a, K> Iterator for Iter<'a, K>
where
    K: Clone + Eq + Hash,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.order.node(id)?;
        self.current = node.next;
        Some(&node.key)
    }
}
