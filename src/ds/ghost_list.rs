//! Bounded, insertion-ordered set of evicted key identities.
//!
//! ARC keeps one of these per real list (B1 for T1, B2 for T2). A ghost holds
//! only the key; its value is gone. When the set is full the oldest-recorded
//! identity is pruned, which keeps ghost contents reproducible across runs.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>        list: IntrusiveList<K>
//!   ┌─────────┬─────────┐              head ─► [C] ◄──► [B] ◄──► [A] ◄── tail
//!   │  key A  │  id_0   │                    newest             oldest
//!   │  key B  │  id_1   │                                    (pruned first)
//!   │  key C  │  id_2   │
//!   └─────────┴─────────┘
//! ```
//!
//! ## Behavior
//! - `record(k)`: k becomes newest; prunes and returns the oldest key if full
//! - `remove(k)`: forgets k (ghost re-admission)
//! - `contains(k)`: O(1) membership
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;

/// Bounded FIFO set of keys with no values, used as ARC eviction history.
#[derive(Debug)]
pub struct GhostList<K> {
    list: IntrusiveList<K>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
}

impl<K> GhostList<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a ghost list that remembers at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            list: IntrusiveList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Records `key` as the newest ghost.
    ///
    /// If the list is full, the oldest ghost is pruned first and returned.
    /// Re-recording a key that is already present only refreshes its
    /// position. With capacity 0 nothing is remembered.
    pub fn record(&mut self, key: K) -> Option<K> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(&id) = self.index.get(&key) {
            self.list.move_to_front(id);
            return None;
        }

        let pruned = if self.list.len() >= self.capacity {
            self.list.pop_back().inspect(|old| {
                self.index.remove(old);
            })
        } else {
            None
        };

        let id = self.list.push_front(key.clone());
        self.index.insert(key, id);
        pruned
    }

    /// Forgets `key`; returns `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => {
                self.list.remove(id);
                true
            },
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    /// Iterates ghosts from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.list.iter()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.list.len(), self.index.len());
        assert!(self.list.len() <= self.capacity);
        for (key, &id) in &self.index {
            assert!(self.list.get(id) == Some(key), "index points at wrong slot");
        }
    }
}
