//! Ordered eviction list: a bounded, key-indexed LRU.
//!
//! `LruCore` is the building block ARC uses for its T1 and T2 segments, and it
//! is a usable LRU cache on its own. Entries live in an arena-backed
//! [`IntrusiveList`] and the key index maps straight to the entry's
//! [`SlotId`], so every operation is a hash lookup plus a few index writes.
//!
//! ## Architecture
//!
//! ```text
//!   map: FxHashMap<K, SlotId>          list: IntrusiveList<Entry<K, V>>
//!   ┌─────────┬─────────┐              head ─► [c:3] ◄──► [b:2] ◄──► [a:1] ◄── tail
//!   │  "a"    │  id_0   │                MRU                           LRU
//!   │  "b"    │  id_1   │                                          (evicted next)
//!   │  "c"    │  id_2   │
//!   └─────────┴─────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time | Notes                                         |
//! |-------------|------|-----------------------------------------------|
//! | `get`       | O(1) | Moves the entry to MRU, counts a hit or miss  |
//! | `peek`      | O(1) | No recency or counter side effects            |
//! | `insert`    | O(1) | Updates in place or evicts LRU when full      |
//! | `remove`    | O(1) | Detaches by key                               |
//! | `pop_lru`   | O(1) | Explicit eviction, independent of capacity    |
//! | `contains`  | O(1) | No side effects                               |
//!
//! ## Example Usage
//!
//! ```
//! use arckit::policy::lru::LruCore;
//! use arckit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut lru = LruCore::new(2);
//! lru.insert("a", 1);
//! lru.insert("b", 2);
//!
//! // Touching "a" makes "b" the eviction candidate.
//! assert_eq!(lru.get(&"a"), Some(&1));
//! lru.insert("c", 3);
//!
//! assert!(!lru.contains(&"b"));
//! assert_eq!(lru.pop_lru(), Some(("a", 1)));
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe; callers serialize access externally.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{IntrusiveList, SlotId};
use crate::stats::CacheStats;
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Bounded LRU list with O(1) promotion and tail eviction.
///
/// Evicted entries are dropped; a caller that needs to know what left the
/// list should call [`pop_lru`](Self::pop_lru) itself before inserting.
pub struct LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    map: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a list holding at most `capacity` entries.
    ///
    /// A capacity of 0 yields a list that accepts nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: IntrusiveList::with_capacity(capacity),
            capacity,
            stats: CacheStats::new(),
        }
    }

    /// Returns the value for `key` without touching recency or counters.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let &id = self.map.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Removes and returns the least recently used entry.
    ///
    /// Works regardless of how full the list is; `None` when empty.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.map.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Iterates resident keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|entry| &entry.key)
    }

    /// Hit/miss counters for [`get`](CoreCache::get) on this list.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert_eq!(self.map.len(), self.list.len());
        assert!(self.list.len() <= self.capacity);
        for (key, &id) in &self.map {
            let entry = self.list.get(id).expect("indexed slot is empty");
            assert!(entry.key == *key, "index points at another key");
        }
    }
}

impl<K, V> ReadOnlyCache<K, V> for LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.map.get(&key) {
            let previous = self
                .list
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            self.list.move_to_front(id);
            return previous;
        }

        if self.capacity == 0 {
            return None;
        }

        if self.map.len() >= self.capacity {
            self.pop_lru();
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.map.insert(key, id);
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.map.get(key) {
            Some(&id) => id,
            None => {
                self.stats.record_miss();
                return None;
            },
        };

        self.stats.record_hit();
        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

impl<K, V> MutableCache<K, V> for LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.map.remove(key)?;
        self.list.remove(id).map(|entry| entry.value)
    }
}

impl<K, V> Extend<(K, V)> for LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> fmt::Debug for LruCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCore")
            .field("len", &self.map.len())
            .field("capacity", &self.capacity)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
