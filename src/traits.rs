//! # Cache Trait Hierarchy
//!
//! Shared interface for the structures in this crate. Both the ordered
//! eviction list ([`LruCore`](crate::policy::lru::LruCore)) and the adaptive
//! controller ([`ARCCore`](crate::policy::arc::ARCCore)) implement the full
//! hierarchy, so code that only needs "a bounded cache" can be written once.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │          ReadOnlyCache<K, V>            │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   └──────────────────┬──────────────────────┘
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │  remove(&mut, &K) → Option<V>           │
//!   │  remove_batch(&mut, &[K])               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! None of the implementations synchronize internally. Wrap a cache in a
//! mutex (one critical section per call) to share it across threads.
//!
//! ## Example Usage
//!
//! ```
//! use arckit::policy::arc::ARCCore;
//! use arckit::traits::{CoreCache, MutableCache, ReadOnlyCache};
//!
//! fn warm<C: CoreCache<String, Vec<u8>>>(cache: &mut C, rows: &[(&str, &[u8])]) {
//!     for (key, value) in rows {
//!         cache.insert(key.to_string(), value.to_vec());
//!     }
//! }
//!
//! fn invalidate<C: MutableCache<String, Vec<u8>>>(cache: &mut C, keys: &[String]) {
//!     for key in keys {
//!         cache.remove(key);
//!     }
//! }
//!
//! let mut cache = ARCCore::new(8);
//! warm(&mut cache, &[("a", b"1"), ("b", b"2")]);
//! invalidate(&mut cache, &["a".to_string()]);
//! assert_eq!(cache.len(), 1);
//! ```

/// Side-effect free queries every cache supports.
pub trait ReadOnlyCache<K, V> {
    /// Returns `true` if `key` is resident.
    ///
    /// Never changes recency order or hit/miss counters.
    fn contains(&self, key: &K) -> bool;

    /// Number of resident entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident entries.
    fn capacity(&self) -> usize;
}

/// Insertion and lookup.
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts or updates `key`, returning the previous value if it was
    /// resident. May evict another entry to make room; never fails.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up `key`, updating the policy's recency/frequency state and
    /// hit/miss counters.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Drops every resident entry.
    fn clear(&mut self);
}

/// Arbitrary removal by key.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key` and returns its value if it was resident.
    ///
    /// Removal is not an eviction: no eviction history is recorded.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in order, returning one result per key.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}
