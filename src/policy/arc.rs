//! Adaptive Replacement Cache (ARC) replacement policy.
//!
//! ARC balances recency against frequency with four lists and an adaptive
//! target `p`. Two lists hold values; two "ghost" lists remember only the keys
//! recently evicted from them, so the cache can tell when it evicted something
//! too early and shift its balance.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ARCCore<K, V> Layout                           │
//! │                                                                         │
//! │   T1: LruCore<K, V>  (seen once)        T2: LruCore<K, V>  (seen again) │
//! │   ┌─────────────────────────┐           ┌─────────────────────────┐     │
//! │   │ MRU               LRU   │  promote  │ MRU               LRU   │     │
//! │   │ [c] ◄──► [b] ◄──► [a] ──┼──────────►│ [x] ◄──► [y] ◄──► [z]   │     │
//! │   └───────────────────┬─────┘           └───────────────────┬─────┘     │
//! │                 evict │                               evict │           │
//! │                       ▼                                     ▼           │
//! │   B1: GhostList<K>  (keys only)         B2: GhostList<K>  (keys only)   │
//! │   ┌─────────────────────────┐           ┌─────────────────────────┐     │
//! │   │ newest ... oldest ──► ∅ │           │ newest ... oldest ──► ∅ │     │
//! │   └─────────────────────────┘           └─────────────────────────┘     │
//! │                                                                         │
//! │   p: target size for T1, in [0, capacity]                               │
//! │   • insert of a key found in B1 → p grows (favor recency)               │
//! │   • insert of a key found in B2 → p shrinks (favor frequency)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each ghost list holds at most `capacity` keys and drops its oldest key
//! when a new one is recorded past that bound.
//!
//! ## Admission
//!
//! ```text
//!   insert(key, value):
//!     key in T1  → move to T2 with the new value
//!     key in T2  → overwrite, refresh to MRU
//!     key in B1  → p += max(1, |B2| / |B1|), make room, insert into T2
//!     key in B2  → p -= max(1, |B1| / |B2|), make room, insert into T2
//!     otherwise  → make room, insert into T1
//! ```
//!
//! "Make room" only runs when `|T1| + |T2| == capacity`. Which list loses its
//! LRU entry is decided by [`Replacement`]. If the chosen list is empty the
//! other one gives up its LRU instead, so the cache never exceeds capacity.
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `get`       | O(1)   | Promotes T1 → T2, counts hit/miss          |
//! | `insert`    | O(1)   | May evict one entry into a ghost list      |
//! | `remove`    | O(1)   | Ghost lists untouched                      |
//! | `peek`      | O(1)   | No promotion, no counters                  |
//! | `contains`  | O(1)   | Resident keys only                         |
//! | `clear`     | O(n)   | Resets `p`, keeps hit/miss counters        |
//!
//! ## Example Usage
//!
//! ```
//! use arckit::policy::arc::{ARCCore, Segment};
//! use arckit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = ARCCore::new(2);
//!
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3); // "a" is evicted and remembered in B1
//! assert_eq!(cache.locate(&"a"), Some(Segment::B1));
//!
//! cache.insert("a", 10); // ghost hit: p grows and "a" lands in T2
//! assert_eq!(cache.locate(&"a"), Some(Segment::T2));
//! assert_eq!(cache.p_value(), 2);
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe. `ARCCore` holds no raw pointers, so it is `Send`/`Sync`
//! whenever `K` and `V` are; share it behind a mutex.
//!
//! ## References
//!
//! - Megiddo & Modha, "ARC: A Self-Tuning, Low Overhead Replacement Cache",
//!   FAST 2003

use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

pub use crate::builder::Replacement;
use crate::builder::ArcConfig;
use crate::ds::GhostList;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{
    ArcMetrics, ArcMetricsRecorder, ArcMetricsSnapshot, CoreMetricsRecorder,
    MetricsSnapshotProvider,
};
use crate::policy::lru::LruCore;
use crate::stats::CacheStats;
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Which of the four ARC lists currently knows about a key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Segment {
    /// Resident, seen once since admission.
    T1,
    /// Resident, seen at least twice.
    T2,
    /// Ghost of a T1 eviction.
    B1,
    /// Ghost of a T2 eviction.
    B2,
}

/// How a key is being admitted; steers the eviction target.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Admission {
    New,
    GhostB1,
    GhostB2,
}

/// Core Adaptive Replacement Cache (ARC) implementation.
///
/// - **T1**: recently admitted, accessed once
/// - **T2**: accessed again since admission
/// - **B1** / **B2**: keys recently evicted from T1 / T2
///
/// # Example
///
/// ```
/// use arckit::policy::arc::ARCCore;
/// use arckit::traits::{CoreCache, ReadOnlyCache};
///
/// let mut cache = ARCCore::new(100);
///
/// cache.insert("key1", "value1");
/// assert_eq!(cache.t1_len(), 1);
///
/// // First get promotes to T2
/// assert_eq!(cache.get(&"key1"), Some(&"value1"));
/// assert_eq!(cache.t2_len(), 1);
///
/// assert_eq!(cache.insert("key1", "new_value"), Some("value1"));
/// assert_eq!(cache.stats().hits(), 1);
/// ```
pub struct ARCCore<K, V>
where
    K: Clone + Eq + Hash,
{
    t1: LruCore<K, V>,
    t2: LruCore<K, V>,
    b1: GhostList<K>,
    b2: GhostList<K>,

    /// Target size for T1.
    p: usize,
    capacity: usize,
    replacement: Replacement,
    stats: CacheStats,

    #[cfg(feature = "metrics")]
    metrics: ArcMetrics,
}

impl<K, V> ARCCore<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to get an
    /// error instead.
    ///
    /// # Example
    ///
    /// ```
    /// use arckit::policy::arc::ARCCore;
    /// use arckit::traits::ReadOnlyCache;
    ///
    /// let cache: ARCCore<String, i32> = ARCCore::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert_eq!(cache.p_value(), 50);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache with the default [`Replacement`] rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(ArcConfig::new(capacity))
    }

    /// Creates a cache from a full configuration.
    pub fn with_config(config: ArcConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let capacity = config.capacity;
        let p = capacity / 2;
        debug!(
            capacity,
            replacement = ?config.replacement,
            p,
            "constructed ARC cache"
        );

        Ok(Self {
            t1: LruCore::new(capacity),
            t2: LruCore::new(capacity),
            b1: GhostList::new(capacity),
            b2: GhostList::new(capacity),
            p,
            capacity,
            replacement: config.replacement,
            stats: CacheStats::new(),
            #[cfg(feature = "metrics")]
            metrics: ArcMetrics::default(),
        })
    }

    /// Returns the resident value without promoting it or counting a lookup.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.t1.peek(key).or_else(|| self.t2.peek(key))
    }

    /// Reports which list tracks `key`, resident or ghost.
    pub fn locate(&self, key: &K) -> Option<Segment> {
        if self.t1.contains(key) {
            Some(Segment::T1)
        } else if self.t2.contains(key) {
            Some(Segment::T2)
        } else if self.b1.contains(key) {
            Some(Segment::B1)
        } else if self.b2.contains(key) {
            Some(Segment::B2)
        } else {
            None
        }
    }

    /// Current target size for T1. Higher favors recency, lower favors
    /// frequency.
    pub fn p_value(&self) -> usize {
        self.p
    }

    pub fn t1_len(&self) -> usize {
        self.t1.len()
    }

    pub fn t2_len(&self) -> usize {
        self.t2.len()
    }

    pub fn b1_len(&self) -> usize {
        self.b1.len()
    }

    pub fn b2_len(&self) -> usize {
        self.b2.len()
    }

    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    /// T1 keys from most to least recently used.
    pub fn t1_keys(&self) -> impl Iterator<Item = &K> {
        self.t1.keys()
    }

    /// T2 keys from most to least recently used.
    pub fn t2_keys(&self) -> impl Iterator<Item = &K> {
        self.t2.keys()
    }

    /// Hit/miss counters for `get`, cumulative across [`clear`](CoreCache::clear).
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
        #[cfg(feature = "metrics")]
        self.metrics.reset();
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> ArcMetricsSnapshot {
        self.metrics.to_snapshot(self.len(), self.capacity)
    }

    /// Checks the structural invariants linking the four lists and `p`.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "resident entries ({}) exceed capacity ({})",
                self.len(),
                self.capacity
            )));
        }
        if self.p > self.capacity {
            return Err(InvariantError::new(format!(
                "p ({}) exceeds capacity ({})",
                self.p, self.capacity
            )));
        }
        for (name, ghost) in [("B1", &self.b1), ("B2", &self.b2)] {
            if ghost.len() > self.capacity {
                return Err(InvariantError::new(format!(
                    "{name} length ({}) exceeds capacity ({})",
                    ghost.len(),
                    self.capacity
                )));
            }
        }

        for key in self.t1.keys() {
            if self.t2.contains(key) {
                return Err(InvariantError::new("key resident in both T1 and T2"));
            }
            if self.b1.contains(key) || self.b2.contains(key) {
                return Err(InvariantError::new("T1 key also present in a ghost list"));
            }
        }
        for key in self.t2.keys() {
            if self.b1.contains(key) || self.b2.contains(key) {
                return Err(InvariantError::new("T2 key also present in a ghost list"));
            }
        }
        if self.b1.iter().any(|key| self.b2.contains(key)) {
            return Err(InvariantError::new("key present in both B1 and B2"));
        }

        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.t1.debug_validate_invariants();
        self.t2.debug_validate_invariants();
        self.b1.debug_validate_invariants();
        self.b2.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("ARC invariant violated: {err}");
        }
    }

    /// Evicts one resident entry into its ghost list if the cache is full.
    fn make_room(&mut self, admission: Admission) {
        if self.len() < self.capacity {
            return;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let prefer_t1 = match self.replacement {
            Replacement::RecencyFirst => admission != Admission::GhostB1,
            Replacement::Adaptive => {
                let t1 = self.t1.len();
                t1 > 0 && (t1 > self.p || (t1 == self.p && admission == Admission::GhostB2))
            },
        };

        // An empty target falls back to the other list.
        let from_t1 = if prefer_t1 {
            !self.t1.is_empty()
        } else {
            self.t2.is_empty()
        };

        if from_t1 {
            self.evict_t1();
        } else {
            self.evict_t2();
        }
    }

    fn evict_t1(&mut self) {
        let Some((key, _)) = self.t1.pop_lru() else {
            return;
        };
        trace!(from = "T1", into = "B1", t1_len = self.t1.len(), "evicted");
        if self.b1.record(key).is_some() {
            trace!(ghost = "B1", "pruned oldest ghost");
            #[cfg(feature = "metrics")]
            self.metrics.record_ghost_prune();
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_evicted_entry();
            self.metrics.record_t1_eviction();
        }
    }

    fn evict_t2(&mut self) {
        let Some((key, _)) = self.t2.pop_lru() else {
            return;
        };
        trace!(from = "T2", into = "B2", t2_len = self.t2.len(), "evicted");
        if self.b2.record(key).is_some() {
            trace!(ghost = "B2", "pruned oldest ghost");
            #[cfg(feature = "metrics")]
            self.metrics.record_ghost_prune();
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_evicted_entry();
            self.metrics.record_t2_eviction();
        }
    }

    /// B1 hit: T1 was too small. Must run before the key leaves B1.
    fn grow_target(&mut self) {
        let delta = (self.b2.len() / self.b1.len().max(1)).max(1);
        let old_p = self.p;
        self.p = (self.p + delta).min(self.capacity);
        trace!(ghost = "B1", old_p, new_p = self.p, "ghost hit");

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_b1_ghost_hit();
            if self.p > old_p {
                self.metrics.record_p_increase();
            }
        }
    }

    /// B2 hit: T2 was too small. Must run before the key leaves B2.
    fn shrink_target(&mut self) {
        let delta = (self.b1.len() / self.b2.len().max(1)).max(1);
        let old_p = self.p;
        self.p = self.p.saturating_sub(delta);
        trace!(ghost = "B2", old_p, new_p = self.p, "ghost hit");

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_b2_ghost_hit();
            if self.p < old_p {
                self.metrics.record_p_decrease();
            }
        }
    }
}

impl<K, V> fmt::Debug for ARCCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ARCCore")
            .field("capacity", &self.capacity)
            .field("replacement", &self.replacement)
            .field("t1_len", &self.t1.len())
            .field("t2_len", &self.t2.len())
            .field("b1_len", &self.b1.len())
            .field("b2_len", &self.b2.len())
            .field("p", &self.p)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<K, V> ReadOnlyCache<K, V> for ARCCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn contains(&self, key: &K) -> bool {
        self.t1.contains(key) || self.t2.contains(key)
    }

    fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for ARCCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(value) = self.t1.remove(key) {
            self.t2.insert(key.clone(), value);
            self.stats.record_hit();
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_get_hit();
                self.metrics.record_t1_to_t2_promotion();
            }
            return self.t2.peek(key);
        }

        if self.t2.contains(key) {
            self.stats.record_hit();
            #[cfg(feature = "metrics")]
            self.metrics.record_get_hit();
            return self.t2.get(key);
        }

        self.stats.record_miss();
        #[cfg(feature = "metrics")]
        self.metrics.record_get_miss();
        None
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(previous) = self.t1.remove(&key) {
            self.t2.insert(key, value);
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_insert_update();
                self.metrics.record_t1_to_t2_promotion();
            }
            return Some(previous);
        }

        if self.t2.contains(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return self.t2.insert(key, value);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.b1.contains(&key) {
            self.grow_target();
            self.b1.remove(&key);
            self.make_room(Admission::GhostB1);
            self.t2.insert(key, value);
        } else if self.b2.contains(&key) {
            self.shrink_target();
            self.b2.remove(&key);
            self.make_room(Admission::GhostB2);
            self.t2.insert(key, value);
        } else {
            self.make_room(Admission::New);
            self.t1.insert(key, value);
        }

        None
    }

    /// Drops every resident and ghost entry and resets `p` to
    /// `capacity / 2`. Hit/miss counters are kept.
    fn clear(&mut self) {
        self.t1.clear();
        self.t2.clear();
        self.b1.clear();
        self.b2.clear();
        self.p = self.capacity / 2;
        trace!(capacity = self.capacity, "cleared ARC cache");

        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }
}

impl<K, V> MutableCache<K, V> for ARCCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        self.t1.remove(key).or_else(|| self.t2.remove(key))
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<ArcMetricsSnapshot> for ARCCore<K, V>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> ArcMetricsSnapshot {
        self.metrics_snapshot()
    }
}
