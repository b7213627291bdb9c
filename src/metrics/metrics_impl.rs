use crate::metrics::snapshot::ArcMetricsSnapshot;
use crate::metrics::traits::{ArcMetricsRecorder, CoreMetricsRecorder};

// ---------------------------------------------------------------------------
// ArcMetrics
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct ArcMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub t1_to_t2_promotions: u64,
    pub b1_ghost_hits: u64,
    pub b2_ghost_hits: u64,
    pub p_increases: u64,
    pub p_decreases: u64,
    pub t1_evictions: u64,
    pub t2_evictions: u64,
    pub ghost_prunes: u64,
    pub clears: u64,
}

impl ArcMetrics {
    /// Copies the counters, tagging them with the cache's current size.
    pub fn to_snapshot(&self, cache_len: usize, capacity: usize) -> ArcMetricsSnapshot {
        ArcMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_updates: self.insert_updates,
            insert_new: self.insert_new,
            evict_calls: self.evict_calls,
            evicted_entries: self.evicted_entries,
            t1_to_t2_promotions: self.t1_to_t2_promotions,
            b1_ghost_hits: self.b1_ghost_hits,
            b2_ghost_hits: self.b2_ghost_hits,
            p_increases: self.p_increases,
            p_decreases: self.p_decreases,
            t1_evictions: self.t1_evictions,
            t2_evictions: self.t2_evictions,
            ghost_prunes: self.ghost_prunes,
            clears: self.clears,
            cache_len,
            capacity,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for ArcMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }
    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }
    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }
    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }
    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl ArcMetricsRecorder for ArcMetrics {
    fn record_t1_to_t2_promotion(&mut self) {
        self.t1_to_t2_promotions += 1;
    }
    fn record_b1_ghost_hit(&mut self) {
        self.b1_ghost_hits += 1;
    }
    fn record_b2_ghost_hit(&mut self) {
        self.b2_ghost_hits += 1;
    }
    fn record_p_increase(&mut self) {
        self.p_increases += 1;
    }
    fn record_p_decrease(&mut self) {
        self.p_decreases += 1;
    }
    fn record_t1_eviction(&mut self) {
        self.t1_evictions += 1;
    }
    fn record_t2_eviction(&mut self) {
        self.t2_evictions += 1;
    }
    fn record_ghost_prune(&mut self) {
        self.ghost_prunes += 1;
    }
}
