/// Point-in-time copy of [`ArcMetrics`](crate::metrics::ArcMetrics) plus the
/// cache's size at the moment the snapshot was taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArcMetricsSnapshot {
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

    pub cache_len: usize,
    pub capacity: usize,
}

impl ArcMetricsSnapshot {
    /// Fraction of `get` calls that hit; `0.0` before any call.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
