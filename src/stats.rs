//! Per-instance hit/miss counters.
//!
//! Every cache owns its own [`CacheStats`]; there is no process-wide state.
//! Only lookups (`get`) move the counters, so `hits + misses` always equals
//! the number of lookups issued since construction or the last
//! `reset_stats`.

/// Cumulative lookup counters for one cache instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
}

impl CacheStats {
    pub const fn new() -> Self {
        Self { hits: 0, misses: 0 }
    }

    /// Lookups that found a resident entry.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that found nothing.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Total lookups recorded.
    #[inline]
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, in `[0.0, 1.0]`; `0.0` before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.misses = self.misses.saturating_add(1);
    }
}
