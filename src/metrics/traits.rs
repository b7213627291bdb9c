//! # Metrics Trait Hierarchy
//!
//! Recording and consumption are separate concerns. The cache only writes
//! counters through the recorder traits; tests and benches read them back
//! through [`MetricsSnapshotProvider`].
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │
//!   │  get_hit/get_miss/insert    │
//!   │  evict/clear                │
//!   └──────────────┬──────────────┘
//!                  ▼
//!   ┌─────────────────────────────┐      ┌──────────────────────────────┐
//!   │     ArcMetricsRecorder      │      │ MetricsSnapshotProvider<S>   │
//!   │  promotions, ghost hits,    │      │ (bench/test)                 │
//!   │  p movement, per-list evict │      └──────────────────────────────┘
//!   └─────────────────────────────┘
//! ```

/// Common counters for any cache.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// ARC-specific signals: list movement, ghost hits and target adaptation.
pub trait ArcMetricsRecorder: CoreMetricsRecorder {
    fn record_t1_to_t2_promotion(&mut self);
    fn record_b1_ghost_hit(&mut self);
    fn record_b2_ghost_hit(&mut self);
    fn record_p_increase(&mut self);
    fn record_p_decrease(&mut self);
    fn record_t1_eviction(&mut self);
    fn record_t2_eviction(&mut self);
    /// A ghost set was full and dropped its oldest key.
    fn record_ghost_prune(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
