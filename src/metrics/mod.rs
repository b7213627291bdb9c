//! Optional counters for the ARC controller, compiled with the `metrics`
//! feature.
//!
//! Recording is split from reading: the cache writes through the recorder
//! traits on every operation, and callers read a [`ArcMetricsSnapshot`]
//! through [`MetricsSnapshotProvider`].

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::ArcMetrics;
pub use snapshot::ArcMetricsSnapshot;
pub use traits::{ArcMetricsRecorder, CoreMetricsRecorder, MetricsSnapshotProvider};
