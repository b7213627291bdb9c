//! arckit: an Adaptive Replacement Cache (ARC) with arena-backed recency
//! lists and FIFO-pruned ghost sets.
//!
//! ```
//! use arckit::prelude::*;
//!
//! let mut cache: ByteArcCache = ARCCore::new(128);
//! cache.insert("user:42".to_string(), b"alice".to_vec());
//! assert_eq!(cache.get(&"user:42".to_string()), Some(&b"alice".to_vec()));
//! assert_eq!(cache.stats().hits(), 1);
//! ```

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod stats;
pub mod traits;

pub use crate::builder::{ArcCacheBuilder, ArcConfig, Replacement};
pub use crate::ds::{GhostList, IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::ArcMetricsSnapshot;
pub use crate::policy::arc::{ARCCore, Segment};
pub use crate::policy::lru::LruCore;
pub use crate::stats::CacheStats;

/// ARC cache keyed by strings and holding raw byte values.
pub type ByteArcCache = ARCCore<String, Vec<u8>>;
