pub use crate::ByteArcCache;
pub use crate::builder::{ArcCacheBuilder, ArcConfig, Replacement};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::arc::{ARCCore, Segment};
pub use crate::policy::lru::LruCore;
pub use crate::stats::CacheStats;
pub use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};
