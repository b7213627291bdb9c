//! Configuration and builder for [`ARCCore`].
//!
//! ## Example
//!
//! ```rust
//! use arckit::builder::{ArcCacheBuilder, Replacement};
//! use arckit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = ArcCacheBuilder::new(100)
//!     .replacement(Replacement::Adaptive)
//!     .build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.capacity(), 100);
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::arc::ARCCore;

/// Which resident list gives up its LRU entry when the cache is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Replacement {
    /// Fixed targets per admission: a B1 ghost hit evicts from T2, a B2
    /// ghost hit or a brand-new key evicts from T1.
    #[default]
    RecencyFirst,
    /// Classic ARC rule: evict from T1 when `|T1| > p`, or when `|T1| == p`
    /// and the admission was a B2 ghost hit; otherwise evict from T2.
    Adaptive,
}

/// Validated construction parameters for an ARC cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcConfig {
    /// Maximum number of resident entries (|T1| + |T2|).
    pub capacity: usize,
    pub replacement: Replacement,
}

impl ArcConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            replacement: Replacement::default(),
        }
    }

    /// Checks that the configuration can back a cache.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for creating ARC cache instances.
#[derive(Debug, Clone)]
pub struct ArcCacheBuilder {
    config: ArcConfig,
}

impl ArcCacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            config: ArcConfig::new(capacity),
        }
    }

    /// Selects the eviction target rule.
    pub fn replacement(mut self, replacement: Replacement) -> Self {
        self.config.replacement = replacement;
        self
    }

    /// Returns the configuration built so far.
    pub fn config(&self) -> ArcConfig {
        self.config
    }

    /// Build the cache, rejecting invalid configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arckit::builder::ArcCacheBuilder;
    ///
    /// assert!(ArcCacheBuilder::new(0).try_build::<u64, String>().is_err());
    /// assert!(ArcCacheBuilder::new(8).try_build::<u64, String>().is_ok());
    /// ```
    pub fn try_build<K, V>(self) -> Result<ARCCore<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        ARCCore::with_config(self.config)
    }

    /// Build the cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero.
    pub fn build<K, V>(self) -> ARCCore<K, V>
    where
        K: Clone + Eq + Hash,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }
}
