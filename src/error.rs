//! Error types for arckit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache is configured with invalid
//!   parameters (a capacity of zero).
//! - [`InvariantError`]: Returned by
//!   [`ARCCore::check_invariants`](crate::policy::arc::ARCCore::check_invariants)
//!   when the internal lists disagree with each other.
//!
//! Lookups never produce errors; absence is reported as `None`.
//!
//! ## Example Usage
//!
//! ```
//! use arckit::error::ConfigError;
//! use arckit::policy::arc::ARCCore;
//!
//! let cache: Result<ARCCore<String, Vec<u8>>, ConfigError> = ARCCore::try_new(64);
//! assert!(cache.is_ok());
//!
//! let bad = ARCCore::<String, Vec<u8>>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`ARCCore::try_new`](crate::policy::arc::ARCCore::try_new),
/// [`ArcConfig::validate`](crate::builder::ArcConfig::validate) and
/// [`ArcCacheBuilder::try_build`](crate::builder::ArcCacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use arckit::policy::arc::ARCCore;
///
/// let err = ARCCore::<String, Vec<u8>>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when an internal cache invariant does not hold.
///
/// Carries a description of the first violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
