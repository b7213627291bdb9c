//! Eviction policies.
//!
//! - [`lru`]: the bounded, key-indexed recency list ARC is built from.
//! - [`arc`]: the adaptive controller over two recency lists and two ghost
//!   lists.

pub mod arc;
pub mod lru;
