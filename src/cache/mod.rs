//! Cache module for materialized tracks.
//!
//! Provides the LRU cache that track lists consult before asking the
//! library to resolve an id.

pub mod recency;
pub mod tracks;

// Re-export commonly used types
pub use tracks::{CacheStats, TrackCache, DEFAULT_CACHE_CAPACITY};
