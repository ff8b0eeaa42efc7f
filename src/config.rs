//! Track list configuration.
//!
//! Contains the tunables for track lists: cache capacity and an optional
//! shuffle seed for reproducible orderings.

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CACHE_CAPACITY;

/// Largest cache capacity accepted by [`TrackListConfig::validate`].
pub const MAX_CACHE_CAPACITY: usize = 10_000;

/// Runtime configuration for track lists.
///
/// Typically loaded from environment variables at startup and shared by
/// every list the host creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackListConfig {
    /// Maximum number of materialized tracks kept per list.
    pub cache_capacity: usize,

    /// Seed for the shuffle RNG.
    /// If None, each list seeds from OS entropy.
    pub shuffle_seed: Option<u64>,
}

impl TrackListConfig {
    /// Creates a TrackListConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a TrackListConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `LOFI_TRACKLIST_CACHE_SIZE` - Cache capacity per list
    /// - `LOFI_TRACKLIST_SHUFFLE_SEED` - Fixed shuffle seed
    ///
    /// Falls back to defaults for unset or unparsable variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size_str) = lookup("LOFI_TRACKLIST_CACHE_SIZE") {
            if let Ok(size) = size_str.trim().parse::<usize>() {
                if (1..=MAX_CACHE_CAPACITY).contains(&size) {
                    config.cache_capacity = size;
                }
            }
        }

        if let Some(seed_str) = lookup("LOFI_TRACKLIST_SHUFFLE_SEED") {
            if let Ok(seed) = seed_str.trim().parse::<u64>() {
                config.shuffle_seed = Some(seed);
            }
        }

        config
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.cache_capacity == 0 {
            return Some("cache_capacity must be > 0".to_string());
        }
        if self.cache_capacity > MAX_CACHE_CAPACITY {
            return Some(format!(
                "cache_capacity too high: {} (max {})",
                self.cache_capacity, MAX_CACHE_CAPACITY
            ));
        }

        None
    }
}

impl Default for TrackListConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            shuffle_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = TrackListConfig::new();
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.shuffle_seed.is_none());
        assert!(config.validate().is_none());
    }

    #[test]
    fn config_validation() {
        let mut config = TrackListConfig::new();

        config.cache_capacity = 0;
        assert!(config.validate().is_some());

        config.cache_capacity = MAX_CACHE_CAPACITY + 1;
        assert!(config.validate().is_some());

        config.cache_capacity = 8;
        assert!(config.validate().is_none());
    }

    #[test]
    fn lookup_reads_values() {
        let config = TrackListConfig::from_lookup(lookup_from(&[
            ("LOFI_TRACKLIST_CACHE_SIZE", "12"),
            ("LOFI_TRACKLIST_SHUFFLE_SEED", " 99 "),
        ]));
        assert_eq!(config.cache_capacity, 12);
        assert_eq!(config.shuffle_seed, Some(99));
    }

    #[test]
    fn lookup_ignores_invalid_values() {
        let config = TrackListConfig::from_lookup(lookup_from(&[
            ("LOFI_TRACKLIST_CACHE_SIZE", "0"),
            ("LOFI_TRACKLIST_SHUFFLE_SEED", "abc"),
        ]));
        assert_eq!(config, TrackListConfig::default());
    }

    #[test]
    fn deserialize_partial_json() {
        let config: TrackListConfig = serde_json::from_str(r#"{"cache_capacity": 3}"#).unwrap();
        assert_eq!(config.cache_capacity, 3);
        assert!(config.shuffle_seed.is_none());
    }
}
