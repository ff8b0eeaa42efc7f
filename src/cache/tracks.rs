//! Track cache with LRU eviction.
//!
//! Maps track ids to materialized tracks. Each entry also owns a node in a
//! [`RecencyList`], so lookups, touches and evictions are all O(1).

use std::collections::HashMap;

use crate::cache::recency::{RecencyList, Slot};
use crate::types::{TrackId, TrackRef};

/// Number of tracks kept materialized by default.
///
/// Sized for a visible window of rows, not for the whole list.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Hit, miss and eviction counters for a [`TrackCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries dropped to make room for new ones.
    pub evictions: u64,
}

/// Track cache with LRU eviction policy.
#[derive(Debug, Clone)]
pub struct TrackCache {
    /// Tracks indexed by id.
    entries: HashMap<TrackId, CacheEntry>,
    /// Recency order over the keys of `entries`.
    recency: RecencyList,
    /// Maximum number of entries to keep.
    capacity: usize,
    stats: CacheStats,
}

/// A cached track with its recency handle.
#[derive(Debug, Clone)]
struct CacheEntry {
    track: TrackRef,
    slot: Slot,
}

impl TrackCache {
    /// Creates a new cache with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a new cache with specified capacity.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            recency: RecencyList::with_capacity(capacity),
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Returns a track by id, marking it most recently used.
    pub fn get(&mut self, id: TrackId) -> Option<TrackRef> {
        match self.entries.get(&id) {
            Some(entry) => {
                let track = TrackRef::clone(&entry.track);
                self.recency.touch(entry.slot);
                self.stats.hits += 1;
                Some(track)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Returns a track by id without changing its recency.
    pub fn peek(&self, id: TrackId) -> Option<&TrackRef> {
        self.entries.get(&id).map(|entry| &entry.track)
    }

    /// Inserts a track as most recently used.
    ///
    /// If the cache is full and `id` is new, the least recently used entry
    /// is evicted first and its id returned.
    pub fn put(&mut self, id: TrackId, track: TrackRef) -> Option<TrackId> {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.track = track;
            self.recency.touch(entry.slot);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let slot = self.recency.push_front(id);
        self.entries.insert(id, CacheEntry { track, slot });
        evicted
    }

    /// Checks if a track id exists in the cache.
    pub fn contains(&self, id: TrackId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of tracks in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the hit, miss and eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Evicts the least recently used entry.
    ///
    /// Returns the evicted id if any.
    pub fn evict_lru(&mut self) -> Option<TrackId> {
        let id = self.recency.pop_back()?;
        self.entries.remove(&id);
        self.stats.evictions += 1;
        Some(id)
    }

    /// Removes a specific track from the cache.
    pub fn remove(&mut self, id: TrackId) -> Option<TrackRef> {
        let entry = self.entries.remove(&id)?;
        self.recency.remove(entry.slot);
        Some(entry.track)
    }

    /// Clears all entries from the cache.
    ///
    /// Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    /// Returns cached ids from most to least recently used.
    pub fn ids_by_recency(&self) -> Vec<TrackId> {
        self.recency.iter().collect()
    }
}

impl Default for TrackCache {
    fn default() -> Self {
        Self::new()
    }
}
