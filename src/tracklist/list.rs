//! The track list: id sequence plus LRU cache of resolved tracks.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cache::{CacheStats, TrackCache};
use crate::config::TrackListConfig;
use crate::error::{Result, TrackListError};
use crate::library::TrackResolver;
use crate::tracklist::{TrackListEditor, TrackListView};
use crate::types::{Track, TrackId, TrackRef};

/// An ordered list of track ids backed by a library.
///
/// The id sequence is the only source of truth for order and membership;
/// the same id may appear more than once. Tracks are materialized through
/// the resolver on first read and kept in a bounded LRU cache keyed by id,
/// so reordering never invalidates cached tracks.
///
/// Read operations take `&self`. The cache sits behind its own mutex that
/// is held only to look up and to insert, never across a resolver call.
pub struct TrackList {
    ids: Vec<TrackId>,
    cache: Mutex<TrackCache>,
    resolver: Arc<dyn TrackResolver>,
    rng: ChaCha8Rng,
    /// Reads answered with a placeholder because resolution failed.
    unresolved: AtomicU64,
}

impl TrackList {
    /// Creates an empty list with default configuration.
    pub fn new(resolver: Arc<dyn TrackResolver>) -> Self {
        Self::with_config(resolver, &TrackListConfig::default())
    }

    /// Creates an empty list using `config` for cache size and shuffle seed.
    pub fn with_config(resolver: Arc<dyn TrackResolver>, config: &TrackListConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            ids: Vec::new(),
            cache: Mutex::new(TrackCache::with_capacity(config.cache_capacity)),
            resolver,
            rng,
            unresolved: AtomicU64::new(0),
        }
    }

    /// Like [`TrackList::with_config`], but rejects an invalid `config`
    /// instead of clamping it.
    pub fn try_with_config(
        resolver: Arc<dyn TrackResolver>,
        config: &TrackListConfig,
    ) -> Result<Self> {
        if let Some(reason) = config.validate() {
            return Err(TrackListError::invalid_config(reason));
        }
        Ok(Self::with_config(resolver, config))
    }

    /// Creates a list holding `ids` in order, with default configuration.
    pub fn with_ids(
        resolver: Arc<dyn TrackResolver>,
        ids: impl IntoIterator<Item = TrackId>,
    ) -> Self {
        let mut list = Self::new(resolver);
        list.ids.extend(ids);
        list
    }

    /// Returns true if the list holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the id sequence.
    pub fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    /// Iterates the ids in list order.
    pub fn iter(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.ids.iter().copied()
    }

    /// Returns the track at `index`, or None if out of range.
    pub fn get(&self, index: usize) -> Option<TrackRef> {
        self.object_at(index).ok()
    }

    /// Drops every cached track.
    ///
    /// Use when library records are known to have changed so stale tracks
    /// are not served. The id sequence is unaffected.
    pub fn clear_cache(&mut self) {
        self.cache.get_mut().clear();
    }

    /// Replaces this list's ids with a copy of `other`'s.
    ///
    /// Cache contents are not copied.
    pub fn copy_from(&mut self, other: &TrackList) {
        self.ids.clone_from(&other.ids);
    }

    /// Exchanges the whole id sequence and cache with `other`.
    ///
    /// This is a constant-time exchange, meant for publishing a list that
    /// was built elsewhere.
    pub fn swap_with(&mut self, other: &mut TrackList) {
        std::mem::swap(&mut self.ids, &mut other.ids);
        std::mem::swap(self.cache.get_mut(), other.cache.get_mut());
    }

    /// Returns the number of cached tracks.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns the maximum number of cached tracks.
    pub fn cache_capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    /// Returns cache hit, miss and eviction counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    /// Returns cached ids from most to least recently used.
    pub fn cached_ids(&self) -> Vec<TrackId> {
        self.cache.lock().ids_by_recency()
    }

    /// Returns how many reads fell back to a placeholder track.
    pub fn unresolved_count(&self) -> u64 {
        self.unresolved.load(Ordering::Relaxed)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.ids.len() {
            Ok(())
        } else {
            Err(TrackListError::out_of_range(index, self.ids.len()))
        }
    }

    /// Returns the cached track for `id`, marking it most recently used.
    pub(crate) fn cached(&self, id: TrackId) -> Option<TrackRef> {
        let cached = self.cache.lock().get(id);
        if cached.is_some() {
            tracing::trace!(%id, "track cache hit");
        }
        cached
    }

    /// Returns a handle to the resolver this list materializes through.
    pub(crate) fn resolver(&self) -> Arc<dyn TrackResolver> {
        Arc::clone(&self.resolver)
    }

    /// Caches a resolver outcome for `id` and returns the track to serve.
    ///
    /// Failures become an uncached placeholder.
    pub(crate) fn store_resolved(&self, id: TrackId, resolved: Result<Track>) -> TrackRef {
        match resolved {
            Ok(track) => {
                let track = Arc::new(track);
                let evicted = self.cache.lock().put(id, Arc::clone(&track));
                match evicted {
                    Some(evicted) => tracing::debug!(%id, %evicted, "track cache miss, evicted"),
                    None => tracing::debug!(%id, "track cache miss"),
                }
                track
            }
            Err(err) => {
                self.unresolved.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    %id,
                    code = %err.code,
                    kind = err.code.description(),
                    "unable to resolve track: {}",
                    err.message
                );
                Arc::new(Track::unknown(id))
            }
        }
    }

    fn materialize(&self, id: TrackId) -> TrackRef {
        if let Some(track) = self.cached(id) {
            return track;
        }
        self.store_resolved(id, self.resolver.resolve(id))
    }
}

impl TrackListView for TrackList {
    fn count(&self) -> usize {
        self.ids.len()
    }

    fn id_at(&self, index: usize) -> Result<TrackId> {
        self.ids
            .get(index)
            .copied()
            .ok_or_else(|| TrackListError::out_of_range(index, self.ids.len()))
    }

    fn index_of(&self, id: TrackId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    fn object_at(&self, index: usize) -> Result<TrackRef> {
        let id = self.id_at(index)?;
        Ok(self.materialize(id))
    }
}

impl TrackListEditor for TrackList {
    fn add(&mut self, id: TrackId) {
        self.ids.push(id);
    }

    fn insert(&mut self, id: TrackId, index: usize) -> Result<()> {
        if index > self.ids.len() {
            return Err(TrackListError::out_of_range(index, self.ids.len()));
        }
        self.ids.insert(index, id);
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<TrackId> {
        self.check_index(index)?;
        Ok(self.ids.remove(index))
    }

    fn swap(&mut self, index1: usize, index2: usize) -> Result<()> {
        self.check_index(index1)?;
        self.check_index(index2)?;
        self.ids.swap(index1, index2);
        Ok(())
    }

    fn move_track(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let id = self.ids.remove(from);
        self.ids.insert(to, id);
        Ok(())
    }

    fn shuffle(&mut self) {
        self.ids.shuffle(&mut self.rng);
        tracing::debug!(count = self.ids.len(), "shuffled track list");
    }

    fn clear(&mut self) {
        self.ids.clear();
    }
}

impl fmt::Debug for TrackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackList")
            .field("ids", &self.ids)
            .field("cache_len", &self.cache_len())
            .field("unresolved", &self.unresolved_count())
            .finish_non_exhaustive()
    }
}
