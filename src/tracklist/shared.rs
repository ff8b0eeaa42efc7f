//! A track list shared between a UI thread and background workers.
//!
//! One writer, many readers behind a single reader/writer lock. The lock is
//! fair: once a writer queues, new readers wait behind it. So
//! [`SharedTrackList::object_at`] never holds it across a resolver call.
//! It checks the cache under the read lock, releases the lock while the
//! library is queried, and takes the lock again only to cache the result.
//! A slow lookup therefore blocks neither writers nor cached reads.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::tracklist::{TrackList, TrackListEditor, TrackListView};
use crate::types::{TrackId, TrackRef};

/// Cloneable handle to a lock-protected [`TrackList`].
#[derive(Debug, Clone)]
pub struct SharedTrackList {
    inner: Arc<RwLock<TrackList>>,
}

impl SharedTrackList {
    /// Wraps `list` for shared use.
    pub fn new(list: TrackList) -> Self {
        Self {
            inner: Arc::new(RwLock::new(list)),
        }
    }

    /// Runs `f` with read-only access under the read lock.
    ///
    /// A cache miss inside `f` resolves with the lock held, so a queued
    /// writer and every reader behind it wait for that lookup. Use
    /// [`SharedTrackList::object_at`] to materialize rows.
    pub fn read<T>(&self, f: impl FnOnce(&dyn TrackListView) -> T) -> T {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Runs `f` with editing access under the write lock.
    pub fn edit<T>(&self, f: impl FnOnce(&mut dyn TrackListEditor) -> T) -> T {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Runs `f` with full access to the list under the write lock.
    pub fn with_list_mut<T>(&self, f: impl FnOnce(&mut TrackList) -> T) -> T {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Swaps `replacement` in as the live list and returns the old content.
    ///
    /// Build the replacement without holding any lock; publishing then
    /// takes the write lock only for a constant-time exchange, and readers
    /// never observe a partially built list.
    pub fn publish(&self, mut replacement: TrackList) -> TrackList {
        self.inner.write().swap_with(&mut replacement);
        tracing::debug!(count = replacement.count(), "published replacement track list");
        replacement
    }

    /// Returns the number of ids in the list.
    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    /// Returns the id at `index`.
    pub fn id_at(&self, index: usize) -> Result<TrackId> {
        self.inner.read().id_at(index)
    }

    /// Returns the materialized track at `index`.
    ///
    /// The resolver runs without the list lock held. If the list is edited
    /// meanwhile, the resolved track is still cached under its id and
    /// returned for the index as it was when the read started.
    pub fn object_at(&self, index: usize) -> Result<TrackRef> {
        let (id, resolver) = {
            let guard = self.inner.read();
            let id = guard.id_at(index)?;
            if let Some(track) = guard.cached(id) {
                return Ok(track);
            }
            (id, guard.resolver())
        };

        let resolved = resolver.resolve(id);
        Ok(self.inner.read().store_resolved(id, resolved))
    }

    /// Returns a copy of the current id sequence.
    pub fn snapshot(&self) -> Vec<TrackId> {
        self.inner.read().ids().to_vec()
    }
}
