//! Ordered track lists.
//!
//! A list is a sequence of [`TrackId`]s plus an LRU cache of the tracks
//! those ids resolve to. Callers get a reference typed to the capability
//! set they need:
//! - [`TrackListView`]: read-only access for presentation code
//! - [`TrackListEditor`]: in-place editing for queue and playlist logic
//!
//! Both are implemented by [`TrackList`]. [`SharedTrackList`] puts a list
//! behind a reader/writer lock for UI thread + background worker use.

mod list;
mod shared;

pub use list::TrackList;
pub use shared::SharedTrackList;

use crate::error::Result;
use crate::types::{TrackId, TrackRef};

/// Read-only access to a track list.
pub trait TrackListView {
    /// Returns the number of ids in the list.
    fn count(&self) -> usize;

    /// Returns the id at `index`.
    ///
    /// Fails with `OUT_OF_RANGE` if `index >= count()`.
    fn id_at(&self, index: usize) -> Result<TrackId>;

    /// Returns the first position holding `id`, or None if absent.
    fn index_of(&self, id: TrackId) -> Option<usize>;

    /// Returns the materialized track at `index`.
    ///
    /// Fails only with `OUT_OF_RANGE`. Ids the library cannot resolve come
    /// back as a placeholder for which [`Track::is_unknown`] is true.
    ///
    /// [`Track::is_unknown`]: crate::types::Track::is_unknown
    fn object_at(&self, index: usize) -> Result<TrackRef>;
}

/// In-place editing of a track list.
///
/// Failed operations leave the list untouched. Edits never add or evict
/// cache entries.
pub trait TrackListEditor {
    /// Appends `id` to the end.
    fn add(&mut self, id: TrackId);

    /// Inserts `id` at `index`, shifting later ids right.
    ///
    /// `index == count()` appends.
    fn insert(&mut self, id: TrackId, index: usize) -> Result<()>;

    /// Removes and returns the id at `index`, shifting later ids left.
    fn delete(&mut self, index: usize) -> Result<TrackId>;

    /// Exchanges the ids at two positions.
    fn swap(&mut self, index1: usize, index2: usize) -> Result<()>;

    /// Removes the id at `from` and reinserts it at `to`.
    ///
    /// `to` addresses the sequence after the removal.
    fn move_track(&mut self, from: usize, to: usize) -> Result<()>;

    /// Reorders the list into a uniformly random permutation.
    fn shuffle(&mut self);

    /// Removes every id. The cache is left as is.
    fn clear(&mut self);
}
