//! The resolver capability lists use to materialize tracks.

use std::sync::Arc;

use crate::error::Result;
use crate::types::{Track, TrackId};

/// Turns a track id into a materialized [`Track`].
///
/// Supplied by the hosting library and called only on cache misses. It may
/// be slow (a persistent store lookup) and may be called from any thread
/// that reads a list. An id the library no longer knows should be reported
/// as [`ErrorCode::NotFound`](crate::error::ErrorCode::NotFound).
pub trait TrackResolver: Send + Sync {
    /// Resolves `id` to its track metadata.
    fn resolve(&self, id: TrackId) -> Result<Track>;
}

impl<R: TrackResolver + ?Sized> TrackResolver for Arc<R> {
    fn resolve(&self, id: TrackId) -> Result<Track> {
        (**self).resolve(id)
    }
}

impl<F> TrackResolver for F
where
    F: Fn(TrackId) -> Result<Track> + Send + Sync,
{
    fn resolve(&self, id: TrackId) -> Result<Track> {
        self(id)
    }
}
