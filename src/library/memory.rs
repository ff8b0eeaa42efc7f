//! In-memory track library.
//!
//! Holds track records in a map behind a reader/writer lock so the host can
//! keep editing the library while lists resolve against it.

use std::collections::HashMap;
use std::path::Path;

use parking_lot::RwLock;

use crate::error::{ErrorCode, Result, TrackListError};
use crate::library::TrackResolver;
use crate::types::{Track, TrackId};

/// A library that keeps every track in memory.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    tracks: RwLock<HashMap<TrackId, Track>>,
}

impl MemoryLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library holding `tracks`.
    ///
    /// Later tracks replace earlier ones with the same id.
    pub fn from_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
        let map = tracks.into_iter().map(|t| (t.id, t)).collect();
        Self {
            tracks: RwLock::new(map),
        }
    }

    /// Loads a library from a JSON file containing an array of tracks.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrackListError::with_source(
                ErrorCode::LibraryLoadFailed,
                format!("Failed to read {}", path.display()),
                e,
            )
        })?;

        let tracks: Vec<Track> = serde_json::from_str(&content).map_err(|e| {
            TrackListError::library_load_failed(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(count = tracks.len(), path = %path.display(), "loaded library");
        Ok(Self::from_tracks(tracks))
    }

    /// Inserts or replaces a track, returning the previous record.
    pub fn insert(&self, track: Track) -> Option<Track> {
        self.tracks.write().insert(track.id, track)
    }

    /// Removes a track, returning it if present.
    pub fn remove(&self, id: TrackId) -> Option<Track> {
        self.tracks.write().remove(&id)
    }

    /// Checks if the library knows `id`.
    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.read().contains_key(&id)
    }

    /// Returns the number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.read().len()
    }

    /// Returns true if the library holds no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.read().is_empty()
    }
}

impl TrackResolver for MemoryLibrary {
    fn resolve(&self, id: TrackId) -> Result<Track> {
        self.tracks
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| TrackListError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolve_known_and_unknown() {
        let library = MemoryLibrary::from_tracks(vec![
            Track::new(TrackId(1), "one"),
            Track::new(TrackId(2), "two"),
        ]);

        assert_eq!(library.len(), 2);
        assert_eq!(library.resolve(TrackId(2)).unwrap().title, "two");
        assert_eq!(
            library.resolve(TrackId(3)).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn insert_and_remove() {
        let library = MemoryLibrary::new();
        assert!(library.is_empty());

        assert!(library.insert(Track::new(TrackId(1), "a")).is_none());
        let previous = library.insert(Track::new(TrackId(1), "b")).unwrap();
        assert_eq!(previous.title, "a");
        assert!(library.contains(TrackId(1)));

        assert!(library.remove(TrackId(1)).is_some());
        assert!(!library.contains(TrackId(1)));
        assert!(library.resolve(TrackId(1)).is_err());
    }

    #[test]
    fn load_json_reads_track_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        let tracks = vec![
            Track::new(TrackId(10), "Flamenco Sketches").with_album("Kind of Blue"),
            Track::new(TrackId(20), "All Blues").with_duration(693.0),
        ];
        std::fs::write(&path, serde_json::to_string(&tracks).unwrap()).unwrap();

        let library = MemoryLibrary::load_json(&path).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.resolve(TrackId(10)).unwrap().album, "Kind of Blue");
        assert_eq!(library.resolve(TrackId(20)).unwrap().duration_sec, 693.0);
    }

    #[test]
    fn load_json_missing_file() {
        let dir = tempdir().unwrap();
        let err = MemoryLibrary::load_json(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::LibraryLoadFailed);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_json_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = MemoryLibrary::load_json(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::LibraryLoadFailed);
    }
}
