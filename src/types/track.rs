//! Track types representing library records.
//!
//! A [`Track`] is the fully materialized metadata for one library record.
//! Lists only store [`TrackId`]s and hydrate tracks on demand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Opaque 64-bit identifier of a library track.
///
/// Identifiers say nothing about list position; the same id may appear
/// at several positions of one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl TrackId {
    /// Returns the raw identifier value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        TrackId(id)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared handle to a materialized track.
///
/// The cache and every reader hold independent handles to the same
/// object; it is dropped once the last handle goes away.
pub type TrackRef = Arc<Track>;

/// A fully materialized library track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Library identifier.
    pub id: TrackId,

    /// Track title.
    #[serde(default)]
    pub title: String,

    /// Performing artist.
    #[serde(default)]
    pub artist: String,

    /// Album title.
    #[serde(default)]
    pub album: String,

    /// Album artist, when different from the track artist.
    #[serde(default)]
    pub album_artist: String,

    /// Genre tag.
    #[serde(default)]
    pub genre: String,

    /// Position on the album, if tagged.
    #[serde(default)]
    pub track_number: Option<u32>,

    /// Duration in seconds.
    #[serde(default)]
    pub duration_sec: f32,

    /// Location of the audio file, if the library knows it.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Additional tags not covered by the fields above.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// Set on placeholders returned for ids the library could not resolve.
    #[serde(skip)]
    unknown: bool,
}

impl Track {
    /// Creates a track with the given id and title and empty metadata.
    pub fn new(id: TrackId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: String::new(),
            album: String::new(),
            album_artist: String::new(),
            genre: String::new(),
            track_number: None,
            duration_sec: 0.0,
            path: None,
            metadata: BTreeMap::new(),
            unknown: false,
        }
    }

    /// Creates the placeholder returned when `id` cannot be resolved.
    pub fn unknown(id: TrackId) -> Self {
        Self {
            unknown: true,
            ..Self::new(id, "")
        }
    }

    /// Returns true if this is a placeholder for an unresolvable id.
    pub fn is_unknown(&self) -> bool {
        self.unknown
    }

    /// Sets the artist.
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// Sets the album.
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Sets the duration in seconds.
    pub fn with_duration(mut self, duration_sec: f32) -> Self {
        self.duration_sec = duration_sec;
        self
    }

    /// Returns a tag value by key.
    ///
    /// Well-known keys map onto the typed fields; anything else is looked
    /// up in [`Track::metadata`].
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "title" => self.title.as_str(),
            "artist" => self.artist.as_str(),
            "album" => self.album.as_str(),
            "album_artist" => self.album_artist.as_str(),
            "genre" => self.genre.as_str(),
            _ => return self.metadata.get(key).map(String::as_str),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_track_is_flagged() {
        let track = Track::unknown(TrackId(9));
        assert!(track.is_unknown());
        assert_eq!(track.id, TrackId(9));
        assert!(track.title.is_empty());
        assert!(!Track::new(TrackId(9), "x").is_unknown());
    }

    #[test]
    fn get_reads_fields_and_metadata() {
        let mut track = Track::new(TrackId(1), "Blue in Green").with_artist("Miles Davis");
        track.metadata.insert("year".to_string(), "1959".to_string());

        assert_eq!(track.get("title"), Some("Blue in Green"));
        assert_eq!(track.get("artist"), Some("Miles Davis"));
        assert_eq!(track.get("album"), None);
        assert_eq!(track.get("year"), Some("1959"));
        assert_eq!(track.get("composer"), None);
    }

    #[test]
    fn deserialize_with_defaults() {
        let track: Track = serde_json::from_str(r#"{"id": 5, "title": "So What"}"#).unwrap();
        assert_eq!(track.id, TrackId(5));
        assert_eq!(track.title, "So What");
        assert!(track.path.is_none());
        assert!(!track.is_unknown());
    }

    #[test]
    fn track_id_display() {
        assert_eq!(TrackId(1234).to_string(), "1234");
        assert_eq!(TrackId::from(7).get(), 7);
    }
}
