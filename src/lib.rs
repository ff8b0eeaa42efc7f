//! lofi-tracklist: ordered track lists with an LRU cache of resolved tracks.
//!
//! This library provides the list type behind queues, playlists and search
//! results. A list stores only track ids; the tracks themselves are
//! resolved through the host library on first read and kept in a small
//! per-list LRU cache.
//!
//! # Modules
//!
//! - [`tracklist`]: The list, its read/edit capability traits and a shared handle
//! - [`cache`]: LRU cache of materialized tracks
//! - [`library`]: Resolver capability and an in-memory library
//! - [`types`]: Core data types (TrackId, Track)
//! - [`config`]: Runtime configuration (TrackListConfig)
//! - [`error`]: Error types and codes (TrackListError, ErrorCode)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use lofi_tracklist::{
//!     MemoryLibrary, Track, TrackId, TrackList, TrackListEditor, TrackListView,
//! };
//!
//! let library = Arc::new(MemoryLibrary::from_tracks(vec![
//!     Track::new(TrackId(1), "So What"),
//!     Track::new(TrackId(2), "Freddie Freeloader"),
//! ]));
//!
//! let mut queue = TrackList::new(library);
//! queue.add(TrackId(1));
//! queue.add(TrackId(2));
//! queue.move_track(1, 0).unwrap();
//!
//! assert_eq!(queue.object_at(0).unwrap().title, "Freddie Freeloader");
//! assert!(queue.object_at(2).is_err());
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod library;
pub mod tracklist;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use cache::{CacheStats, TrackCache};
pub use config::TrackListConfig;
pub use error::{ErrorCode, Result, TrackListError};
pub use library::{MemoryLibrary, TrackResolver};
pub use tracklist::{SharedTrackList, TrackList, TrackListEditor, TrackListView};
pub use types::{Track, TrackId, TrackRef};
