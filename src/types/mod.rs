//! Core types for track lists.
//!
//! This module re-exports the data types shared across the crate:
//! - [`TrackId`]: Opaque identifier stored in list sequences
//! - [`Track`]: A materialized library record
//! - [`TrackRef`]: Shared handle to a materialized track

mod track;

pub use track::{Track, TrackId, TrackRef};
