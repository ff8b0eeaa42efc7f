//! Library collaborators.
//!
//! - [`TrackResolver`]: the capability lists call on cache misses
//! - [`MemoryLibrary`]: an in-memory resolver for hosts and tests

mod memory;
mod resolver;

pub use memory::MemoryLibrary;
pub use resolver::TrackResolver;
