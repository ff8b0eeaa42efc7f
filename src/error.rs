//! Error types for track lists.
//!
//! Defines the error codes and error type returned by list operations and
//! by library collaborators.

use std::fmt;

use crate::types::TrackId;

/// Error codes identifying why a track list operation was not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Index does not address an entry in the list.
    /// Trigger: index >= count (or > count for insert).
    OutOfRange,

    /// Track identifier is unknown to the library.
    /// Trigger: resolver lookup for a deleted or never-stored track.
    NotFound,

    /// Failed to load track records into a library.
    /// Trigger: unreadable file or malformed JSON.
    LibraryLoadFailed,

    /// Configuration value is outside its valid range.
    InvalidConfig,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::LibraryLoadFailed => "LIBRARY_LOAD_FAILED",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::OutOfRange => "Index is outside the bounds of the track list",
            ErrorCode::NotFound => "Track identifier is not known to the library",
            ErrorCode::LibraryLoadFailed => "Failed to load track records into the library",
            ErrorCode::InvalidConfig => "Track list configuration is invalid",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::OutOfRange => {
                "Re-read count() before indexing; the list may have been edited concurrently"
            }
            ErrorCode::NotFound => {
                "The track may have been removed from the library; refresh the list \
                 or call clear_cache() if records changed"
            }
            ErrorCode::LibraryLoadFailed => {
                "Check that the file exists and contains a JSON array of track objects"
            }
            ErrorCode::InvalidConfig => {
                "Set LOFI_TRACKLIST_CACHE_SIZE to a value between 1 and 10000"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for track list operations.
#[derive(Debug)]
pub struct TrackListError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TrackListError {
    /// Creates a new TrackListError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new TrackListError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an OUT_OF_RANGE error.
    pub fn out_of_range(index: usize, count: usize) -> Self {
        Self::new(
            ErrorCode::OutOfRange,
            format!("Index {} out of range for list of {} tracks", index, count),
        )
    }

    /// Creates a NOT_FOUND error.
    pub fn not_found(id: TrackId) -> Self {
        Self::new(ErrorCode::NotFound, format!("Track {} not found", id))
    }

    /// Creates a LIBRARY_LOAD_FAILED error.
    pub fn library_load_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::LibraryLoadFailed,
            format!("Failed to load library: {}", reason.into()),
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid configuration: {}", reason.into()),
        )
    }

    /// Returns true if this error reports an invalid index.
    pub fn is_out_of_range(&self) -> bool {
        self.code == ErrorCode::OutOfRange
    }
}

impl fmt::Display for TrackListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for TrackListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using TrackListError.
pub type Result<T> = std::result::Result<T, TrackListError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::OutOfRange.as_str(), "OUT_OF_RANGE");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::LibraryLoadFailed.as_str(), "LIBRARY_LOAD_FAILED");
        assert_eq!(ErrorCode::InvalidConfig.as_str(), "INVALID_CONFIG");
    }

    #[test]
    fn error_code_recovery_hints_not_empty() {
        assert!(!ErrorCode::OutOfRange.recovery_hint().is_empty());
        assert!(!ErrorCode::NotFound.recovery_hint().is_empty());
        assert!(!ErrorCode::LibraryLoadFailed.recovery_hint().is_empty());
        assert!(!ErrorCode::InvalidConfig.recovery_hint().is_empty());
    }

    #[test]
    fn error_code_descriptions_distinct() {
        let codes = [
            ErrorCode::OutOfRange,
            ErrorCode::NotFound,
            ErrorCode::LibraryLoadFailed,
            ErrorCode::InvalidConfig,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.description().is_empty());
            for b in &codes[i + 1..] {
                assert_ne!(a.description(), b.description());
            }
        }
        assert!(ErrorCode::OutOfRange.description().contains("bounds"));
    }

    #[test]
    fn out_of_range_display() {
        let err = TrackListError::out_of_range(7, 3);
        assert!(err.is_out_of_range());
        assert!(err.to_string().contains("OUT_OF_RANGE"));
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains("Recovery:"));
    }

    #[test]
    fn not_found_mentions_id() {
        let err = TrackListError::not_found(TrackId(42));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("42"));
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn with_source_exposes_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = TrackListError::with_source(ErrorCode::LibraryLoadFailed, "read failed", io);
        assert!(err.source().is_some());
    }
}
