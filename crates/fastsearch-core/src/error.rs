//! Error types for Fastsearch core operations.
//!
//! This module defines well-structured error types using `thiserror` for
//! library-level errors, while higher-level code can use `anyhow` for
//! convenient error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using IndexError
pub type Result<T> = std::result::Result<T, IndexError>;

/// Core error types for Fastsearch operations.
///
/// Recoverable conditions (an unreadable subtree during a scan, an unreadable
/// file during content search, missing metadata) are handled in place and
/// never reach this type. What remains are the persistence and configuration
/// failures a caller has to be told about.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The index file is missing or could not be found
    #[error("index not found at {path}")]
    NotFound { path: PathBuf },

    /// The index file exists but is truncated or otherwise unreadable
    #[error("index is corrupted: {reason}")]
    Corrupted { reason: String },

    /// Configuration file parsing failed
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IndexError {
    /// Create a corruption error
    pub fn corrupted(reason: impl Into<String>) -> Self {
        IndexError::Corrupted {
            reason: reason.into(),
        }
    }

    /// Returns true if this error means the index must be rebuilt from a scan
    pub fn requires_rebuild(&self) -> bool {
        matches!(
            self,
            IndexError::NotFound { .. } | IndexError::Corrupted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_rebuild() {
        let err = IndexError::NotFound {
            path: PathBuf::from("/test"),
        };
        assert!(err.requires_rebuild());

        let err = IndexError::corrupted("truncated record");
        assert!(err.requires_rebuild());

        let err = IndexError::Config {
            reason: "bad toml".to_string(),
        };
        assert!(!err.requires_rebuild());
    }
}
