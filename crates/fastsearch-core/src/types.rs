//! Core data types for Fastsearch.
//!
//! This module defines the fundamental data structures used throughout the
//! indexing and search system. These types are designed to be:
//!
//! - **Self-consistent**: `name` and `extension` are always derived from
//!   `path` at construction time and never independently mutated
//! - **Efficient**: lowercase names are pre-computed for fast
//!   case-insensitive matching

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A record representing a single regular file in the index.
///
/// This is the core data structure stored in the index. It is an immutable
/// snapshot taken at scan time; the file on disk may have changed since.
///
/// ## Design Notes
///
/// - `name` is stored separately from `path` for efficient filename-only
///   searches
/// - `name_lower` is pre-computed for fast case-insensitive matching and is
///   never serialized
/// - `extension` keeps the leading dot and original case (`".TXT"`); index
///   keys and queries are lowercased at the point of use
/// - `modified` is populated during a scan but is not part of the on-disk
///   index format, so it is `None` after a load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    /// Full path including the filename, as encountered during the walk
    pub path: String,

    /// Filename without path (e.g., "document.txt")
    pub name: String,

    /// Pre-computed lowercase filename for fast case-insensitive search
    #[serde(skip)]
    pub name_lower: String,

    /// Extension from the last `.` in the name onward, including the dot.
    /// Empty when the name has no extension.
    pub extension: String,

    /// File size in bytes; 0 when metadata was unreadable at scan time
    pub size: u64,

    /// Last modification time, if it could be read at scan time
    pub modified: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Create a record for a file encountered during a directory walk.
    ///
    /// Size and modification time are read best-effort: if the metadata is
    /// unavailable (permission error, file deleted mid-scan), the size
    /// defaults to 0 and the timestamp to `None` rather than failing.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (size, modified) = match fs::metadata(path) {
            Ok(meta) => {
                let modified = meta.modified().ok().map(DateTime::<Utc>::from);
                (meta.len(), modified)
            }
            Err(_) => (0, None),
        };

        Self::from_parts(path.to_string_lossy().into_owned(), name, size, modified)
    }

    /// Create a record from already-known fields (used when reloading a
    /// persisted index, where no filesystem access happens).
    pub fn from_parts(
        path: String,
        name: String,
        size: u64,
        modified: Option<DateTime<Utc>>,
    ) -> Self {
        let extension = extension_of(&name).to_string();
        let name_lower = name.to_lowercase();
        FileRecord {
            path,
            name,
            name_lower,
            extension,
            size,
            modified,
        }
    }

    /// The extension lowercased, still with its leading dot.
    pub fn extension_lower(&self) -> String {
        self.extension.to_lowercase()
    }

    /// Check whether the filename contains `needle_lower` (which must
    /// already be lowercased), ignoring case.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name_lower.contains(needle_lower)
    }
}

/// Extract the extension of a filename: everything from the last `.` onward,
/// including the dot. Names with no dot, and dotfiles like `.bashrc` whose
/// only dot is the first character, have no extension.
fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[pos..],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("document.txt"), ".txt");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("notes.TXT"), ".TXT");
    }

    #[test]
    fn test_from_parts_derives_name_fields() {
        let record = FileRecord::from_parts(
            "/home/user/Notes.TXT".to_string(),
            "Notes.TXT".to_string(),
            42,
            None,
        );
        assert_eq!(record.extension, ".TXT");
        assert_eq!(record.extension_lower(), ".txt");
        assert_eq!(record.name_lower, "notes.txt");
        assert_eq!(record.size, 42);
    }

    #[test]
    fn test_name_contains() {
        let record = FileRecord::from_parts(
            "/tmp/MyReadmeFile.md".to_string(),
            "MyReadmeFile.md".to_string(),
            0,
            None,
        );
        assert!(record.name_contains("readme"));
        assert!(!record.name_contains("changelog"));
    }

    #[test]
    fn test_from_path_reads_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hello.txt");
        File::create(&path).unwrap().write_all(b"hello").unwrap();

        let record = FileRecord::from_path(&path);
        assert_eq!(record.name, "hello.txt");
        assert_eq!(record.extension, ".txt");
        assert_eq!(record.size, 5);
        assert!(record.modified.is_some());
    }

    #[test]
    fn test_from_path_missing_file_defaults() {
        let record = FileRecord::from_path(Path::new("/nonexistent/ghost.txt"));
        assert_eq!(record.name, "ghost.txt");
        assert_eq!(record.size, 0);
        assert!(record.modified.is_none());
    }
}
