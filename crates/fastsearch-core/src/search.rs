//! Search helpers for Fastsearch.
//!
//! This module provides the matching logic behind the three search modes:
//!
//! - Substring matching over filenames (case-insensitive)
//! - Extension normalization for exact extension lookups
//! - Line-by-line content matching, restricted to known text extensions
//!
//! All matching is substring or exact equality; there is no ranking, no fuzzy
//! matching, and no pattern syntax.

use crate::types::FileRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::debug;

/// Extensions eligible for content search. Only files whose extension is in
/// this set (compared case-insensitively) are ever opened and read.
pub const TEXT_EXTENSIONS: &[&str] = &[".txt", ".cpp", ".h", ".py", ".js", ".html"];

/// A compiled filename query.
///
/// The pattern is lowercased once so that each record comparison is a plain
/// substring check against the record's pre-computed lowercase name.
#[derive(Debug, Clone)]
pub struct NameQuery {
    pattern_lower: String,
}

impl NameQuery {
    /// Create a case-insensitive substring query.
    pub fn new(pattern: &str) -> Self {
        NameQuery {
            pattern_lower: pattern.to_lowercase(),
        }
    }

    /// Check whether a record's filename contains the pattern.
    pub fn matches(&self, record: &FileRecord) -> bool {
        record.name_contains(&self.pattern_lower)
    }
}

/// Normalize an extension query for exact lookup: lowercase it and prefix a
/// leading dot when absent (`"txt"` and `".TXT"` both become `".txt"`).
pub fn normalize_extension(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Check whether a record is eligible for content search.
pub fn is_text_record(record: &FileRecord) -> bool {
    let ext = record.extension_lower();
    TEXT_EXTENSIONS.contains(&ext.as_str())
}

/// Check whether the file at `path` contains `needle_lower` (which must
/// already be lowercased) on any line, ignoring case.
///
/// The file is read line by line and the search stops at the first matching
/// line. Files that cannot be opened or read (permissions, deleted since the
/// scan, non-UTF-8 content) simply do not match; no error is propagated.
pub fn file_contains(path: &str, needle_lower: &str) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path, error = %e, "Skipping unreadable file in content search");
            return false;
        }
    };

    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => {
                if line.to_lowercase().contains(needle_lower) {
                    return true;
                }
            }
            Err(e) => {
                debug!(path = %path, error = %e, "Stopping content read on error");
                return false;
            }
        }
    }

    false
}
