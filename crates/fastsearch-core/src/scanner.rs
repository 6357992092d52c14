//! Recursive directory scanning.
//!
//! The scanner walks a directory tree sequentially and produces one
//! [`FileRecord`] per regular file. It is deliberately fault-tolerant: a
//! subtree that cannot be read is logged and skipped, and a file whose
//! metadata cannot be read still produces a record with a zero size. A single
//! bad directory never aborts the walk.
//!
//! Symlinks get platform-default treatment: entries are classified by their
//! own file type, so a symlink is neither recursed into nor recorded.

use crate::types::FileRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Recursively enumerate the regular files under `root`.
///
/// Records are produced in directory-traversal order. The scanner mutates no
/// shared state; the caller decides how to store the records.
pub fn scan(root: &Path) -> Vec<FileRecord> {
    let mut records = Vec::new();
    scan_dir(root, &mut records);
    debug!(root = %root.display(), files = records.len(), "Scan complete");
    records
}

fn scan_dir(dir: &Path, records: &mut Vec<FileRecord>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "Skipping entry with unknown type");
                continue;
            }
        };

        let path = entry.path();
        if file_type.is_dir() {
            scan_dir(&path, records);
        } else if file_type.is_file() {
            records.push(FileRecord::from_path(&path));
        }
    }
}
