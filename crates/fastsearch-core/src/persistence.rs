//! Persistence layer for the Fastsearch index.
//!
//! This module handles saving and loading the record collection to/from a
//! single binary file. The format is deliberately fixed so that files saved
//! by the existing 64-bit tools keep loading: no magic number, no version
//! tag, all integers little-endian `u64`.
//!
//! ## Index File Format
//!
//! ```text
//! record_count: u64
//! repeated record_count times:
//!   path_len: u64
//!   path_bytes: path_len raw bytes (UTF-8, not null-terminated)
//!   name_len: u64
//!   name_bytes
//!   ext_len:  u64
//!   ext_bytes
//!   size:     u64
//! ```
//!
//! Modification times are intentionally not persisted; a loaded record has
//! `modified == None`. Every length-prefixed read is bounded against the
//! remaining file size, so a truncated or tampered file produces a defined
//! [`IndexError::Corrupted`] rather than an out-of-range read.

use crate::error::{IndexError, Result};
use crate::types::FileRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Smallest possible encoded record: three empty strings plus the size field.
const MIN_RECORD_BYTES: u64 = 4 * 8;

/// Handle to an on-disk index file.
///
/// ## Example
///
/// ```rust,ignore
/// use fastsearch_core::persistence::IndexFile;
///
/// let store = IndexFile::new("/home/user/.fastsearch_index.dat");
/// store.save(index.records())?;
/// let records = store.load()?;
/// ```
pub struct IndexFile {
    path: PathBuf,
}

impl IndexFile {
    /// Create a handle for the index file at `path`. Nothing is opened until
    /// save or load.
    pub fn new(path: impl AsRef<Path>) -> Self {
        IndexFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the index file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write `records` in the fixed binary layout.
    ///
    /// The data is written to a temporary sibling file first and renamed over
    /// the target, so the target is either the old index or the complete new
    /// one, never a torn write. The target is truncated, not appended to.
    pub fn save(&self, records: &[FileRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        info!(path = %self.path.display(), records = records.len(), "Saving index");

        let temp_path = self.path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);

            writer.write_all(&(records.len() as u64).to_le_bytes())?;
            for record in records {
                write_string(&mut writer, &record.path)?;
                write_string(&mut writer, &record.name)?;
                write_string(&mut writer, &record.extension)?;
                writer.write_all(&record.size.to_le_bytes())?;
            }

            writer.flush()?;
        }

        fs::rename(&temp_path, &self.path)?;
        debug!(path = %self.path.display(), "Index saved");
        Ok(())
    }

    /// Read back the full record sequence.
    ///
    /// The whole file is decoded before returning, so the caller only swaps
    /// its in-memory state on success. Loaded records carry no modification
    /// time; the auxiliary lookup maps are the caller's to rebuild.
    pub fn load(&self) -> Result<Vec<FileRecord>> {
        if !self.path.exists() {
            return Err(IndexError::NotFound {
                path: self.path.clone(),
            });
        }

        info!(path = %self.path.display(), "Loading index");
        let data = fs::read(&self.path)?;
        let mut reader = RecordReader::new(&data);

        let count = reader.read_u64()?;
        // A record can't encode in fewer than MIN_RECORD_BYTES, so any
        // declared count beyond this bound is a lie about the file size.
        if count > (data.len() as u64).saturating_sub(8) / MIN_RECORD_BYTES {
            return Err(IndexError::corrupted(format!(
                "record count {} exceeds file size {}",
                count,
                data.len()
            )));
        }

        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let path = reader.read_string()?;
            let name = reader.read_string()?;
            // The extension is stored for layout compatibility but re-derived
            // from the name on load, keeping the name/extension invariant.
            let _extension = reader.read_string()?;
            let size = reader.read_u64()?;

            records.push(FileRecord::from_parts(path, name, size, None));
        }

        debug!(records = records.len(), "Index decoded");
        Ok(records)
    }

    /// Delete the index file if it exists.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn write_string(writer: &mut impl Write, value: &str) -> Result<()> {
    writer.write_all(&(value.len() as u64).to_le_bytes())?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Bounds-checked cursor over the raw index bytes.
struct RecordReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> RecordReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        RecordReader { data, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(len).ok_or_else(|| {
            IndexError::corrupted(format!("length {} overflows at offset {}", len, self.offset))
        })?;
        if end > self.data.len() {
            return Err(IndexError::corrupted(format!(
                "need {} bytes at offset {}, only {} in file",
                len,
                self.offset,
                self.data.len()
            )));
        }
        let slice = &self.data[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.take(8)?;
        Ok(u64::from_le_bytes(bytes.try_into().expect("8-byte slice")))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u64()?;
        let bytes = self.take(len as usize)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| IndexError::corrupted(format!("invalid UTF-8 at offset {}", self.offset)))
    }
}
