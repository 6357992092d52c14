//! In-memory file index.
//!
//! `FileIndex` is the central data structure: it owns the full collection of
//! [`FileRecord`]s plus two auxiliary lookup maps keyed by lowercased
//! filename and lowercased extension. A record's position in `records` is its
//! stable identifier for the lifetime of one build/load cycle; both maps
//! store these positions.
//!
//! ## Concurrency contract
//!
//! The index is single-writer, synchronous. `build`, `load_from`, and
//! `save_to` take the index by reference and must not run concurrently with
//! each other or with searches; all mutating operations take `&mut self`, so
//! the borrow checker enforces this within one instance. Content search can
//! take noticeably long on large text-file sets and blocks until done.

use crate::error::Result;
use crate::scanner;
use crate::search::{self, NameQuery};
use crate::types::FileRecord;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};

/// The in-memory index over one directory tree.
///
/// ## Example
///
/// ```rust,no_run
/// use fastsearch_core::FileIndex;
/// use std::path::Path;
///
/// let mut index = FileIndex::new();
/// index.build(Path::new("/home/user/projects"));
///
/// for record in index.search_by_name("readme") {
///     println!("{}", record.path);
/// }
/// ```
#[derive(Debug, Default)]
pub struct FileIndex {
    /// All file records, in scan/load order
    records: Vec<FileRecord>,

    /// Lowercased filename -> record positions (insertion order preserved;
    /// several files may share a name)
    by_name: HashMap<String, Vec<usize>>,

    /// Lowercased extension (with leading dot) -> record positions
    by_extension: HashMap<String, Vec<usize>>,

    /// Number of files processed so far in the current build/load
    files_processed: usize,

    /// True once the index reflects a fully finished build or load
    complete: bool,
}

impl FileIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the index.
    pub fn total_files(&self) -> usize {
        self.records.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of files processed so far in the current build or load.
    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    /// True once the index reflects a fully finished build or load, never a
    /// partial state.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// All records in stored order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Reset the index to its empty state.
    pub fn clear(&mut self) {
        self.records.clear();
        self.by_name.clear();
        self.by_extension.clear();
        self.files_processed = 0;
        self.complete = false;
    }

    /// Build the index by scanning the directory tree under `root`.
    ///
    /// Any previous contents are discarded first. Unreadable subtrees are
    /// skipped by the scanner, so build itself cannot fail; after it returns
    /// the index holds one consistent snapshot of the tree at scan time.
    #[instrument(skip(self))]
    pub fn build(&mut self, root: &Path) {
        self.clear();

        info!(root = %root.display(), "Building index");
        let start = Instant::now();

        for record in scanner::scan(root) {
            self.insert(record);
        }

        self.complete = true;
        info!(
            files = self.records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Indexing complete"
        );
    }

    /// Append one record and register it in both lookup maps.
    ///
    /// This is the single indexing step shared by [`build`](Self::build) and
    /// [`load_from`](Self::load_from): the auxiliary maps are always rebuilt
    /// from the records, never persisted.
    fn insert(&mut self, record: FileRecord) {
        let position = self.records.len();

        self.by_name
            .entry(record.name_lower.clone())
            .or_default()
            .push(position);

        if !record.extension.is_empty() {
            self.by_extension
                .entry(record.extension_lower())
                .or_default()
                .push(position);
        }

        self.records.push(record);
        self.files_processed += 1;
    }

    /// Case-insensitive substring search over filenames.
    ///
    /// This is a linear scan over all records rather than a `by_name` lookup,
    /// because the contract is substring containment, not exact-key equality.
    /// Results come back in stored order.
    pub fn search_by_name(&self, query: &str) -> Vec<&FileRecord> {
        let query = NameQuery::new(query);
        self.records.iter().filter(|r| query.matches(r)).collect()
    }

    /// Exact extension lookup, case-insensitive and dot-normalizing:
    /// `"txt"`, `".txt"`, and `"TXT"` all find the same records.
    pub fn search_by_extension(&self, extension: &str) -> Vec<&FileRecord> {
        let key = search::normalize_extension(extension);
        match self.by_extension.get(&key) {
            Some(positions) => positions.iter().map(|&i| &self.records[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Case-insensitive substring search over file contents.
    ///
    /// Only files whose extension is in [`search::TEXT_EXTENSIONS`] are ever
    /// opened. Each candidate is read line by line and matches as soon as one
    /// line contains the query; unreadable files are silently skipped. This
    /// is the slowest operation, proportional to the total bytes of all
    /// candidate files, and blocks until done.
    pub fn search_by_content(&self, query: &str) -> Vec<&FileRecord> {
        let needle_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| search::is_text_record(r) && search::file_contains(&r.path, &needle_lower))
            .collect()
    }

    /// Save the index to the file at `path`.
    ///
    /// The target is created or truncated, never appended to. See
    /// [`persistence`](crate::persistence) for the on-disk layout.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        crate::persistence::IndexFile::new(path).save(&self.records)
    }

    /// Load the index from the file at `path`, replacing the current
    /// contents on success.
    ///
    /// The file is fully decoded before any in-memory state changes, so a
    /// missing or corrupt file leaves the index exactly as it was.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        let records = crate::persistence::IndexFile::new(path).load()?;

        self.clear();
        for record in records {
            self.insert(record);
        }
        self.complete = true;

        info!(path = %path.display(), files = self.records.len(), "Index loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn touch(path: &Path, contents: &str) {
        File::create(path)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();
    }

    /// Directory fixture from the mixed-content scenario: one text file, one
    /// script, one binary image.
    fn scenario_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("notes.TXT"), "Hello World\n");
        touch(&temp_dir.path().join("script.py"), "import os\n");
        touch(&temp_dir.path().join("image.png"), "not really a png");
        temp_dir
    }

    #[test]
    fn test_build_counts_files() {
        let temp_dir = scenario_dir();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        touch(&temp_dir.path().join("sub").join("extra.txt"), "x");

        let mut index = FileIndex::new();
        assert!(!index.is_complete());

        index.build(temp_dir.path());
        assert!(index.is_complete());
        assert_eq!(index.total_files(), 4);
        assert_eq!(index.files_processed(), 4);
    }

    #[test]
    fn test_rebuild_resets_previous_contents() {
        let temp_dir = scenario_dir();
        let mut index = FileIndex::new();
        index.build(temp_dir.path());
        assert_eq!(index.total_files(), 3);

        let other = TempDir::new().unwrap();
        touch(&other.path().join("solo.txt"), "only one");

        index.build(other.path());
        assert_eq!(index.total_files(), 1);
        assert!(index.search_by_name("notes").is_empty());
    }

    #[test]
    fn test_search_by_name_substring() {
        let temp_dir = scenario_dir();
        let mut index = FileIndex::new();
        index.build(temp_dir.path());

        let results = index.search_by_name("script");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "script.py");

        // Case-insensitive in both directions
        let results = index.search_by_name("NOTES");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "notes.TXT");

        assert!(index.search_by_name("missing").is_empty());
    }

    #[test]
    fn test_search_by_extension_normalization() {
        let temp_dir = scenario_dir();
        let mut index = FileIndex::new();
        index.build(temp_dir.path());

        let with_dot = index.search_by_extension(".txt");
        let without_dot = index.search_by_extension("txt");
        let upper = index.search_by_extension("TXT");

        assert_eq!(with_dot.len(), 1);
        assert_eq!(with_dot[0].name, "notes.TXT");
        assert_eq!(
            with_dot.iter().map(|r| &r.path).collect::<Vec<_>>(),
            without_dot.iter().map(|r| &r.path).collect::<Vec<_>>()
        );
        assert_eq!(
            with_dot.iter().map(|r| &r.path).collect::<Vec<_>>(),
            upper.iter().map(|r| &r.path).collect::<Vec<_>>()
        );

        let png = index.search_by_extension("png");
        assert_eq!(png.len(), 1);
        assert_eq!(png[0].name, "image.png");
    }

    #[test]
    fn test_search_by_content_scenario() {
        let temp_dir = scenario_dir();
        let mut index = FileIndex::new();
        index.build(temp_dir.path());

        let hello = index.search_by_content("hello");
        assert_eq!(hello.len(), 1);
        assert_eq!(hello[0].name, "notes.TXT");

        let imports = index.search_by_content("import");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].name, "script.py");
    }

    #[test]
    fn test_content_search_respects_allow_list() {
        let temp_dir = TempDir::new().unwrap();
        // Content matches, but .png is not a text extension
        touch(&temp_dir.path().join("fake.png"), "needle inside\n");
        touch(&temp_dir.path().join("real.txt"), "needle inside\n");

        let mut index = FileIndex::new();
        index.build(temp_dir.path());

        let results = index.search_by_content("needle");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "real.txt");
    }

    #[test]
    fn test_results_in_stored_order() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("aaa_match.txt"), "");
        touch(&temp_dir.path().join("bbb_match.txt"), "");
        touch(&temp_dir.path().join("ccc_match.txt"), "");

        let mut index = FileIndex::new();
        index.build(temp_dir.path());

        let by_name = index.search_by_name("match");
        let by_ext = index.search_by_extension("txt");
        let stored: Vec<&String> = index.records().iter().map(|r| &r.path).collect();

        assert_eq!(by_name.iter().map(|r| &r.path).collect::<Vec<_>>(), stored);
        assert_eq!(by_ext.iter().map(|r| &r.path).collect::<Vec<_>>(), stored);
    }

    #[test]
    fn test_duplicate_names_across_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        fs::create_dir(temp_dir.path().join("b")).unwrap();
        touch(&temp_dir.path().join("a").join("readme.md"), "a");
        touch(&temp_dir.path().join("b").join("readme.md"), "b");

        let mut index = FileIndex::new();
        index.build(temp_dir.path());

        assert_eq!(index.search_by_name("readme").len(), 2);
        assert_eq!(index.search_by_extension("md").len(), 2);
    }

    #[test]
    fn test_extensionless_files_not_in_extension_map() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("Makefile"), "all:\n");

        let mut index = FileIndex::new();
        index.build(temp_dir.path());

        assert_eq!(index.total_files(), 1);
        assert_eq!(index.search_by_name("makefile").len(), 1);
        assert!(index.search_by_extension("makefile").is_empty());
    }

    #[test]
    fn test_load_failure_leaves_prior_state() {
        let temp_dir = scenario_dir();
        let mut index = FileIndex::new();
        index.build(temp_dir.path());
        let before = index.total_files();

        let missing = temp_dir.path().join("no_such_index.dat");
        assert!(index.load_from(&missing).is_err());

        assert_eq!(index.total_files(), before);
        assert!(index.is_complete());
        assert_eq!(index.search_by_name("notes").len(), 1);
    }
}
