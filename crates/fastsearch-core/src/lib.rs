//! # Fastsearch Core Library
//!
//! This crate provides the indexing, search, and persistence engine for the
//! Fastsearch tool. It walks a directory tree, records per-file metadata,
//! builds lookup structures for retrieval by name, extension, or textual
//! content, and saves/restores the index as a binary file.
//!
//! ## Architecture
//!
//! - **Types** (`types`): the `FileRecord` snapshot of one file
//! - **Scanner** (`scanner`): fault-tolerant recursive directory walk
//! - **Index** (`index`): in-memory record store with the three search modes
//! - **Search** (`search`): matching helpers and the text-extension allow-list
//! - **Persistence** (`persistence`): fixed binary on-disk format
//! - **Config** (`config`): TOML configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastsearch_core::{FileIndex, IndexFile};
//! use std::path::Path;
//!
//! let mut index = FileIndex::new();
//! index.build(Path::new("/home/user/documents"));
//!
//! for record in index.search_by_extension("txt") {
//!     println!("{}", record.path);
//! }
//!
//! index.save_to(Path::new("/home/user/.fastsearch_index.dat"))?;
//! # Ok::<(), fastsearch_core::IndexError>(())
//! ```
//!
//! All engine operations are synchronous and single-writer; see
//! [`FileIndex`] for the exact contract.

pub mod config;
pub mod error;
pub mod index;
pub mod persistence;
pub mod scanner;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{IndexError, Result};
pub use index::FileIndex;
pub use persistence::IndexFile;
pub use search::{NameQuery, TEXT_EXTENSIONS};
pub use types::FileRecord;
