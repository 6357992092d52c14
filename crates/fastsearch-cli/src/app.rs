//! Application state management.

use fastsearch_core::{Config, FileIndex, IndexFile};
use std::path::Path;
use tracing::{info, warn};

/// Shared application state.
pub struct App {
    /// Configuration
    pub config: Config,

    /// The file index
    pub index: FileIndex,

    /// Index persistence
    pub store: IndexFile,
}

impl App {
    /// Create a new application instance, loading an existing saved index
    /// when one is present.
    pub fn new(config: Config) -> Self {
        let store = IndexFile::new(config.index_path());
        let mut index = FileIndex::new();

        if store.exists() {
            match index.load_from(store.path()) {
                Ok(()) => info!(
                    path = %store.path().display(),
                    files = index.total_files(),
                    "Loaded existing index"
                ),
                Err(e) => warn!(
                    path = %store.path().display(),
                    error = %e,
                    "Failed to load existing index, starting empty"
                ),
            }
        }

        App {
            config,
            index,
            store,
        }
    }

    /// Save the current index to disk.
    pub fn save_index(&self) -> anyhow::Result<()> {
        self.index.save_to(self.store.path())?;
        Ok(())
    }

    /// Rebuild the index from a directory scan and persist it.
    pub fn rebuild_index(&mut self, root: &Path) -> anyhow::Result<()> {
        self.index.build(root);
        self.save_index()?;
        Ok(())
    }
}
