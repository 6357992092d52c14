//! Index command - build the file index and save it.

use crate::app::App;
use fastsearch_core::Config;
use std::path::Path;
use std::time::Instant;

/// Run the index command.
pub fn run(config: Config, path: &Path) -> anyhow::Result<()> {
    if !path.is_dir() {
        eprintln!("Directory does not exist: {}", path.display());
        return Ok(());
    }

    let mut app = App::new(config);

    println!("Building index for: {}", path.display());

    let start = Instant::now();
    app.rebuild_index(path)?;
    let elapsed = start.elapsed();

    println!(
        "Indexing complete! Processed {} files in {}ms",
        app.index.total_files(),
        elapsed.as_millis()
    );
    println!("Index saved to {}", app.store.path().display());

    Ok(())
}
