//! Status command - show index status and statistics.

use crate::app::App;
use fastsearch_core::Config;

/// Run the status command.
pub fn run(config: Config) -> anyhow::Result<()> {
    let app = App::new(config);

    println!("Fastsearch Index Status");
    println!("=======================");
    println!();

    if app.index.is_empty() {
        println!("Index is empty. Run 'fastsearch index <path>' to build it.");
        println!();
        println!("Index file: {}", app.store.path().display());
        return Ok(());
    }

    let total_size: u64 = app.index.records().iter().map(|r| r.size).sum();

    println!("  Total files: {}", app.index.total_files());
    println!(
        "  Total size:  {}",
        crate::output::format_size(total_size)
    );
    println!(
        "  Status:      {}",
        if app.index.is_complete() {
            "Ready"
        } else {
            "Building..."
        }
    );
    println!("  Index file:  {}", app.store.path().display());

    Ok(())
}
