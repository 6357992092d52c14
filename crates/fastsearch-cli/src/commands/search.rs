//! Search commands - name, extension, and content lookups.

use crate::app::App;
use crate::output;
use crate::OutputFormat;
use fastsearch_core::Config;
use std::time::Instant;

/// Which of the three search operations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring match over filenames
    Name,
    /// Exact extension lookup (dot optional, case-insensitive)
    Extension,
    /// Substring match over the contents of text files
    Content,
}

/// Run a search command.
pub fn run(
    config: Config,
    mode: SearchMode,
    query: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        eprintln!("Search query must not be empty.");
        return Ok(());
    }

    let app = App::new(config);

    if app.index.is_empty() {
        eprintln!("Index is empty. Run 'fastsearch index <path>' first.");
        return Ok(());
    }

    if mode == SearchMode::Content {
        eprintln!("Searching file contents (this may take a while)...");
    }

    let start = Instant::now();
    let results = match mode {
        SearchMode::Name => app.index.search_by_name(query),
        SearchMode::Extension => app.index.search_by_extension(query),
        SearchMode::Content => app.index.search_by_content(query),
    };
    let elapsed = start.elapsed();

    let max_results = limit.unwrap_or(app.config.general.max_results);

    match format {
        OutputFormat::Text => {
            output::print_records(&results, max_results, &app.config.display);
            eprintln!(
                "Found {} results in {:.3}ms",
                results.len(),
                elapsed.as_secs_f64() * 1000.0
            );
        }
        OutputFormat::Json => {
            output::print_json(&results, max_results)?;
        }
    }

    Ok(())
}
