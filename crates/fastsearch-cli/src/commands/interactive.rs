//! Interactive prompt - a small command loop over the engine operations.

use crate::app::App;
use crate::output;
use fastsearch_core::Config;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the interactive prompt until the user quits or stdin closes.
pub fn run(config: Config) -> anyhow::Result<()> {
    let mut app = App::new(config);

    println!("Fastsearch interactive mode");
    println!("Type 'help' for commands or 'quit' to exit.");
    if !app.index.is_empty() {
        println!("Index loaded ({} files)", app.index.total_files());
    }
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("search> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        dispatch(&mut app, input)?;
    }

    Ok(())
}

/// Split a command line into the command word and its argument.
fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    }
}

fn dispatch(app: &mut App, input: &str) -> anyhow::Result<()> {
    let (cmd, arg) = split_command(input);

    match cmd {
        "help" => print_help(),
        "index" => {
            if arg.is_empty() {
                println!("Usage: index <directory_path>");
                return Ok(());
            }
            let path = Path::new(arg);
            if !path.is_dir() {
                println!("Directory does not exist: {}", arg);
                return Ok(());
            }
            println!("Building index for: {}", arg);
            app.index.build(path);
            println!("Indexing complete! {} files", app.index.total_files());
        }
        "search" => {
            if arg.is_empty() {
                println!("Usage: search <filename_query>");
                return Ok(());
            }
            let results = app.index.search_by_name(arg);
            output::print_records(&results, app.config.general.max_results, &app.config.display);
        }
        "ext" => {
            if arg.is_empty() {
                println!("Usage: ext <file_extension>");
                return Ok(());
            }
            let results = app.index.search_by_extension(arg);
            output::print_records(&results, app.config.general.max_results, &app.config.display);
        }
        "content" => {
            if arg.is_empty() {
                println!("Usage: content <search_text>");
                return Ok(());
            }
            println!("Searching file contents (this may take a while)...");
            let results = app.index.search_by_content(arg);
            output::print_records(&results, app.config.general.max_results, &app.config.display);
        }
        "save" => match app.save_index() {
            Ok(()) => println!("Index saved to {}", app.store.path().display()),
            Err(e) => println!("Failed to save index: {}", e),
        },
        "load" => match app.index.load_from(app.store.path()) {
            Ok(()) => println!(
                "Index loaded successfully! ({} files)",
                app.index.total_files()
            ),
            Err(e) => println!(
                "Failed to load index from {}: {}",
                app.store.path().display(),
                e
            ),
        },
        "stats" => {
            println!("Index Statistics:");
            println!("  Total files: {}", app.index.total_files());
            println!("  Index file:  {}", app.store.path().display());
            println!(
                "  Status:      {}",
                if app.index.is_complete() {
                    "Ready"
                } else {
                    "Building..."
                }
            );
        }
        _ => {
            println!("Unknown command: {}", cmd);
            println!("Type 'help' for available commands.");
        }
    }

    Ok(())
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  index <path>     - Build index for directory");
    println!("  search <query>   - Search files by name");
    println!("  ext <extension>  - Search by file extension");
    println!("  content <query>  - Search file contents (text files only)");
    println!("  save             - Save current index");
    println!("  load             - Load saved index");
    println!("  stats            - Show index statistics");
    println!("  help             - Show this help");
    println!("  quit             - Exit");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("help"), ("help", ""));
        assert_eq!(split_command("index /tmp"), ("index", "/tmp"));
        assert_eq!(
            split_command("content hello world"),
            ("content", "hello world")
        );
        assert_eq!(split_command("search  spaced  "), ("search", "spaced"));
    }
}
