//! Result rendering: human-readable sizes and numbered result listings.

use fastsearch_core::config::DisplayConfig;
use fastsearch_core::FileRecord;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with 1024-based units and one decimal place
/// (1536 bytes -> "1.5 KB").
pub fn format_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

/// Print a numbered result listing, capped at `max_results`.
pub fn print_records(records: &[&FileRecord], max_results: usize, display: &DisplayConfig) {
    if records.is_empty() {
        println!("No results found");
        return;
    }

    print!("Found {} results", records.len());
    if records.len() > max_results {
        print!(" (showing first {})", max_results);
    }
    println!(":\n");

    for (i, record) in records.iter().take(max_results).enumerate() {
        println!("{:3}. {}", i + 1, record.name);
        println!("     Path: {}", record.path);
        if display.show_size {
            println!("     Size: {}", format_size(record.size));
        }
        if display.show_modified {
            if let Some(modified) = record.modified {
                println!("     Modified: {}", modified.format("%Y-%m-%d %H:%M:%S"));
            }
        }
        println!();
    }
}

/// Print results as a JSON array, capped at `max_results`.
pub fn print_json(records: &[&FileRecord], max_results: usize) -> anyhow::Result<()> {
    let capped: Vec<_> = records.iter().take(max_results).collect();
    println!("{}", serde_json::to_string_pretty(&capped)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.0 B");
        assert_eq!(format_size(512), "512.0 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn test_format_size_caps_at_tb() {
        let huge = 1024u64.pow(5) * 3;
        assert_eq!(format_size(huge), "3072.0 TB");
    }
}
