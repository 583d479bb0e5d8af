use clap::Parser;

use neve::build::run_build;
use neve::width::visual_length;
use neve::SearchRecord;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => match run_build(&input, &output) {
            Ok(summary) => {
                eprintln!();
                eprintln!("✅ Build complete");
                eprintln!(
                    "   {} records │ {}",
                    summary.records,
                    format_bytes(summary.bytes)
                );
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Commands::Inspect { file } => {
            if let Err(e) = inspect_feed(&file) {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Display a feed's shape: record count and per-field size totals.
fn inspect_feed(path: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let records: Vec<SearchRecord> =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid feed JSON in {}: {}", path, e))?;

    let title_bytes: usize = records.iter().map(|r| r.title.len()).sum();
    let content_bytes: usize = records.iter().map(|r| r.content.len()).sum();
    let excerpt_bytes: usize = records.iter().map(|r| r.excerpt.len()).sum();
    let widest_title = records
        .iter()
        .map(|r| visual_length(&r.title))
        .fold(0.0f64, f64::max);

    let pretty = atty::is(atty::Stream::Stdout);
    if pretty {
        println!("┌──────────────────────────────────────────────┐");
        println!("│ {:<44} │", path);
        println!("├──────────────────────────────────────────────┤");
        println!("│ records        {:>29} │", records.len());
        println!("│ title bytes    {:>29} │", format_bytes(title_bytes));
        println!("│ content bytes  {:>29} │", format_bytes(content_bytes));
        println!("│ excerpt bytes  {:>29} │", format_bytes(excerpt_bytes));
        println!("│ widest title   {:>29.1} │", widest_title);
        println!("└──────────────────────────────────────────────┘");
    } else {
        println!("records: {}", records.len());
        println!("title bytes: {}", title_bytes);
        println!("content bytes: {}", content_bytes);
        println!("excerpt bytes: {}", excerpt_bytes);
        println!("widest title: {:.1}", widest_title);
    }

    Ok(())
}

fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
