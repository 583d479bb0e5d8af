//! The `search.json` feed builder behind `neve build`.

pub mod document;

use std::fs;
use std::path::Path;

pub use document::*;

/// What a build produced, for the CLI summary line.
#[derive(Debug, Clone, Copy)]
pub struct BuildSummary {
    pub records: usize,
    pub bytes: usize,
}

/// Build `<output>/search.json` from `<input>/manifest.json`.
pub fn run_build(input_dir: &str, output_dir: &str) -> Result<BuildSummary, String> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    // 1. Read manifest
    let manifest_path = input_path.join("manifest.json");
    let manifest_content = fs::read_to_string(&manifest_path)
        .map_err(|e| format!("Failed to read manifest: {}", e))?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)
        .map_err(|e| format!("Invalid manifest JSON: {}", e))?;

    if manifest.documents.is_empty() {
        eprintln!("⚠️  Manifest lists no documents; skipping build");
        return Ok(BuildSummary {
            records: 0,
            bytes: 0,
        });
    }

    // 2. Load documents
    let mut records = Vec::with_capacity(manifest.documents.len());
    for entry in &manifest.documents {
        records.push(load_record(input_path, entry)?);
    }

    // 3. Write the feed
    fs::create_dir_all(output_path).map_err(|e| format!("Failed to create output dir: {}", e))?;

    let feed =
        serde_json::to_string(&records).map_err(|e| format!("Failed to encode feed: {}", e))?;
    let feed_path = output_path.join("search.json");
    fs::write(&feed_path, &feed)
        .map_err(|e| format!("Failed to write {}: {}", feed_path.display(), e))?;
    eprintln!("  ✓ {}", feed_path.display());

    Ok(BuildSummary {
        records: records.len(),
        bytes: feed.len(),
    })
}
