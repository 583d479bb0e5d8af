use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::SearchRecord;
use crate::width::{truncate_visual, SUMMARY_BUDGET};

/// The builder's input manifest, `manifest.json` in the content directory.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub documents: Vec<ManifestEntry>,
}

/// One post to index: display metadata plus the file holding its text.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub title: String,
    pub url: String,
    /// Path to the post's plain text, relative to the manifest.
    pub file: String,
    /// Hand-written summary; derived from the content when absent.
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Read a manifest entry's file and assemble its feed record.
///
/// Whitespace in the content is collapsed (the feed is for matching, not
/// display) and a missing excerpt is derived by visually truncating the
/// content to the summary budget.
pub fn load_record(input_dir: &Path, entry: &ManifestEntry) -> Result<SearchRecord, String> {
    let path = input_dir.join(&entry.file);
    let raw = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let content = collapse_whitespace(&raw);

    let excerpt = match &entry.excerpt {
        Some(summary) => summary.clone(),
        None => truncate_visual(&content, SUMMARY_BUDGET),
    };

    Ok(SearchRecord {
        title: entry.title.clone(),
        content,
        excerpt,
        url: entry.url.clone(),
    })
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
