//! Feed-builder round trips in a temporary directory.

#![cfg(feature = "cli")]

use std::fs;

use neve::build::run_build;
use neve::width::{visual_length, SUMMARY_BUDGET};
use neve::{SearchIndex, SearchRecord};
use tempfile::TempDir;

fn write_content_dir(manifest: &str, files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("manifest.json"), manifest).unwrap();
    for (name, body) in files {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

#[test]
fn build_produces_a_loadable_feed() {
    let input = write_content_dir(
        r#"{"documents": [
            {"title": "Hello World", "url": "/posts/hello/", "file": "hello.txt"},
            {"title": "雪夜随笔", "url": "/posts/snow/", "file": "snow.txt",
             "excerpt": "手写的摘要"}
        ]}"#,
        &[
            ("hello.txt", "The first post.\n\nIt has two paragraphs."),
            ("snow.txt", "下雪的晚上写的一些文字，很长很长的一篇。"),
        ],
    );
    let output = TempDir::new().unwrap();

    let summary = run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap();
    assert_eq!(summary.records, 2);

    let feed = fs::read_to_string(output.path().join("search.json")).unwrap();
    let records: Vec<SearchRecord> = serde_json::from_str(&feed).unwrap();
    assert_eq!(records.len(), 2);

    // Whitespace collapsed, hand-written excerpt preserved.
    assert_eq!(records[0].content, "The first post. It has two paragraphs.");
    assert_eq!(records[1].excerpt, "手写的摘要");

    // The built feed is immediately searchable.
    let index = SearchIndex::build(records);
    assert!(!index.search("hello").is_empty());
}

#[test]
fn derived_excerpts_respect_the_summary_budget() {
    let long_body = "很长的一篇文章内容".repeat(20);
    let input = write_content_dir(
        r#"{"documents": [
            {"title": "Long", "url": "/posts/long/", "file": "long.txt"}
        ]}"#,
        &[("long.txt", &long_body)],
    );
    let output = TempDir::new().unwrap();

    run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap();

    let feed = fs::read_to_string(output.path().join("search.json")).unwrap();
    let records: Vec<SearchRecord> = serde_json::from_str(&feed).unwrap();
    // Marker char included, the excerpt stays within a summary's width.
    assert!(visual_length(&records[0].excerpt) <= SUMMARY_BUDGET + 0.5);
    assert!(records[0].excerpt.ends_with('…'));
}

#[test]
fn missing_document_files_carry_the_path_in_the_error() {
    let input = write_content_dir(
        r#"{"documents": [
            {"title": "Ghost", "url": "/posts/ghost/", "file": "ghost.txt"}
        ]}"#,
        &[],
    );
    let output = TempDir::new().unwrap();

    let err = run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap_err();
    assert!(err.contains("ghost.txt"));
}

#[test]
fn malformed_manifest_is_an_error_not_a_panic() {
    let input = write_content_dir("not json at all", &[]);
    let output = TempDir::new().unwrap();

    let err = run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    )
    .unwrap_err();
    assert!(err.contains("manifest"));
}
