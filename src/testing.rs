//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::SearchRecord;

/// Create a test record with derived content and excerpt.
pub fn make_record(id: usize, title: &str) -> SearchRecord {
    SearchRecord {
        title: title.to_string(),
        content: format!("{} body text number {}", title, id),
        excerpt: format!("Excerpt for {}", title),
        url: format!("/posts/{}/", id),
    }
}

/// Create a test record with explicit fields.
pub fn make_record_with(title: &str, content: &str, excerpt: &str, url: &str) -> SearchRecord {
    SearchRecord {
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_record() {
        let record = make_record(42, "Test Title");
        assert_eq!(record.title, "Test Title");
        assert_eq!(record.url, "/posts/42/");
        assert!(record.content.contains("42"));
    }
}
