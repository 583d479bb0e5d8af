// Copyright 2026-present Qiao Wen
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search feature.
//!
//! These types cross two boundaries: `SearchRecord` is the wire format of
//! the `search.json` feed (and of the builder CLI's output), `ScoredHit`
//! is what a query hands back to whoever renders results.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ScoredHit**: `index < records.len()` of the index that produced it.
//!   Hits are only ever minted by [`crate::index::SearchIndex::search`],
//!   which guarantees this by construction.
//! - **SearchRecord**: immutable once loaded. The feed is fetched once per
//!   page load and held for the page's lifetime; nothing mutates it.

use serde::{Deserialize, Serialize};

/// One indexed document: its searchable fields plus its link target.
///
/// This is the element type of the `search.json` array. `title` and `url`
/// are required; `content` and `excerpt` tolerate absence so a feed
/// produced by an older template still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    pub url: String,
}

/// Which field of a record a match landed in.
///
/// Ordering of the variants mirrors the scoring hierarchy: a title hit
/// always outranks an excerpt hit, which always outranks a content hit.
/// See [`crate::scoring`] for the weights that enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Title,
    Excerpt,
    Content,
}

impl FieldKind {
    /// All fields, in scoring order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Title, FieldKind::Excerpt, FieldKind::Content];
}

/// A ranked query result with score reporting enabled.
///
/// `index` points back into the record collection the index was built
/// from. `distance` is the best (smallest) matching field distance on the
/// 0..1 scale where 0 means an exact match and 1 means nothing shared;
/// `score` is the field-weighted total used for ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredHit {
    pub index: usize,
    pub score: f64,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_from_feed_json() {
        let json = r#"{
            "title": "About Me",
            "content": "hello from the about page",
            "excerpt": "hello",
            "url": "/about/"
        }"#;
        let record: SearchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "About Me");
        assert_eq!(record.url, "/about/");
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let json = r#"{"title": "Bare", "url": "/bare/"}"#;
        let record: SearchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.content, "");
        assert_eq!(record.excerpt, "");
    }

    #[test]
    fn hit_serializes_camel_case() {
        let hit = ScoredHit {
            index: 3,
            score: 60.0,
            distance: 0.0,
        };
        let json = serde_json::to_string(&hit).unwrap();
        assert!(json.contains("\"index\":3"));
        assert!(json.contains("\"distance\":0.0"));
    }
}
