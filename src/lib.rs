//! Client-side enhancement engine for static blogs.
//!
//! Everything the theme's pages need beyond markup and CSS: fuzzy search
//! over a precomputed feed, light/dark theming, a scroll-spied table of
//! contents, scroll-driven chrome, copy-link throttling, list-text
//! truncation, and the snowfall. The decision logic is plain Rust,
//! testable natively; the `wasm` feature wraps it in browser controllers.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  types.rs  │────▶│  index.rs   │────▶│ scoring.rs  │
//! │ (Search-   │     │ (build,     │     │ (weights,   │
//! │  Record)   │     │  search)    │     │  threshold) │
//! └────────────┘     └─────────────┘     └─────────────┘
//!       │                   │ via matcher.rs (strsim seam)
//!       ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │ width / cooldown / toc / scroll / theme / snow      │
//! │          (pure page-behavior models)                │
//! └─────────────────────────────────────────────────────┘
//!       │                                 │
//!       ▼ cli feature                     ▼ wasm feature
//! ┌────────────┐                  ┌──────────────────┐
//! │  build/    │                  │  wasm/ (web-sys  │
//! │ (feed CLI) │                  │   controllers)   │
//! └────────────┘                  └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use neve::{SearchIndex, SearchRecord};
//!
//! let records = vec![SearchRecord {
//!     title: "Hello".into(),
//!     content: "first post".into(),
//!     excerpt: "hi".into(),
//!     url: "/posts/hello/".into(),
//! }];
//! let index = SearchIndex::build(records);
//! let hits = index.search("hello");
//! assert_eq!(hits[0].index, 0);
//! ```

// Module declarations
pub mod cooldown;
mod index;
pub mod matcher;
pub mod scoring;
pub mod scroll;
pub mod snow;
pub mod theme;
pub mod toc;
mod types;
mod utils;
pub mod width;

#[cfg(feature = "cli")]
pub mod build;

#[cfg(feature = "wasm")]
mod wasm;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use cooldown::{ClickOutcome, CooldownGate};
pub use index::SearchIndex;
pub use matcher::{EditDistance, JaroWinkler, Matcher};
pub use scoring::{MATCH_THRESHOLD, RESULT_LIMIT};
pub use types::{FieldKind, ScoredHit, SearchRecord};
pub use utils::{normalize, tokenize};
pub use width::{truncate_visual, visual_length};

#[cfg(feature = "wasm")]
pub use wasm::{copy_link, init_page, share_to_wechat, SearchPanel};
