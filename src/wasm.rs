// Copyright 2026-present Qiao Wen
// SPDX-License-Identifier: Apache-2.0

//! Browser controllers over the page's DOM contract.
//!
//! One `init_page()` call from the page's loader script wires every
//! feature. Each controller looks up the element ids it needs and
//! silently does nothing when they are absent, so one bundle serves the
//! index page, article pages, and bare pages alike.
//!
//! | Controller   | DOM contract                                 |
//! |--------------|----------------------------------------------|
//! | `theme`      | `#themeToggle`, `#themeIcon`, prism links    |
//! | `search`     | `#searchInput`, `#searchResults`, `#searchModal` |
//! | `toc`        | `#tocList`, `#postContent`, `.toc-container` |
//! | `scroll`     | `#mainNav`, `#backToTop`, `#readingProgress` |
//! | `share`      | markup-invoked `copyLink` / `shareToWechat`  |
//! | `snow`       | none (creates its own container)             |
//! | `truncate`   | `.post-title-text`, `.post-summary-text`     |
//! | `transition` | `main`, `.pagination .page-link`             |
//!
//! Listeners live for the page's lifetime, so their closures are
//! deliberately leaked with `Closure::forget`; navigation reclaims
//! everything.

mod dom;
mod scroll;
mod search;
mod share;
mod snow;
mod strings;
mod theme;
mod toast;
mod toc;
mod transition;
mod truncate;
mod vendor;

use wasm_bindgen::prelude::*;

pub use search::SearchPanel;

/// Wire every controller. Call once, after the DOM is parsed.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page() {
    theme::init();
    search::init();
    toc::init();
    scroll::init();
    transition::init();
    snow::init();
    truncate::init();
    vendor::render_math();
    vendor::highlight_code();
}

/// Copy the page url to the clipboard, throttled. Invoked from markup.
#[wasm_bindgen(js_name = copyLink)]
pub fn copy_link() {
    share::copy_link();
}

/// Show the WeChat QR share dialog. Invoked from markup.
#[wasm_bindgen(js_name = shareToWechat)]
pub fn share_to_wechat() {
    share::share_to_wechat();
}
