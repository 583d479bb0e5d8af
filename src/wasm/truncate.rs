//! Visual truncation of list titles and summaries.
//!
//! The full text travels in a data attribute so truncation is
//! recoverable; the element's text is replaced only when it actually
//! exceeds its budget.

use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::width::{truncate_visual, visual_length, SUMMARY_BUDGET, TITLE_BUDGET};

use super::dom;

pub(crate) fn init() {
    apply_all(".post-title-text", "data-full-title", TITLE_BUDGET);
    apply_all(".post-summary-text", "data-full-summary", SUMMARY_BUDGET);
}

fn apply_all(selector: &str, attribute: &str, budget: f64) {
    let Some(doc) = dom::document() else { return };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return;
    };

    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let full = el
            .get_attribute(attribute)
            .or_else(|| el.text_content())
            .unwrap_or_default();
        if visual_length(&full) > budget {
            el.set_text_content(Some(&truncate_visual(&full, budget)));
        }
    }
}
