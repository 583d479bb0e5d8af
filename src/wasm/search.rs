//! Search feed loading and the results panel.
//!
//! The feed fetch is fire-and-forget: the input is wired immediately and
//! queries against a not-yet-loaded index simply clear the panel, which
//! is also what an empty query does. Load failure is logged and leaves
//! search inert; it never surfaces as a page error.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlInputElement, Response};

use crate::index::SearchIndex;
use crate::scoring::RESULT_LIMIT;
use crate::types::SearchRecord;

use super::{dom, strings};

/// Shared slot the fetch fills in once the feed arrives.
type IndexSlot = Rc<RefCell<Option<SearchIndex>>>;

pub(crate) fn init() {
    let Some(input) = dom::by_id("searchInput").and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(results) = dom::by_id("searchResults") else {
        return;
    };

    let slot: IndexSlot = Rc::new(RefCell::new(None));
    spawn_local(load_feed(slot.clone()));

    {
        let input = input.clone();
        let results = results.clone();
        let slot = slot.clone();
        dom::listen(&input.clone().into(), "input", move |_| {
            render(&results, &slot, input.value().trim());
        });
    }

    if let Some(modal) = dom::by_id("searchModal") {
        // Focus the field when the dialog opens...
        {
            let input = input.clone();
            dom::listen(&modal.clone().into(), "shown.bs.modal", move |_| {
                let _ = input.focus();
            });
        }
        // ...and return to the initial state when it closes.
        dom::listen(&modal.into(), "hidden.bs.modal", move |_| {
            input.set_value("");
            results.set_inner_html("");
        });
    }
}

async fn load_feed(slot: IndexSlot) {
    match fetch_feed().await {
        Ok(records) => {
            *slot.borrow_mut() = Some(SearchIndex::build(records));
        }
        Err(err) => {
            web_sys::console::error_2(&JsValue::from_str("Failed to load search feed:"), &err);
        }
    }
}

/// One GET of `<origin>/search.json`, parsed into records.
async fn fetch_feed() -> Result<Vec<SearchRecord>, JsValue> {
    let win = dom::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let origin = win.location().origin()?;
    let url = format!("{}/search.json", origin);

    let response: Response = JsFuture::from(win.fetch_with_str(&url)).await?.dyn_into()?;
    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn render(results: &Element, slot: &IndexSlot, query: &str) {
    if query.is_empty() {
        results.set_inner_html("");
        return;
    }
    let guard = slot.borrow();
    let Some(index) = guard.as_ref() else {
        // Feed not loaded yet; indistinguishable from the initial state
        // on purpose.
        results.set_inner_html("");
        return;
    };

    let mut hits = index.search(query);
    hits.truncate(RESULT_LIMIT);

    if hits.is_empty() {
        results.set_inner_html(&format!(
            r#"<div class="list-group-item text-center text-muted py-4">
                <i class="bi bi-search fs-3 d-block mb-2"></i>
                {}
            </div>"#,
            strings::search::NO_RESULTS
        ));
        return;
    }

    let mut html = String::new();
    for hit in &hits {
        let Some(record) = index.record(hit.index) else {
            continue;
        };
        html.push_str(&format!(
            r#"<a href="{}" class="list-group-item list-group-item-action">
                <div class="fw-medium">{}</div>
                <small class="text-muted text-truncate d-block">{}</small>
            </a>"#,
            dom::esc_attr(&record.url),
            dom::esc_text(&record.title),
            dom::esc_text(&record.excerpt),
        ));
    }
    results.set_inner_html(&html);
}

/// A ranked result shaped for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultOutput {
    title: String,
    excerpt: String,
    url: String,
    score: f64,
}

/// Programmatic search over a caller-supplied feed.
///
/// The page controllers never need this; it exists so a template (or a
/// test harness) can run queries against its own record set without
/// going through the DOM.
#[wasm_bindgen]
pub struct SearchPanel {
    index: SearchIndex,
}

#[wasm_bindgen]
impl SearchPanel {
    /// Build a panel from a JS array of `{title, content, excerpt, url}`.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue) -> Result<SearchPanel, JsValue> {
        let records: Vec<SearchRecord> =
            serde_wasm_bindgen::from_value(records).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SearchPanel {
            index: SearchIndex::build(records),
        })
    }

    #[wasm_bindgen(js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.index.len()
    }

    /// Ranked results, at most `limit` (default 6).
    pub fn query(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let limit = limit.unwrap_or(RESULT_LIMIT);
        let mut hits = self.index.search(query);
        hits.truncate(limit);

        let output: Vec<ResultOutput> = hits
            .iter()
            .filter_map(|hit| {
                self.index.record(hit.index).map(|record| ResultOutput {
                    title: record.title.clone(),
                    excerpt: record.excerpt.clone(),
                    url: record.url.clone(),
                    score: hit.score,
                })
            })
            .collect();

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
