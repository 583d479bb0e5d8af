//! Small helpers over web-sys shared by every controller.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub(crate) fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub(crate) fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

/// Attach a page-lifetime event listener. The closure is leaked on
/// purpose; see the module docs in `wasm.rs`.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` on the next animation frame.
pub(crate) fn next_frame<F: FnOnce() + 'static>(f: F) {
    if let Some(win) = window() {
        let callback = Closure::once_into_js(f);
        let _ = win.request_animation_frame(callback.unchecked_ref());
    }
}

/// Run `f` after `ms` milliseconds.
pub(crate) fn after<F: FnOnce() + 'static>(ms: i32, f: F) {
    if let Some(win) = window() {
        let callback = Closure::once_into_js(f);
        let _ = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms);
    }
}

/// Current vertical scroll position.
pub(crate) fn scroll_top() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Escape for a text node interpolated into innerHTML.
pub(crate) fn esc_text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escape for a double-quoted attribute value.
pub(crate) fn esc_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
