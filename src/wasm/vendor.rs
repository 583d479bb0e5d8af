//! Guarded calls into page-level collaborators: KaTeX, Prism, and the
//! Bootstrap modal component.
//!
//! These libraries are loaded (or not) by the page templates; nothing
//! here assumes their presence. Every entry point checks the global
//! object before calling through, so a page without math or highlighting
//! just skips the step.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use super::dom;

#[derive(Serialize)]
struct Delimiter {
    left: &'static str,
    right: &'static str,
    display: bool,
}

#[derive(Serialize)]
struct KatexOptions {
    delimiters: Vec<Delimiter>,
}

impl Default for KatexOptions {
    fn default() -> Self {
        KatexOptions {
            delimiters: vec![
                Delimiter {
                    left: "$$",
                    right: "$$",
                    display: true,
                },
                Delimiter {
                    left: "$",
                    right: "$",
                    display: false,
                },
            ],
        }
    }
}

/// KaTeX auto-render over the document body, when the page ships it.
pub(crate) fn render_math() {
    let Some(body) = dom::document().and_then(|d| d.body()) else {
        return;
    };
    let Some(render) = global_function("renderMathInElement") else {
        return;
    };
    let Ok(options) = serde_wasm_bindgen::to_value(&KatexOptions::default()) else {
        return;
    };
    let _ = render.call2(&JsValue::NULL, body.as_ref(), &options);
}

/// `Prism.highlightAll()`, when the page ships Prism.
pub(crate) fn highlight_code() {
    let global = js_sys::global();
    let Ok(prism) = Reflect::get(&global, &JsValue::from_str("Prism")) else {
        return;
    };
    if prism.is_undefined() || prism.is_null() {
        return;
    }
    let Ok(highlight) = Reflect::get(&prism, &JsValue::from_str("highlightAll")) else {
        return;
    };
    if let Some(highlight) = highlight.dyn_ref::<Function>() {
        let _ = highlight.call0(&prism);
    }
}

/// `new bootstrap.Modal(element).show()`, when the page ships Bootstrap.
pub(crate) fn show_bootstrap_modal(element: &Element) {
    let global = js_sys::global();
    let Ok(namespace) = Reflect::get(&global, &JsValue::from_str("bootstrap")) else {
        return;
    };
    if namespace.is_undefined() || namespace.is_null() {
        return;
    }
    let Ok(constructor) = Reflect::get(&namespace, &JsValue::from_str("Modal")) else {
        return;
    };
    let Some(constructor) = constructor.dyn_ref::<Function>() else {
        return;
    };

    let args = Array::of1(element.as_ref());
    let Ok(instance) = Reflect::construct(constructor, &args) else {
        return;
    };
    let Ok(show) = Reflect::get(&instance, &JsValue::from_str("show")) else {
        return;
    };
    if let Some(show) = show.dyn_ref::<Function>() {
        let _ = show.call0(&instance);
    }
}

fn global_function(name: &str) -> Option<Function> {
    let global = js_sys::global();
    let value = Reflect::get(&global, &JsValue::from_str(name)).ok()?;
    value.dyn_into::<Function>().ok()
}
