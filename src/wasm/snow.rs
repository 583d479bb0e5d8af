//! Decorative snowfall.
//!
//! Flake parameters come from [`SnowflakeSpec`]; the fall itself is a CSS
//! animation keyed off the inline style. A single delegated
//! `animationend` listener on the container replaces each finished flake
//! with a fresh one, so the flake population stays constant without
//! accumulating per-flake closures.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::snow::{SnowflakeSpec, SNOWFLAKE_COUNT};

use super::dom;

pub(crate) fn init() {
    let Some(doc) = dom::document() else { return };
    let Some(body) = doc.body() else { return };

    let Ok(container) = doc.create_element("div") else {
        return;
    };
    container.set_class_name("snow-container");
    if body.append_child(&container).is_err() {
        return;
    }

    for _ in 0..SNOWFLAKE_COUNT {
        spawn_flake(&doc, &container);
    }

    let respawn_doc = doc.clone();
    let respawn_container = container.clone();
    dom::listen(&container.into(), "animationend", move |event| {
        if let Some(flake) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        {
            flake.remove();
        }
        spawn_flake(&respawn_doc, &respawn_container);
    });
}

fn spawn_flake(doc: &Document, container: &Element) {
    let spec = SnowflakeSpec::from_uniform(std::array::from_fn(|_| js_sys::Math::random()));

    let Ok(flake) = doc.create_element("div") else {
        return;
    };
    flake.set_class_name("snowflake");

    let Some(el) = flake.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("width", &format!("{}px", spec.size_px));
    let _ = style.set_property("height", &format!("{}px", spec.size_px));
    let _ = style.set_property("left", &format!("{}%", spec.left_pct));
    let _ = style.set_property("top", "-10px");
    let _ = style.set_property("animation-duration", &format!("{}s", spec.duration_s));
    let _ = style.set_property("animation-delay", &format!("{}s", spec.delay_s));
    let _ = style.set_property("--drift", &format!("{}px", spec.drift_px));

    let _ = container.append_child(&flake);
}
