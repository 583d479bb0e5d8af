//! Page transition polish: content fade-in and pagination click effects.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;

const LINK_SQUASH_MS: i32 = 150;

pub(crate) fn init() {
    if let Some(main) = dom::query("main") {
        main.class_list().add_1("page-transition").ok();
    }

    let Some(doc) = dom::document() else { return };
    let Ok(links) = doc.query_selector_all(".pagination .page-link") else {
        return;
    };

    for i in 0..links.length() {
        let Some(link) = links
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let handler_link = link.clone();
        dom::listen(&link.into(), "click", move |event| {
            // Disabled page items swallow the click.
            if let Ok(Some(item)) = handler_link.closest(".page-item") {
                if item.class_list().contains("disabled") {
                    event.prevent_default();
                    return;
                }
            }

            let _ = handler_link
                .style()
                .set_property("transform", "scale(0.95)");
            let reset = handler_link.clone();
            dom::after(LINK_SQUASH_MS, move || {
                let _ = reset.style().remove_property("transform");
            });

            // Fade the list out under the navigation.
            if let Some(list) =
                dom::query(".post-list").and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let style = list.style();
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transform", "translateY(-10px)");
                let _ = style.set_property("transition", "all 0.3s ease");
            }
        });
    }
}
