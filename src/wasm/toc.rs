//! Table-of-contents controller: outline rendering and scroll-spy.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::scroll::FrameGate;
use crate::toc::{active_heading, build_outline, fallback_id, Heading};

use super::dom;

pub(crate) fn init() {
    let Some(toc_list) = dom::by_id("tocList") else {
        return;
    };
    let Some(post) = dom::by_id("postContent") else {
        return;
    };

    // Two levels only, matching the outline model.
    let Ok(nodes) = post.query_selector_all("h2, h3") else {
        return;
    };

    let mut elements: Vec<HtmlElement> = Vec::new();
    let mut headings: Vec<Heading> = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        if el.id().is_empty() {
            el.set_id(&fallback_id(i as usize));
        }
        let level = if el.tag_name().eq_ignore_ascii_case("h3") {
            3
        } else {
            2
        };
        headings.push(Heading {
            level,
            id: el.id(),
            text: el.text_content().unwrap_or_default(),
        });
        elements.push(el);
    }

    if headings.is_empty() {
        // No outline to show; hide the whole card.
        if let Ok(Some(card)) = toc_list.closest(".card") {
            if let Some(card) = card.dyn_ref::<HtmlElement>() {
                let _ = card.style().set_property("display", "none");
            }
        }
        return;
    }

    let mut html = String::new();
    for entry in build_outline(&headings) {
        html.push_str(&format!(
            r#"<li class="nav-item"><a class="nav-link{}" href="#{}">{}</a></li>"#,
            if entry.nested { " toc-h3" } else { "" },
            dom::esc_attr(&entry.id),
            dom::esc_text(&entry.text),
        ));
    }
    toc_list.set_inner_html(&html);

    // Scroll-spy, one update per frame.
    let elements = Rc::new(elements);
    let toc_list = Rc::new(toc_list);
    let gate = Rc::new(RefCell::new(FrameGate::new()));

    update_active(&toc_list, &elements);

    let Some(win) = dom::window() else { return };
    dom::listen(&win.into(), "scroll", move |_| {
        if !gate.borrow_mut().try_acquire() {
            return;
        }
        let gate = gate.clone();
        let toc_list = toc_list.clone();
        let elements = elements.clone();
        dom::next_frame(move || {
            update_active(&toc_list, &elements);
            gate.borrow_mut().release();
        });
    });
}

/// Re-resolve the active heading and move the highlight to its link.
fn update_active(toc_list: &Element, headings: &[HtmlElement]) {
    let offsets: Vec<(String, f64)> = headings
        .iter()
        .map(|h| (h.id(), f64::from(h.offset_top())))
        .collect();
    let current = active_heading(dom::scroll_top(), &offsets).map(str::to_owned);

    let Ok(links) = toc_list.query_selector_all(".nav-link") else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        link.class_list().remove_1("active").ok();

        let is_current = match (&current, link.get_attribute("href")) {
            (Some(id), Some(href)) => href == format!("#{}", id),
            _ => false,
        };
        if is_current {
            link.class_list().add_1("active").ok();
            keep_link_visible(&link);
        }
    }
}

/// Auto-scroll `.toc-container` so the active entry sits near the middle.
fn keep_link_visible(link: &HtmlElement) {
    let Some(container) = dom::query(".toc-container") else {
        return;
    };
    let link_rect = link.get_bounding_client_rect();
    let container_rect = container.get_bounding_client_rect();
    if link_rect.top() >= container_rect.top() && link_rect.bottom() <= container_rect.bottom() {
        return;
    }

    let Some(container) = container.dyn_ref::<HtmlElement>() else {
        return;
    };
    let target = f64::from(link.offset_top()) - f64::from(container.offset_height()) / 2.0
        + f64::from(link.offset_height()) / 2.0;

    let options = ScrollToOptions::new();
    options.set_top(target);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}
