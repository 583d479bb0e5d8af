//! Scroll listeners: navbar hide/show, back-to-top, reading progress.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::scroll::{back_to_top_visible, reading_progress, FrameGate, NavAction, NavbarState};

use super::dom;

pub(crate) fn init() {
    init_navbar();
    init_back_to_top();
    init_reading_progress();
}

/// Hide the navbar scrolling down through an article, show it on the way
/// back up.
fn init_navbar() {
    let Some(navbar) = dom::by_id("mainNav") else {
        return;
    };
    let Some(win) = dom::window() else { return };

    let state = Rc::new(RefCell::new(NavbarState::new()));
    let gate = Rc::new(RefCell::new(FrameGate::new()));

    dom::listen(&win.into(), "scroll", move |_| {
        if !gate.borrow_mut().try_acquire() {
            return;
        }
        let gate = gate.clone();
        let state = state.clone();
        let navbar = navbar.clone();
        dom::next_frame(move || {
            let is_article = dom::query(".post-content").is_some();
            let action = state.borrow_mut().on_scroll(dom::scroll_top(), is_article);
            match action {
                NavAction::Hide => navbar.class_list().add_1("navbar-hidden").ok(),
                NavAction::Show => navbar.class_list().remove_1("navbar-hidden").ok(),
            };
            gate.borrow_mut().release();
        });
    });
}

fn init_back_to_top() {
    let Some(button) = dom::html_by_id("backToTop") else {
        return;
    };
    let Some(win) = dom::window() else { return };

    {
        let button = button.clone();
        dom::listen(&win.clone().into(), "scroll", move |_| {
            if back_to_top_visible(dom::scroll_top()) {
                button.class_list().add_1("show").ok();
                let _ = button.style().set_property("display", "flex");
            } else {
                button.class_list().remove_1("show").ok();
            }
        });
    }

    dom::listen(&button.into(), "click", move |_| {
        if let Some(win) = dom::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    });
}

fn init_reading_progress() {
    let Some(bar) = dom::html_by_id("readingProgress") else {
        return;
    };
    let Some(win) = dom::window() else { return };

    let gate = Rc::new(RefCell::new(FrameGate::new()));

    dom::listen(&win.clone().into(), "scroll", move |_| {
        if !gate.borrow_mut().try_acquire() {
            return;
        }
        let gate = gate.clone();
        let bar = bar.clone();
        dom::next_frame(move || {
            let scroll_height = dom::document()
                .and_then(|d| d.document_element())
                .map(|el| f64::from(el.scroll_height()))
                .unwrap_or(0.0);
            let viewport = dom::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let ratio = reading_progress(dom::scroll_top(), scroll_height, viewport);
            let _ = bar
                .style()
                .set_property("width", &format!("{}%", ratio * 100.0));
            gate.borrow_mut().release();
        });
    });
}
