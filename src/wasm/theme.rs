//! Theme toggle: `data-bs-theme` attribute, persisted preference, icon,
//! and code-highlight stylesheet swap.

use wasm_bindgen::JsCast;
use web_sys::HtmlLinkElement;

use crate::theme::{ThemePreference, STORAGE_KEY, THEME_ATTRIBUTE};

use super::dom;

pub(crate) fn init() {
    let Some(toggle) = dom::by_id("themeToggle") else {
        return;
    };

    // Restore the stored preference before the first paint settles, then
    // bring the icon and highlight theme in line with it.
    apply(stored().unwrap_or_else(current));

    dom::listen(&toggle, "click", move |_| {
        let next = current().toggled();
        apply(next);
        persist(next);
    });
}

/// Theme currently on the document root.
fn current() -> ThemePreference {
    dom::document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute(THEME_ATTRIBUTE))
        .map(|v| ThemePreference::parse(&v))
        .unwrap_or_default()
}

fn stored() -> Option<ThemePreference> {
    let storage = dom::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Some(ThemePreference::parse(&value))
}

fn persist(theme: ThemePreference) {
    if let Some(Ok(Some(storage))) = dom::window().map(|w| w.local_storage()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

fn apply(theme: ThemePreference) {
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
    if let Some(icon) = dom::by_id("themeIcon") {
        icon.set_class_name(theme.icon_class());
    }
    switch_code_theme(theme);
}

/// Enable the prism stylesheet matching the theme, disable the other.
fn switch_code_theme(theme: ThemePreference) {
    set_stylesheet_disabled("prism-light-theme", theme.is_dark());
    set_stylesheet_disabled("prism-dark-theme", !theme.is_dark());
}

fn set_stylesheet_disabled(id: &str, disabled: bool) {
    if let Some(link) = dom::by_id(id).and_then(|el| el.dyn_into::<HtmlLinkElement>().ok()) {
        link.set_disabled(disabled);
    }
}
