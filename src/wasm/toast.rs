//! Transient toast notifications.

use wasm_bindgen::JsCast;

use super::dom;

const TOAST_VISIBLE_MS: i32 = 3000;
const TOAST_FADE_MS: i32 = 300;

/// Show a toast for three seconds, then slide it back out.
pub(crate) fn show(message: &str) {
    let Some(doc) = dom::document() else { return };
    let Some(body) = doc.body() else { return };

    // Reuse the container across toasts.
    let container = match dom::query(".toast-container") {
        Some(el) => el,
        None => {
            let Ok(el) = doc.create_element("div") else {
                return;
            };
            el.set_class_name("toast-container");
            if body.append_child(&el).is_err() {
                return;
            }
            el
        }
    };

    let Ok(toast) = doc.create_element("div") else {
        return;
    };
    toast.set_class_name("custom-toast");
    toast.set_inner_html(&format!(
        r#"<i class="bi bi-check-circle me-2"></i>{}"#,
        dom::esc_text(message)
    ));
    if container.append_child(&toast).is_err() {
        return;
    }

    dom::after(TOAST_VISIBLE_MS, move || {
        if let Some(el) = toast.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el
                .style()
                .set_property("animation", "slideIn 0.3s ease reverse");
        }
        dom::after(TOAST_FADE_MS, move || toast.remove());
    });
}
