//! Copy-link with click throttling, and the WeChat QR share dialog.
//!
//! The clipboard write has two tiers: the asynchronous clipboard API,
//! then the legacy hidden-textarea `execCommand` path when the modern
//! API is missing or its promise rejects. Failure ends in a toast, never
//! in a thrown error.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlTextAreaElement;

use crate::cooldown::{ClickOutcome, CooldownGate};

use super::{dom, strings, toast, vendor};

thread_local! {
    // Per page load; the single click handler is the only writer.
    static GATE: RefCell<CooldownGate> = RefCell::new(CooldownGate::new());
}

pub(crate) fn copy_link() {
    let Some(win) = dom::window() else { return };
    let Ok(url) = win.location().href() else { return };

    let outcome = GATE.with(|gate| gate.borrow_mut().register(js_sys::Date::now()));
    match outcome {
        ClickOutcome::Proceed => perform_copy(url),
        ClickOutcome::Cooling { retry_in_s } => {
            toast::show(&strings::share::retry_in(retry_in_s));
        }
    }
}

fn perform_copy(url: String) {
    let Some(win) = dom::window() else { return };
    let navigator = win.navigator();

    // Insecure contexts have no clipboard object at all.
    let has_modern_api = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !has_modern_api {
        fallback_copy(&url);
        return;
    }

    let promise = navigator.clipboard().write_text(&url);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => toast::show(strings::share::COPIED),
            Err(_) => fallback_copy(&url),
        }
    });
}

/// Legacy tier: select the url inside an off-screen textarea and
/// `execCommand("copy")` it.
fn fallback_copy(text: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else { return };
    let Ok(textarea) = doc
        .create_element("textarea")
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().map_err(JsValue::from))
    else {
        toast::show(strings::share::COPY_FAILED);
        return;
    };

    textarea.set_value(text);
    let style = textarea.style();
    for (key, value) in [
        ("position", "fixed"),
        ("left", "-9999px"),
        ("top", "-9999px"),
        ("width", "2em"),
        ("height", "2em"),
        ("padding", "0"),
        ("border", "none"),
        ("outline", "none"),
        ("box-shadow", "none"),
        ("background", "transparent"),
    ] {
        let _ = style.set_property(key, value);
    }
    if body.append_child(&textarea).is_err() {
        toast::show(strings::share::COPY_FAILED);
        return;
    }

    textarea.select();
    let _ = textarea.set_selection_range(0, text.len() as u32);
    let copied = doc.exec_command("copy").unwrap_or(false);
    toast::show(if copied {
        strings::share::COPIED
    } else {
        strings::share::COPY_FAILED
    });

    let _ = body.remove_child(&textarea);
}

/// Build the QR dialog and hand it to the page's Bootstrap modal.
pub(crate) fn share_to_wechat() {
    let Some(win) = dom::window() else { return };
    let Some(doc) = dom::document() else { return };
    let Some(body) = doc.body() else { return };
    let Ok(href) = win.location().href() else { return };

    let encoded: String = js_sys::encode_uri_component(&href).into();
    let qr_url = format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={}",
        encoded
    );

    let Ok(modal) = doc.create_element("div") else {
        return;
    };
    modal.set_class_name("modal fade");
    modal.set_inner_html(&format!(
        r#"<div class="modal-dialog modal-dialog-centered modal-sm">
            <div class="modal-content">
                <div class="modal-header border-0">
                    <h5 class="modal-title"><i class="fab fa-weixin text-success me-2"></i>{title}</h5>
                    <button type="button" class="btn-close" data-bs-dismiss="modal"></button>
                </div>
                <div class="modal-body text-center">
                    <img src="{qr}" alt="{title}" class="img-fluid mb-3">
                    <p class="small text-muted">{hint}</p>
                </div>
            </div>
        </div>"#,
        title = strings::share::WECHAT_TITLE,
        hint = strings::share::WECHAT_SCAN_HINT,
        qr = dom::esc_attr(&qr_url),
    ));
    if body.append_child(&modal).is_err() {
        return;
    }

    // The dialog is throwaway; drop it from the DOM once dismissed.
    {
        let modal = modal.clone();
        dom::listen(&modal.clone().into(), "hidden.bs.modal", move |_| {
            modal.remove();
        });
    }

    vendor::show_bootstrap_modal(&modal);
}
