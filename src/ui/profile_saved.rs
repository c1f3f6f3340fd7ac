//! Keep "view profile" links in step after the handle changes.
//!
//! The profile page dispatches `profile:saved` on `window` with
//! `detail.handle` once a save went through.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Document, Window};

use crate::constants::{PROFILE_HANDLE_SELECTOR, PROFILE_LINK_SELECTOR, PROFILE_SAVED_EVENT};
use crate::dom_utils;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileSavedDetail {
    #[serde(default)]
    pub handle: Option<String>,
}

/// Replace the first `/@<handle>` path segment (up to `/`, `?` or `#`) with
/// the new handle; hrefs without one become `/@<handle>`.
pub fn rewrite_profile_href(old: &str, handle: &str) -> String {
    let Some(at) = old.find("/@") else {
        return format!("/@{handle}");
    };
    let rest = &old[at + 2..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let new = format!("{}/@{}{}", &old[..at], handle, &rest[end..]);
    if new == old {
        format!("/@{handle}")
    } else {
        new
    }
}

/// Apply a saved handle to every profile link and handle placeholder.
pub fn apply_handle(document: &Document, handle: &str) {
    for a in dom_utils::query_all(document, PROFILE_LINK_SELECTOR) {
        let old = a.get_attribute("href").unwrap_or_default();
        let _ = a.set_attribute("href", &rewrite_profile_href(&old, handle));
    }
    for el in dom_utils::query_all(document, PROFILE_HANDLE_SELECTOR) {
        el.set_text_content(Some(handle));
    }
}

fn handle_from_event(e: &CustomEvent) -> Result<Option<String>, serde_wasm_bindgen::Error> {
    let detail = e.detail();
    if detail.is_undefined() || detail.is_null() {
        return Ok(None);
    }
    let detail: ProfileSavedDetail = serde_wasm_bindgen::from_value(detail)?;
    Ok(detail.handle.map(|h| h.trim().to_string()).filter(|h| !h.is_empty()))
}

pub fn setup_profile_saved(window: &Window, document: &Document) -> Result<(), JsValue> {
    let doc = document.clone();
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: web_sys::Event| {
        let Some(e) = e.dyn_ref::<CustomEvent>() else {
            return;
        };
        match handle_from_event(e) {
            Ok(Some(handle)) => apply_handle(&doc, &handle),
            Ok(None) => {}
            Err(err) => crate::console_warn!("profile:saved update skipped: {}", err),
        }
    }));
    window.add_event_listener_with_callback(PROFILE_SAVED_EVENT, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
