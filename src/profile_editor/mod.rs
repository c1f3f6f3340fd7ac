//! Progressive enhancement of the profile edit form (`form.profile-shell`).

pub mod avatar;
pub mod bio;
pub mod formset;
pub mod handle;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::constants::{PROFILE_FORM_SELECTOR, SAVE_PROFILE_SELECTOR};
use crate::dom_utils;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Attach every profile-form handler.  Pages without the form are left alone.
pub fn setup(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document.query_selector(PROFILE_FORM_SELECTOR)? else {
        crate::debug_log!("profile_editor: no {} on page", PROFILE_FORM_SELECTOR);
        return Ok(());
    };

    setup_bio(document, &form)?;
    handle::setup_handle_input(document, &form)?;
    avatar::setup_avatar_preview(document, &form)?;
    setup_save_button(document)?;
    formset::setup_formset(document, &form)?;
    formset::setup_add_buttons(document)?;
    Ok(())
}

/// Sync the bio and submit the form that owns `origin` (or the profile form).
pub fn submit_profile(document: &Document, origin: Option<&Element>) {
    bio::sync_bio_to_form(document);
    match dom_utils::owning_form(origin, document, PROFILE_FORM_SELECTOR) {
        Some(form) => dom_utils::submit_form(&form),
        None => crate::console_warn!("profile_editor: nothing to submit"),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn setup_bio(document: &Document, form: &Element) -> Result<(), JsValue> {
    let Some(editable) = bio::find_editable_bio(document) else {
        return Ok(());
    };
    bio::update_placeholder(&editable);
    bio::ensure_bio_field(document, form)?;
    bio::sync_bio_to_form(document);

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        if let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            bio::update_placeholder(&el);
        }
    }));
    editable.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();

    // Native submits (Enter in a field) must carry the bio too.
    let doc = document.clone();
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        bio::sync_bio_to_form(&doc);
    }));
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn setup_save_button(document: &Document) -> Result<(), JsValue> {
    for btn in dom_utils::query_all(document, SAVE_PROFILE_SELECTOR) {
        let doc = document.clone();
        let origin = btn.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            submit_profile(&doc, Some(&origin));
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}
