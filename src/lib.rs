use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

mod macros; // console logging macros, exported at the crate root

pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod network;
pub mod profile_editor;
pub mod reorder;
pub mod schema_validation;
pub mod ui;

pub use error::{Error, Result};

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(Error::MissingElement("window"))?;
    let document = window.document().ok_or(Error::MissingElement("document"))?;

    // The module may load before or after parsing finished.
    if document.ready_state() == "loading" {
        let (w, d) = (window.clone(), document.clone());
        let cb = Closure::once(move || {
            if let Err(e) = enhance_page(&w, &d) {
                crate::console_error!("onelink: page setup failed: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    } else {
        enhance_page(&window, &document)
    }
}

/// Attach every enhancement whose anchor exists on this page.
pub fn enhance_page(window: &Window, document: &Document) -> std::result::Result<(), JsValue> {
    ui::setup(window, document)?;
    profile_editor::setup(document)?;

    match reorder::attach(document)? {
        Some(controller) => crate::debug_log!("onelink: reorder attached ({} rows)", controller.ids().len()),
        None => crate::debug_log!("onelink: no reorderable list on page"),
    }
    Ok(())
}
