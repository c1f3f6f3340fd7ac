//! Stateless page widgets shared by every template.

pub mod copy_link;
pub mod handle_lookup;
pub mod modal;
pub mod nav;
pub mod profile_saved;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Entry point – call once after the DOM is ready.  Widgets whose anchors
/// are missing from the page are skipped.
pub fn setup(window: &Window, document: &Document) -> Result<(), JsValue> {
    nav::setup_nav(document)?;
    modal::setup_modal(document)?;
    copy_link::setup_copy_link(document)?;
    handle_lookup::setup_handle_lookup(document)?;
    profile_saved::setup_profile_saved(window, document)?;
    Ok(())
}
