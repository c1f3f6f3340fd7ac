use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlImageElement, HtmlInputElement, Url};

use super::submit_profile;
use crate::constants::{AVATAR_INPUT_SELECTOR, AVATAR_PREVIEW_ID};

/// Picking a new avatar previews it immediately through a blob URL and then
/// autosaves the form (bio included) so the upload starts right away.
pub fn setup_avatar_preview(document: &Document, form: &Element) -> Result<(), JsValue> {
    let Some(input) = form.query_selector(AVATAR_INPUT_SELECTOR)? else {
        return Ok(());
    };
    let document = document.clone();

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Some(img) = document
            .get_element_by_id(AVATAR_PREVIEW_ID)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => img.set_src(&url),
                Err(err) => crate::console_warn!("avatar: preview unavailable: {:?}", err),
            }
        }

        let origin: &Element = input.as_ref();
        submit_profile(&document, Some(origin));
    }));
    input.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
