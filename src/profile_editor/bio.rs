//! Contenteditable bio ↔ hidden form field mirroring.
//!
//! The bio is edited in place on a `contenteditable` element, which forms do
//! not submit.  Before every submit the trimmed text is copied into a `bio`
//! field inside the profile form, created on demand.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::constants::{BIO_EDITABLE_SELECTORS, BIO_FIELD_SELECTOR, PROFILE_FORM_SELECTOR};
use crate::dom_utils;

/// The editable bio element, tried in selector priority order.
pub fn find_editable_bio(document: &Document) -> Option<Element> {
    BIO_EDITABLE_SELECTORS
        .iter()
        .find_map(|sel| document.query_selector(sel).ok().flatten())
}

/// Existing `bio` field of `form`, or a freshly appended hidden input.
pub fn ensure_bio_field(document: &Document, form: &Element) -> Result<Element, wasm_bindgen::JsValue> {
    if let Some(field) = dom_utils::query_in(form, BIO_FIELD_SELECTOR) {
        return Ok(field);
    }
    let field: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    field.set_type("hidden");
    field.set_name("bio");
    form.append_child(&field)?;
    Ok(field.into())
}

/// Copy the trimmed editable text into the form field.  No-op when the page
/// has no profile form or no editable bio.
pub fn sync_bio_to_form(document: &Document) {
    let Some(form) = document.query_selector(PROFILE_FORM_SELECTOR).ok().flatten() else {
        return;
    };
    let Some(editable) = find_editable_bio(document) else {
        return;
    };
    let text = dom_utils::trimmed_text(&editable);
    match ensure_bio_field(document, &form) {
        Ok(field) => set_field_value(&field, &text),
        Err(e) => crate::console_warn!("bio: could not create hidden field: {:?}", e),
    }
}

fn set_field_value(field: &Element, value: &str) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Maintain `data-empty="true|false"` so CSS can show a placeholder on an
/// empty contenteditable.
pub fn update_placeholder(el: &Element) {
    if el.get_attribute("contenteditable").as_deref() != Some("true") {
        return;
    }
    let empty = dom_utils::trimmed_text(el).is_empty();
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.dataset().set("empty", if empty { "true" } else { "false" });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn sync_creates_hidden_field_with_trimmed_text() {
        let doc = dom_utils::document().unwrap();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(
            r#"<form class="profile-shell"></form>
               <div class="editable-area bio" contenteditable="true">  Hello there  </div>"#,
        );
        doc.body().unwrap().append_child(&root).unwrap();

        sync_bio_to_form(&doc);

        let field = root
            .query_selector("input[type=\"hidden\"][name=\"bio\"]")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        assert_eq!(field.value(), "Hello there");

        // A second sync reuses the same field.
        sync_bio_to_form(&doc);
        assert_eq!(root.query_selector_all("input[name=\"bio\"]").unwrap().length(), 1);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn placeholder_flag_tracks_emptiness() {
        let doc = dom_utils::document().unwrap();
        let el = doc.create_element("div").unwrap();
        el.set_attribute("contenteditable", "true").unwrap();
        el.set_text_content(Some("   "));
        update_placeholder(&el);
        assert_eq!(el.get_attribute("data-empty").as_deref(), Some("true"));

        el.set_text_content(Some("bio"));
        update_placeholder(&el);
        assert_eq!(el.get_attribute("data-empty").as_deref(), Some("false"));
    }
}
