//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small, **ergonomic** wrappers so the feature modules don't repeat the
//! `dyn_into` / `Option` dance for every lookup, focus or form submit.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlFormElement, NodeList};

/// The page document, if any.  `None` only outside a browser window.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Collect a `NodeList` into the elements it contains.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// `document.querySelectorAll` as a `Vec`.  Invalid selectors yield an
/// empty list.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document.query_selector_all(selector).map(elements).unwrap_or_default()
}

/// `element.querySelectorAll` as a `Vec`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(elements).unwrap_or_default()
}

/// First match under `root`, swallowing selector errors.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// `event.target.closest(selector)`.
pub fn closest(target: Option<EventTarget>, selector: &str) -> Option<Element> {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// Focus an element when it is focusable (an `HtmlElement`).
pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Focus the first text-like input within the given container.
/// Returns true if an element was focused, false otherwise.
pub fn focus_first_text_input(container: &Element) -> bool {
    let selectors = ["input[type=\"text\"]", "input:not([type])", "textarea"];
    let first = container
        .query_selector(&selectors.join(", "))
        .ok()
        .flatten();
    match first {
        Some(el) => {
            focus(&el);
            true
        }
        None => false,
    }
}

/// Submit through `requestSubmit()` so `submit` listeners still fire, and
/// fall back to the bare `submit()` on browsers without it.
pub fn submit_form(form: &HtmlFormElement) {
    if form.request_submit().is_err() {
        let _ = form.submit();
    }
}

/// Plain `submit()`: skips constraint validation and `submit` listeners.
/// Failures are logged; returns whether the browser took the submit.
pub fn submit_form_unvalidated(form: &HtmlFormElement) -> bool {
    match form.submit() {
        Ok(()) => true,
        Err(e) => {
            crate::console_warn!("form submit failed: {:?}", e);
            false
        }
    }
}

/// The `<form>` an element belongs to, falling back to a page-level lookup.
pub fn owning_form(el: Option<&Element>, document: &Document, fallback_selector: &str) -> Option<HtmlFormElement> {
    el.and_then(|e| e.closest("form").ok().flatten())
        .or_else(|| document.query_selector(fallback_selector).ok().flatten())
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
}

/// Trimmed `textContent`.
pub fn trimmed_text(el: &Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

// ---------------------------------------------------------------------------
// Browser tests (run with `wasm-pack test --headless --chrome`)
// ---------------------------------------------------------------------------

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn closest_walks_up_from_target() {
        let doc = document().unwrap();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(r#"<ul><li class="row"><span id="dom-utils-inner">x</span></li></ul>"#);
        doc.body().unwrap().append_child(&root).unwrap();

        let inner = doc.get_element_by_id("dom-utils-inner").unwrap();
        let row = closest(Some(inner.into()), ".row").unwrap();
        assert_eq!(row.tag_name(), "LI");
        assert_eq!(query_all_in(&root, ".row").len(), 1);
        assert_eq!(trimmed_text(&row), "x");

        root.remove();
    }

    #[wasm_bindgen_test]
    fn unvalidated_submit_ignores_required_fields() {
        let doc = document().unwrap();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(r#"<form id="dom-utils-form" action="javascript:void(0)"><input name="t" required></form>"#);
        doc.body().unwrap().append_child(&root).unwrap();

        let form = doc.get_element_by_id("dom-utils-form").unwrap().dyn_into::<HtmlFormElement>().unwrap();
        assert!(!form.check_validity());
        assert!(submit_form_unvalidated(&form));

        root.remove();
    }

    #[wasm_bindgen_test]
    fn focus_first_text_input_skips_hidden_fields() {
        let doc = document().unwrap();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(r#"<input type="hidden" name="x-id"><input type="text" id="dom-utils-title">"#);
        doc.body().unwrap().append_child(&root).unwrap();

        assert!(focus_first_text_input(&root));
        assert_eq!(doc.active_element().unwrap().id(), "dom-utils-title");

        root.remove();
    }
}
