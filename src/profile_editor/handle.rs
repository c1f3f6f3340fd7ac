//! Live normalisation of the profile handle field.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::constants::{HANDLE_ERROR_SELECTOR, HANDLE_INPUT_SELECTOR, HANDLE_MIN_LEN, HANDLE_TOO_SHORT};

/// Lowercase and drop every character outside `[a-z0-9_.]`.
pub fn sanitize_handle(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '.')
        .collect()
}

/// Inline hint for an already sanitised handle.  The server enforces the
/// full rule; this only nags about length while typing.
pub fn handle_hint(handle: &str) -> Option<&'static str> {
    (handle.chars().count() < HANDLE_MIN_LEN).then_some(HANDLE_TOO_SHORT)
}

/// `input[name="handle"]` → sanitise on every keystroke and update
/// `[data-handle-error]`.
pub fn setup_handle_input(document: &Document, form: &Element) -> Result<(), JsValue> {
    let Some(input) = form.query_selector(HANDLE_INPUT_SELECTOR)? else {
        return Ok(());
    };
    let error_el = document.query_selector(HANDLE_ERROR_SELECTOR)?;

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let clean = sanitize_handle(&input.value());
        if clean != input.value() {
            input.set_value(&clean);
        }
        if let Some(el) = &error_el {
            el.set_text_content(Some(handle_hint(&clean).unwrap_or("")));
        }
    }));
    input.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_lowercases_and_strips() {
        assert_eq!(sanitize_handle("Nadia K!"), "nadiak");
        assert_eq!(sanitize_handle("john_doe.99"), "john_doe.99");
        assert_eq!(sanitize_handle("@Über-Cool"), "bercool");
    }

    #[test]
    fn hint_only_for_short_handles() {
        assert_eq!(handle_hint("abcd"), Some(HANDLE_TOO_SHORT));
        assert_eq!(handle_hint("abcde"), None);
        assert_eq!(handle_hint(""), Some(HANDLE_TOO_SHORT));
    }
}
