//! "Find a profile" box on the 404 page.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, KeyboardEvent};

use crate::constants::{GOTO_HANDLE_SELECTOR, HANDLE_LOOKUP_ID};
use crate::dom_utils;

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `"  @Nadia "` → `Some("/@nadia")`; blank input → `None`.
pub fn profile_path(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let handle = lowered.strip_prefix('@').unwrap_or(&lowered);
    if handle.is_empty() {
        return None;
    }
    Some(format!("/@{}", utf8_percent_encode(handle, URI_COMPONENT)))
}

/// Navigate to the profile typed into `#handleLookup`.
#[wasm_bindgen(js_name = gotoHandle)]
pub fn goto_handle() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    let value = document
        .get_element_by_id(HANDLE_LOOKUP_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default();
    let Some(path) = profile_path(&value) else {
        return;
    };
    if let Some(location) = document.location() {
        if let Err(e) = location.set_href(&path) {
            crate::console_warn!("handle_lookup: navigation failed: {:?}", e);
        }
    }
}

pub fn setup_handle_lookup(document: &Document) -> Result<(), JsValue> {
    if let Some(input) = document.get_element_by_id(HANDLE_LOOKUP_ID) {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                goto_handle();
            }
        }));
        input.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    for btn in dom_utils::query_all(document, GOTO_HANDLE_SELECTOR) {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            goto_handle();
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_and_strips_one_at() {
        assert_eq!(profile_path("  @Nadia "), Some("/@nadia".to_string()));
        assert_eq!(profile_path("@@x"), Some("/@%40x".to_string()));
        assert_eq!(profile_path("john_doe.99"), Some("/@john_doe.99".to_string()));
    }

    #[test]
    fn blank_input_goes_nowhere() {
        assert_eq!(profile_path(""), None);
        assert_eq!(profile_path("   "), None);
        assert_eq!(profile_path("@"), None);
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(profile_path("a b/c?"), Some("/@a%20b%2Fc%3F".to_string()));
        assert_eq!(profile_path("it's(ok)!~*"), Some("/@it's(ok)!~*".to_string()));
        assert_eq!(profile_path("zoë"), Some("/@zo%C3%AB".to_string()));
    }
}
