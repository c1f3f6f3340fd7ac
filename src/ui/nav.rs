//! Mobile navigation toggle (`.nav-toggle` ↔ `#site-nav`).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

use crate::constants::{NAV_TOGGLE_SELECTOR, SITE_NAV_ID};
use crate::dom_utils;

const OPEN_CLASS: &str = "open";

/// Flip the nav open state and mirror it into `aria-expanded`.
pub fn toggle(btn: &Element, nav: &Element) -> bool {
    let open = nav.class_list().toggle(OPEN_CLASS).unwrap_or(false);
    let _ = btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
    open
}

/// Close an open nav; returns whether anything changed.
pub fn close(btn: &Element, nav: &Element) -> bool {
    if !nav.class_list().contains(OPEN_CLASS) {
        return false;
    }
    let _ = nav.class_list().remove_1(OPEN_CLASS);
    let _ = btn.set_attribute("aria-expanded", "false");
    dom_utils::focus(btn);
    true
}

pub fn setup_nav(document: &Document) -> Result<(), JsValue> {
    let (Some(btn), Some(nav)) = (
        document.query_selector(NAV_TOGGLE_SELECTOR)?,
        document.get_element_by_id(SITE_NAV_ID),
    ) else {
        return Ok(());
    };

    {
        let (btn2, nav2) = (btn.clone(), nav.clone());
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
            toggle(&btn2, &nav2);
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            close(&btn, &nav);
        }
    }));
    document.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn toggle_and_close_track_aria_expanded() {
        let doc = dom_utils::document().unwrap();
        let btn = doc.create_element("button").unwrap();
        let nav = doc.create_element("nav").unwrap();
        doc.body().unwrap().append_child(&btn).unwrap();

        assert!(toggle(&btn, &nav));
        assert_eq!(btn.get_attribute("aria-expanded").as_deref(), Some("true"));

        assert!(close(&btn, &nav));
        assert!(!nav.class_list().contains("open"));
        assert_eq!(btn.get_attribute("aria-expanded").as_deref(), Some("false"));
        assert!(!close(&btn, &nav));

        btn.remove();
    }
}
