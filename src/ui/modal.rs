//! The shared `#generic-modal` dialog.
//!
//! Opening unhides the dialog, locks body scroll and focuses the first
//! `[autofocus]` control.  Closing reverses that and hands focus back to the
//! opener.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::constants::MODAL_ID;
use crate::dom_utils;

pub struct Modal {
    dialog: HtmlElement,
    opener: Option<Element>,
    body: Option<HtmlElement>,
}

impl Modal {
    pub fn find(document: &Document) -> Option<Self> {
        let dialog = document.get_element_by_id(MODAL_ID)?.dyn_into::<HtmlElement>().ok()?;
        let opener = document.query_selector("[data-open-modal]").ok().flatten();
        Some(Self { dialog, opener, body: document.body() })
    }

    pub fn is_open(&self) -> bool {
        !self.dialog.hidden()
    }

    pub fn open(&self) {
        self.dialog.set_hidden(false);
        self.lock_scroll(true);
        if let Some(af) = dom_utils::query_in(&self.dialog, "[autofocus]") {
            dom_utils::focus(&af);
        }
    }

    pub fn close(&self) {
        self.dialog.set_hidden(true);
        self.lock_scroll(false);
        if let Some(opener) = &self.opener {
            dom_utils::focus(opener);
        }
    }

    fn lock_scroll(&self, lock: bool) {
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", if lock { "hidden" } else { "" });
        }
    }
}

pub fn setup_modal(document: &Document) -> Result<(), JsValue> {
    let Some(modal) = Modal::find(document) else {
        return Ok(());
    };
    let modal = std::rc::Rc::new(modal);

    let on = |el: Option<Element>, open: bool| -> Result<(), JsValue> {
        let Some(el) = el else { return Ok(()) };
        let m = modal.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
            if open { m.open() } else { m.close() }
        }));
        el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    };
    on(modal.opener.clone(), true)?;
    on(dom_utils::query_in(&modal.dialog, "[data-cancel-modal]"), false)?;
    on(dom_utils::query_in(&modal.dialog, ".modal-backdrop"), false)?;

    let m = modal.clone();
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Escape" && m.is_open() {
            m.close();
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
    fn open_focuses_autofocus_and_close_restores_opener() {
        let doc = dom_utils::document().unwrap();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(
            r#"<button data-open-modal>Open</button>
               <div id="generic-modal" hidden>
                 <div class="modal-backdrop"></div>
                 <input id="modal-first" autofocus>
                 <button data-cancel-modal>Cancel</button>
               </div>"#,
        );
        doc.body().unwrap().append_child(&root).unwrap();

        let modal = Modal::find(&doc).unwrap();
        modal.open();
        assert!(modal.is_open());
        assert_eq!(doc.active_element().unwrap().id(), "modal-first");
        assert_eq!(doc.body().unwrap().style().get_property_value("overflow").unwrap(), "hidden");

        modal.close();
        assert!(!modal.is_open());
        assert!(doc.active_element().unwrap().has_attribute("data-open-modal"));
        assert_eq!(doc.body().unwrap().style().get_property_value("overflow").unwrap(), "");

        root.remove();
    }
}
