//! "Copy profile link" buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Event, HtmlDocument, HtmlInputElement, HtmlLinkElement};

use crate::constants::{COPY_FEEDBACK_MS, COPY_LINK_SELECTOR};
use crate::dom_utils;

const COPIED_TEXT: &str = "Copied!";
const COPIED_LABEL: &str = "Profile link copied";

/// Prefer a non-empty canonical URL, else the current location.
pub fn pick_copy_url(canonical: Option<String>, location: Option<String>) -> Option<String> {
    canonical
        .filter(|u| !u.trim().is_empty())
        .or(location)
        .filter(|u| !u.trim().is_empty())
}

fn page_url(document: &Document) -> Option<String> {
    let canonical = document
        .query_selector("link[rel=\"canonical\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok())
        .map(|l| l.href());
    let location = document.location().and_then(|l| l.href().ok());
    pick_copy_url(canonical, location)
}

/// `navigator.clipboard.writeText`, looked up dynamically since not every
/// context (plain http, old browsers) exposes it.
async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let navigator = web_sys::window().ok_or("no window")?.navigator();
    let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard api unavailable".into());
    }
    let write: Function = Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
    let promise: Promise = write.call1(&clipboard, &text.into())?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn write_with_exec_command(document: &Document, text: &str) -> Result<(), JsValue> {
    let body = document.body().ok_or("no body")?;
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_value(text);
    let _ = input.style().set_property("position", "fixed");
    let _ = input.style().set_property("opacity", "0");
    body.append_child(&input)?;
    input.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|d| d.exec_command("copy"))
        .unwrap_or(Ok(false));
    input.remove();
    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err("execCommand(copy) refused".into()),
        Err(e) => Err(e),
    }
}

/// Button label swap that reverts after [`COPY_FEEDBACK_MS`].  A new copy
/// replaces the pending timeout, which restarts the countdown.
struct Feedback {
    btn: Element,
    original_text: String,
    original_label: Option<String>,
    pending: RefCell<Option<Timeout>>,
}

impl Feedback {
    fn new(btn: Element) -> Rc<Self> {
        Rc::new(Self {
            original_text: btn.text_content().unwrap_or_default(),
            original_label: btn.get_attribute("aria-label"),
            btn,
            pending: RefCell::new(None),
        })
    }

    fn show(self: &Rc<Self>) {
        self.btn.set_text_content(Some(COPIED_TEXT));
        let _ = self.btn.set_attribute("aria-label", COPIED_LABEL);
        let this = self.clone();
        let timeout = Timeout::new(COPY_FEEDBACK_MS, move || this.restore());
        // Dropping the previous Timeout cancels it.
        self.pending.replace(Some(timeout));
    }

    fn restore(&self) {
        self.btn.set_text_content(Some(&self.original_text));
        match &self.original_label {
            Some(label) => {
                let _ = self.btn.set_attribute("aria-label", label);
            }
            None => {
                let _ = self.btn.remove_attribute("aria-label");
            }
        }
    }
}

pub async fn copy_text(document: &Document, text: &str) -> Result<(), JsValue> {
    if let Err(err) = write_with_clipboard_api(text).await {
        crate::debug_log!("copy_link: clipboard api failed ({:?}), using execCommand", err);
        write_with_exec_command(document, text)?;
    }
    Ok(())
}

pub fn setup_copy_link(document: &Document) -> Result<(), JsValue> {
    for btn in dom_utils::query_all(document, COPY_LINK_SELECTOR) {
        let feedback = Feedback::new(btn.clone());
        let doc = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let Some(url) = page_url(&doc) else {
                return;
            };
            let doc = doc.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                match copy_text(&doc, &url).await {
                    Ok(()) => feedback.show(),
                    Err(err) => crate::console_warn!("copy_link: copy failed: {:?}", err),
                }
            });
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
    fn canonical_wins_when_present() {
        assert_eq!(
            pick_copy_url(Some("https://one.link/@nadia".into()), Some("http://localhost/x".into())),
            Some("https://one.link/@nadia".to_string())
        );
        assert_eq!(
            pick_copy_url(Some("  ".into()), Some("http://localhost/x".into())),
            Some("http://localhost/x".to_string())
        );
        assert_eq!(pick_copy_url(None, None), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn feedback_reverts_after_timeout() {
        let doc = dom_utils::document().unwrap();
        let btn = doc.create_element("button").unwrap();
        btn.set_text_content(Some("Copy link"));
        doc.body().unwrap().append_child(&btn).unwrap();

        let feedback = Feedback::new(btn.clone());
        feedback.show();
        assert_eq!(btn.text_content().as_deref(), Some(COPIED_TEXT));
        assert_eq!(btn.get_attribute("aria-label").as_deref(), Some(COPIED_LABEL));

        TimeoutFuture::new(COPY_FEEDBACK_MS + 100).await;
        assert_eq!(btn.text_content().as_deref(), Some("Copy link"));
        assert!(btn.get_attribute("aria-label").is_none());

        btn.remove();
    }
}
