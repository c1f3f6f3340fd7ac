use web_sys::{Document, Element};

use crate::constants::{STATUS_ID, STATUS_SELECTOR};

/// Optional live region the controller writes human-readable progress into.
/// Every method is a no-op when the page has no such element.
#[derive(Debug, Clone, Default)]
pub struct StatusRegion {
    el: Option<Element>,
}

impl StatusRegion {
    pub fn new(el: Option<Element>) -> Self {
        if let Some(el) = &el {
            if !el.has_attribute("aria-live") {
                let _ = el.set_attribute("aria-live", "polite");
            }
        }
        Self { el }
    }

    /// `#status`, else `[data-reorder-status]`.
    pub fn locate(document: &Document) -> Self {
        let el = document
            .get_element_by_id(STATUS_ID)
            .or_else(|| document.query_selector(STATUS_SELECTOR).ok().flatten());
        Self::new(el)
    }

    pub fn announce(&self, text: &str) {
        if let Some(el) = &self.el {
            el.set_text_content(Some(text));
        }
    }

    pub fn text(&self) -> Option<String> {
        self.el.as_ref().and_then(|el| el.text_content())
    }
}
