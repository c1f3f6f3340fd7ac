//! Dynamic link rows for the Django link formset.
//!
//! New rows are stamped out of `#empty-form-template` with `__prefix__`
//! replaced by the next form index; `<prefix>-TOTAL_FORMS` is kept in step
//! so the server sees every row.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, FocusEvent, HtmlElement, HtmlInputElement, MouseEvent};

use super::{bio, submit_profile};
use crate::constants::{
    ADD_LINK_SELECTOR, CONFIRM_DELETE_LINK, EDITED_PILL_SELECTOR, EMPTY_FORM_TEMPLATE_ID, FORMSET_CONTAINER_ID,
    FORMSET_CONTAINER_SELECTOR, FORM_PREFIX_PLACEHOLDER, FORM_ROW_SELECTOR, PROFILE_FORM_SELECTOR,
    ROW_ACTION_SELECTOR, TOTAL_FORMS_SELECTOR, TOTAL_FORMS_SUFFIX,
};
use crate::dom_utils;

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// `"link_set-TOTAL_FORMS"` → `"link_set"`.
pub fn prefix_from_total_name(name: &str) -> Option<&str> {
    name.strip_suffix(TOTAL_FORMS_SUFFIX).filter(|p| !p.is_empty())
}

/// Parse a management-form counter; garbage counts as zero.
pub fn parse_total(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

/// Stamp the empty-form template for form number `index`.
pub fn substitute_prefix(template_html: &str, index: u32) -> String {
    template_html.replace(FORM_PREFIX_PLACEHOLDER, &index.to_string())
}

/// Formset input names end in `-title` / `-url` for the link fields.
pub fn is_link_field(name: &str) -> bool {
    name.ends_with("-title") || name.ends_with("-url")
}

/// Per-row button mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Row not saved yet: the button adds another blank row.
    Add,
    /// Saved (or completed) row: the button deletes this row.
    Delete,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Add => "add",
            RowAction::Delete => "delete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "add" => Some(RowAction::Add),
            "delete" => Some(RowAction::Delete),
            _ => None,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            RowAction::Add => "Add link",
            RowAction::Delete => "Delete",
        }
    }
}

// ---------------------------------------------------------------------------
// DOM
// ---------------------------------------------------------------------------

/// Management counter of the formset inside `form`.
pub struct FormsetInfo {
    pub total: HtmlInputElement,
    pub prefix: String,
}

impl FormsetInfo {
    pub fn find(form: &Element) -> Option<Self> {
        let total = dom_utils::query_in(form, TOTAL_FORMS_SELECTOR)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        let prefix = prefix_from_total_name(&total.name())?.to_string();
        Some(Self { total, prefix })
    }

    pub fn count(&self) -> u32 {
        parse_total(&self.total.value())
    }

    pub fn set_count(&self, n: u32) {
        self.total.set_value(&n.to_string());
    }
}

fn container(document: &Document) -> Option<Element> {
    document
        .query_selector(FORMSET_CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .or_else(|| document.get_element_by_id(FORMSET_CONTAINER_ID))
}

fn profile_form(document: &Document) -> Option<Element> {
    document.query_selector(PROFILE_FORM_SELECTOR).ok().flatten()
}

fn row_id_input(card: &Element) -> Option<HtmlInputElement> {
    dom_utils::query_in(card, "input[name$=\"-id\"]")?.dyn_into().ok()
}

fn input_value(card: &Element, selector: &str) -> String {
    dom_utils::query_in(card, selector)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value().trim().to_string())
        .unwrap_or_default()
}

/// Switch the row's `[data-link-row-action]` button between Add and Delete.
pub fn set_row_action(card: &Element, action: RowAction) {
    let Some(btn) = dom_utils::query_in(card, ROW_ACTION_SELECTOR) else {
        return;
    };
    let label = match action {
        RowAction::Add => {
            let current = dom_utils::trimmed_text(&btn);
            if current.is_empty() { "Add".to_string() } else { current }
        }
        RowAction::Delete => "Delete".to_string(),
    };
    btn.set_text_content(Some(&label));
    let _ = btn.set_attribute("title", action.title());
    let _ = btn.set_attribute("data-link-row-action", action.as_str());
}

/// Rows with a server id start in Delete mode, blank rows in Add mode.
pub fn init_row_actions(document: &Document) {
    let Some(container) = container(document) else {
        return;
    };
    for card in dom_utils::query_all_in(&container, FORM_ROW_SELECTOR) {
        let saved = row_id_input(&card).map(|i| !i.value().is_empty()).unwrap_or(false);
        set_row_action(&card, if saved { RowAction::Delete } else { RowAction::Add });
    }
}

/// Append a blank row stamped from the template and bump TOTAL_FORMS.
/// Returns the new row.
pub fn add_link(document: &Document) -> Option<Element> {
    let form = profile_form(document)?;
    let info = FormsetInfo::find(&form)?;
    let template = document.get_element_by_id(EMPTY_FORM_TEMPLATE_ID)?;
    let container = container(document)?;

    let index = info.count();
    let html = substitute_prefix(&template.inner_html(), index);
    let wrapper = document.create_element("div").ok()?;
    wrapper.set_inner_html(html.trim());
    let node = wrapper.first_element_child()?;
    container.append_child(&node).ok()?;

    info.set_count(index + 1);
    set_row_action(&node, RowAction::Add);
    dom_utils::focus_first_text_input(&node);
    Some(node)
}

/// Delete the row containing `origin`.
///
/// Unsaved rows simply disappear (and TOTAL_FORMS shrinks).  Saved rows are
/// confirmed, flagged through their `-DELETE` checkbox and the form is posted
/// without validation so the delete always goes through.
pub fn delete_link(document: &Document, origin: &Element) {
    let Some(card) = origin.closest(FORM_ROW_SELECTOR).ok().flatten() else {
        return;
    };
    let unsaved = row_id_input(&card).map(|i| i.value().is_empty()).unwrap_or(false);

    if unsaved {
        if let Some(info) = profile_form(document).and_then(|f| FormsetInfo::find(&f)) {
            info.set_count(info.count().saturating_sub(1));
        }
        card.remove();
        return;
    }

    let Some(del) = dom_utils::query_in(&card, "input[type=\"checkbox\"][name$=\"-DELETE\"]")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let confirmed = web_sys::window()
        .and_then(|w| w.confirm_with_message(CONFIRM_DELETE_LINK).ok())
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    del.set_checked(true);
    bio::sync_bio_to_form(document);
    if let Some(form) = dom_utils::owning_form(Some(&card), document, PROFILE_FORM_SELECTOR) {
        dom_utils::submit_form_unvalidated(&form);
    }
}

/// Blur of a link title/url input: flag the row as edited and, once both
/// fields are filled in, autosave.
pub fn on_link_field_blur(document: &Document, input: &HtmlInputElement) {
    let Some(card) = input.closest(FORM_ROW_SELECTOR).ok().flatten() else {
        return;
    };
    if let Some(pill) = dom_utils::query_in(&card, EDITED_PILL_SELECTOR) {
        let _ = pill.class_list().remove_1("hidden");
    }

    let title = input_value(&card, "input[name$=\"-title\"]");
    let url = input_value(&card, "input[name$=\"-url\"]");
    if title.is_empty() || url.is_empty() {
        return;
    }

    set_row_action(&card, RowAction::Delete);
    let origin: &Element = input.as_ref();
    submit_profile(document, Some(origin));
}

/// Wire row buttons (delegated click) and the autosave blur listener.
pub fn setup_formset(document: &Document, form: &Element) -> Result<(), JsValue> {
    init_row_actions(document);

    {
        let doc = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
            let Some(btn) = dom_utils::closest(e.target(), ROW_ACTION_SELECTOR) else {
                return;
            };
            e.prevent_default();
            let action = btn
                .get_attribute("data-link-row-action")
                .and_then(|v| RowAction::parse(&v))
                .unwrap_or(RowAction::Add);
            match action {
                RowAction::Add => {
                    add_link(&doc);
                }
                RowAction::Delete => delete_link(&doc, &btn),
            }
        }));
        form.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    {
        let doc = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: FocusEvent| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            if !is_link_field(&input.name()) {
                return;
            }
            on_link_field_blur(&doc, &input);
        }));
        // Capture so the handler still runs when focus jumps quickly.
        form.add_event_listener_with_callback_and_bool("focusout", cb.as_ref().unchecked_ref(), true)?;
        cb.forget();
    }

    Ok(())
}

/// Standalone "add link" buttons outside the rows (`[data-action="add-link"]`).
pub fn setup_add_buttons(document: &Document) -> Result<(), JsValue> {
    for btn in dom_utils::query_all(document, ADD_LINK_SELECTOR) {
        let doc = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            add_link(&doc);
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
        if let Some(html) = btn.dyn_ref::<HtmlElement>() {
            if html.title().is_empty() {
                html.set_title("Add link");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_comes_from_management_field_name() {
        assert_eq!(prefix_from_total_name("form-TOTAL_FORMS"), Some("form"));
        assert_eq!(prefix_from_total_name("link_set-TOTAL_FORMS"), Some("link_set"));
        assert_eq!(prefix_from_total_name("-TOTAL_FORMS"), None);
        assert_eq!(prefix_from_total_name("handle"), None);
    }

    #[test]
    fn template_placeholder_is_replaced_everywhere() {
        let tpl = r#"<div data-form-row><input name="form-__prefix__-title" id="id_form-__prefix__-title"></div>"#;
        assert_eq!(
            substitute_prefix(tpl, 3),
            r#"<div data-form-row><input name="form-3-title" id="id_form-3-title"></div>"#
        );
    }

    #[test]
    fn totals_parse_leniently() {
        assert_eq!(parse_total("4"), 4);
        assert_eq!(parse_total(" 2 "), 2);
        assert_eq!(parse_total(""), 0);
        assert_eq!(parse_total("x"), 0);
    }

    #[test]
    fn only_title_and_url_fields_autosave() {
        assert!(is_link_field("form-0-title"));
        assert!(is_link_field("link_set-12-url"));
        assert!(!is_link_field("form-0-id"));
        assert!(!is_link_field("handle"));
    }

    #[test]
    fn row_action_round_trips_through_attribute() {
        for a in [RowAction::Add, RowAction::Delete] {
            assert_eq!(RowAction::parse(a.as_str()), Some(a));
        }
        assert_eq!(RowAction::parse("edit"), None);
    }
}
