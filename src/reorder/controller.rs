//! Ordered-list reordering controller.
//!
//! Attaches to `#links` (or `[data-reorder-list]`), lets the user permute the
//! `.row` children by dragging or with Ctrl+ArrowUp / Ctrl+ArrowDown, applies
//! the change optimistically and posts the new order to the server.  The
//! visual order is never rolled back on failure.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DragEvent, Element, HtmlElement, KeyboardEvent};

use super::drop_target::{insertion_target, RowGeometry};
use super::order::{Direction, RowKey, RowOrder};
use super::sequencer::{RequestSequencer, Ticket};
use super::status::StatusRegion;
use crate::constants::{
    DRAGGING_CLASS, REORDER_LIST_ID, REORDER_LIST_SELECTOR, ROW_CLASS, STATUS_FAILED, STATUS_SAVED,
    STATUS_SAVING,
};
use crate::dom_utils;
use crate::error::Result;
use crate::network::{csrf, FetchTransport, Persistence, ReorderConfig, ReorderRequest, ReorderTransport};
use crate::schema_validation::validate_reorder_payload;
use crate::{console_error, console_warn, debug_log};

pub struct ReorderController {
    container: Element,
    /// Row elements indexed by `RowKey`.  Re-read at the start of every
    /// gesture since formset rows come and go after attach.
    rows: RefCell<Vec<Element>>,
    order: RefCell<RowOrder>,
    in_motion: Cell<Option<RowKey>>,
    status: StatusRegion,
    config: ReorderConfig,
    csrf_token: String,
    sequencer: RequestSequencer,
    transport: Rc<dyn ReorderTransport>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Entry point – wire the controller when the page carries a reorderable
/// list.  Without a container this registers nothing.
pub fn attach(document: &Document) -> std::result::Result<Option<Rc<ReorderController>>, JsValue> {
    let Some(container) = find_container(document) else {
        debug_log!("reorder: no list container on this page");
        return Ok(None);
    };

    let controller = ReorderController::new(
        container.clone(),
        ReorderConfig::from_container(&container),
        Rc::new(FetchTransport),
        csrf::current_token(),
        StatusRegion::locate(document),
    );
    controller.bind()?;
    Ok(Some(controller))
}

fn find_container(document: &Document) -> Option<Element> {
    document
        .get_element_by_id(REORDER_LIST_ID)
        .or_else(|| document.query_selector(REORDER_LIST_SELECTOR).ok().flatten())
}

impl ReorderController {
    /// Take the `.row` children of `container` in their current order.  Rows
    /// become draggable and keyboard-focusable.
    pub fn new(
        container: Element,
        config: ReorderConfig,
        transport: Rc<dyn ReorderTransport>,
        csrf_token: String,
        status: StatusRegion,
    ) -> Rc<Self> {
        let rows = row_children(&container);
        prepare_rows(&rows);
        let order = order_of(&rows);

        if let Persistence::Disabled(reason) = &config.persistence {
            debug_log!("reorder: persistence disabled ({:?})", reason);
        }

        Rc::new(Self {
            container,
            rows: RefCell::new(rows),
            order: RefCell::new(order),
            in_motion: Cell::new(None),
            status,
            config,
            csrf_token,
            sequencer: RequestSequencer::new(),
            transport,
        })
    }

    /// Register the drag and keyboard listeners on the container.
    pub fn bind(self: &Rc<Self>) -> std::result::Result<(), JsValue> {
        {
            let this = Rc::clone(self);
            let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
                this.on_key_down(&e);
            }));
            self.container
                .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
        {
            let this = Rc::clone(self);
            let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: DragEvent| {
                if let Some(row) = dom_utils::closest(e.target(), &format!(".{}", ROW_CLASS)) {
                    this.on_drag_start(&row);
                }
            }));
            self.container
                .add_event_listener_with_callback("dragstart", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
        {
            let this = Rc::clone(self);
            let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: DragEvent| {
                // Without preventDefault the browser refuses the drop.
                e.prevent_default();
                this.on_drag_over(e.client_y() as f64);
            }));
            self.container
                .add_event_listener_with_callback("dragover", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
        {
            let this = Rc::clone(self);
            let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: DragEvent| {
                this.on_drag_end();
            }));
            self.container
                .add_event_listener_with_callback("dragend", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------------

    /// Rebuild rows and `RowOrder` from the live container so rows added or
    /// removed since the last gesture are part of the next submission.
    pub fn refresh_rows(&self) {
        let rows = row_children(&self.container);
        prepare_rows(&rows);
        *self.order.borrow_mut() = order_of(&rows);
        *self.rows.borrow_mut() = rows;
    }

    /// Mark `row` as in motion.
    pub fn on_drag_start(&self, row: &Element) {
        self.refresh_rows();
        if let Some(key) = self.key_of(row) {
            self.in_motion.set(Some(key));
            let _ = row.class_list().add_1(DRAGGING_CLASS);
        }
    }

    /// Live reinsertion of the row in motion for a pointer at `pointer_y`.
    pub fn on_drag_over(&self, pointer_y: f64) {
        let Some(key) = self.in_motion.get() else {
            return;
        };
        let geometry = self.measure();
        let target = insertion_target(&geometry, pointer_y, Some(key));
        let moved = self.order.borrow_mut().move_before(key, target);
        if moved {
            self.render_or_warn();
        }
    }

    /// Clear the in-motion marker and submit the resulting order.
    pub fn on_drag_end(self: &Rc<Self>) {
        let Some(key) = self.in_motion.take() else {
            return;
        };
        if let Some(row) = self.rows.borrow().get(key.0) {
            let _ = row.class_list().remove_1(DRAGGING_CLASS);
        }
        self.status.announce(STATUS_SAVING);
        self.persist();
    }

    fn on_key_down(self: &Rc<Self>, e: &KeyboardEvent) {
        if !e.ctrl_key() {
            return;
        }
        let Some(direction) = Direction::from_key(&e.key()) else {
            return;
        };
        let Some(row) = dom_utils::closest(e.target(), &format!(".{}", ROW_CLASS)) else {
            return;
        };
        if self.in_motion.get().is_none() {
            self.refresh_rows();
        }
        let Some(key) = self.key_of(&row) else {
            return;
        };
        e.prevent_default();
        self.move_by_keyboard(key, direction);
    }

    /// Swap `key` with its neighbour.  At a boundary nothing happens: no
    /// announcement and no request.
    pub fn move_by_keyboard(self: &Rc<Self>, key: RowKey, direction: Direction) -> bool {
        let moved = self.order.borrow_mut().swap_adjacent(key, direction);
        if !moved {
            return false;
        }
        self.render_or_warn();
        let row = self.rows.borrow().get(key.0).cloned();
        if let Some(row) = row {
            dom_utils::focus(&row);
        }
        self.status.announce(STATUS_SAVING);
        self.persist();
        true
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Project `RowOrder` onto the container.  Rows are moved with
    /// `insertBefore`; whatever follows the last row stays after the list.
    pub fn render(&self) -> std::result::Result<(), JsValue> {
        let order = self.order.borrow();
        let rows = self.rows.borrow();
        let desired: Vec<&Element> = order.keys().filter_map(|k| rows.get(k.0)).collect();
        let current = row_children(&self.container);
        if current.iter().eq(desired.iter().copied()) {
            return Ok(());
        }
        let anchor = current.last().and_then(|el| el.next_sibling());
        for el in desired {
            self.container.insert_before(el, anchor.as_ref())?;
        }
        Ok(())
    }

    fn render_or_warn(&self) {
        if let Err(e) = self.render() {
            console_warn!("reorder: failed to render new order: {:?}", e);
        }
    }

    fn measure(&self) -> Vec<RowGeometry> {
        let rows = self.rows.borrow();
        self.order
            .borrow()
            .keys()
            .filter_map(|key| {
                let rect = rows.get(key.0)?.get_bounding_client_rect();
                Some(RowGeometry { key, top: rect.top(), height: rect.height() })
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Fire one request for the current order.  Overlapping requests are all
    /// sent; only the latest one may update the status region.
    fn persist(self: &Rc<Self>) {
        let Persistence::Enabled { endpoint } = &self.config.persistence else {
            debug_log!("reorder: persistence disabled, skipping save");
            return;
        };

        let body = self.order.borrow().submission();
        match serde_json::to_value(&body) {
            Ok(value) if !validate_reorder_payload(&value) => {
                console_warn!("reorder: payload does not match contract: {}", value);
            }
            Err(e) => console_warn!("reorder: payload not serializable: {}", e),
            _ => {}
        }

        let request = ReorderRequest {
            endpoint: endpoint.clone(),
            csrf_token: self.csrf_token.clone(),
            body,
        };
        let ticket = self.sequencer.issue();
        let this = Rc::clone(self);
        spawn_local(async move {
            let result = this.transport.send(request).await;
            this.on_persisted(ticket, result);
        });
    }

    fn on_persisted(&self, ticket: Ticket, result: Result<()>) {
        let latest = self.sequencer.is_latest(ticket);
        match result {
            Ok(()) if latest => self.status.announce(STATUS_SAVED),
            Ok(()) => debug_log!("reorder: save #{} superseded", ticket.seq()),
            Err(e) => {
                console_error!("reorder: save #{} failed: {}", ticket.seq(), e);
                if latest {
                    self.status.announce(STATUS_FAILED);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    fn key_of(&self, row: &Element) -> Option<RowKey> {
        self.rows.borrow().iter().position(|r| r == row).map(RowKey)
    }

    /// Server ids in current order (`None` for unsaved rows).
    pub fn ids(&self) -> Vec<Option<String>> {
        let order = self.order.borrow();
        order.keys().map(|k| order.id_of(k).map(str::to_string)).collect()
    }

    pub fn key_for_id(&self, id: &str) -> Option<RowKey> {
        let order = self.order.borrow();
        let found = order.keys().find(|k| order.id_of(*k) == Some(id));
        found
    }

    pub fn status(&self) -> &StatusRegion {
        &self.status
    }
}

fn prepare_rows(rows: &[Element]) {
    for row in rows {
        if let Some(html) = row.dyn_ref::<HtmlElement>() {
            html.set_draggable(true);
        }
        if !row.has_attribute("tabindex") {
            let _ = row.set_attribute("tabindex", "0");
        }
    }
}

fn order_of(rows: &[Element]) -> RowOrder {
    RowOrder::from_ids(rows.iter().map(|r| r.get_attribute("data-id")))
}

fn row_children(container: &Element) -> Vec<Element> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|el| el.class_list().contains(ROW_CLASS))
        .collect()
}

// ---------------------------------------------------------------------------
// Browser tests
// ---------------------------------------------------------------------------
