//! Wiring of the whole form: toggle buttons, inline rows, submit path, and
//! the click-toggle selects, behind one explicit attach call.
//!
//! [`FormAugmenter::attach`] takes the document as its capability for
//! looking elements up by id and returns a value owning every registered
//! listener. Dropping it detaches them all, which is what makes the
//! augmenter testable and re-attachable instead of a pile of listeners
//! registered once at load with no way back.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::{error, log};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::AugmentError;
use crate::field::{FieldSpec, ItemKind, FIELDS};
use crate::net::{self, SubmitOutcome};
use crate::row::{self, InlineRow};
use crate::select;

/// One inline row currently shown for a field, together with the listener
/// driving its submit button. Dropping this detaches the listener; the row
/// subtree itself is removed from the document by the toggle.
struct ActiveRow {
    _row: InlineRow,
    _submit: EventListener,
}

type RowSlot = Rc<RefCell<Option<ActiveRow>>>;

/// Live form wiring. Keep this value alive for as long as the form should
/// stay augmented; dropping it unregisters every listener it installed.
pub struct FormAugmenter {
    _listeners: Vec<EventListener>,
    _rows: Vec<RowSlot>,
}

impl FormAugmenter {
    /// Wires the add buttons and both select lists.
    ///
    /// The two add buttons are required and their absence is an error. The
    /// select lists are optional; a missing list skips both the click-toggle
    /// installation and, later, the option append.
    pub fn attach(document: &Document) -> Result<FormAugmenter, AugmentError> {
        let mut listeners = Vec::new();
        let mut rows = Vec::new();

        for field in FIELDS.iter() {
            let button = document
                .get_element_by_id(field.button_id)
                .ok_or(AugmentError::MissingElement {
                    id: field.button_id,
                })?
                .dyn_into::<HtmlElement>()
                .map_err(|_| AugmentError::UnexpectedElement {
                    id: field.button_id,
                    expected: "clickable element",
                })?;

            let slot: RowSlot = Rc::new(RefCell::new(None));
            listeners.push(wire_toggle(document, field, &button, &slot));
            rows.push(slot);
        }

        for kind in [ItemKind::Tag, ItemKind::Ingredient] {
            if let Some(list) = select::find_select(document, kind) {
                listeners.extend(select::install_click_toggle(&list));
            }
        }

        Ok(FormAugmenter {
            _listeners: listeners,
            _rows: rows,
        })
    }
}

/// Registers the click listener that flips the inline row for `field`.
fn wire_toggle(
    document: &Document,
    field: &'static FieldSpec,
    button: &HtmlElement,
    slot: &RowSlot,
) -> EventListener {
    let document = document.clone();
    let slot = Rc::clone(slot);
    let handler_button = button.clone();
    EventListener::new(button, "click", move |_| {
        if let Err(err) = toggle_field(&document, field, &handler_button, &slot) {
            error!("failed to toggle add row:", err.to_string());
        }
    })
}

/// Shows the inline row for `field` if it is absent, removes it if present.
/// The row container's id in the document is the existence check, so the
/// toggle stays idempotent across any pairing of clicks.
fn toggle_field(
    document: &Document,
    field: &'static FieldSpec,
    button: &HtmlElement,
    slot: &RowSlot,
) -> Result<(), AugmentError> {
    if let Some(existing) = document.get_element_by_id(&field.row_group_id()) {
        existing.remove();
        slot.borrow_mut().take();
        return Ok(());
    }

    let row = row::build_row(document, field)?;
    row::insert_after(&row, button)?;
    let submit = wire_submit(document, &row);
    *slot.borrow_mut() = Some(ActiveRow {
        _row: row,
        _submit: submit,
    });
    Ok(())
}

/// Registers the submit-button listener for a freshly built row. Each click
/// reads the current input value, fires the request, and clears the input
/// right away. Clearing is not gated on the response; the original form
/// behaves this way and a failed request is still visible in the console.
fn wire_submit(document: &Document, row: &InlineRow) -> EventListener {
    let document = document.clone();
    let input = row.input.clone();
    let kind = row.field.kind();
    EventListener::new(&row.submit, "click", move |_| {
        let value = input.value();
        net::submit_item(&document, kind, value.clone(), {
            let document = document.clone();
            move |outcome| apply_submit_outcome(&document, kind, &value, outcome)
        });
        input.set_value("");
    })
}

/// Default handling of a submit result: on acceptance, append the value to
/// its list and log the response body; on rejection, log status and text.
/// No retry and no user-facing surface in either case.
pub fn apply_submit_outcome(
    document: &Document,
    kind: ItemKind,
    value: &str,
    outcome: SubmitOutcome,
) {
    match outcome {
        SubmitOutcome::Accepted { body, .. } => {
            select::append_option(document, kind, value);
            log!("item added:", body);
        }
        SubmitOutcome::Rejected {
            status,
            status_text,
        } => {
            error!("error adding item:", status, status_text);
        }
    }
}
