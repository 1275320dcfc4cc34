//! Multi-select handling: appending accepted values and the modifier-free
//! click-toggle the form uses instead of the browser's ctrl/cmd selection.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};

use crate::field::ItemKind;

/// Appends `value` to the list belonging to `kind`, pre-selected, with the
/// display text equal to the value. Silently does nothing when the list is
/// not on the page. Values are never deduplicated; submitting the same text
/// twice yields two identical options.
pub fn append_option(document: &Document, kind: ItemKind, value: &str) {
    let Some(select) = find_select(document, kind) else {
        return;
    };
    if let Ok(option) = HtmlOptionElement::new_with_text_and_value(value, value) {
        option.set_selected(true);
        let _ = select.append_child(&option);
    }
}

pub fn find_select(document: &Document, kind: ItemKind) -> Option<HtmlSelectElement> {
    document
        .get_element_by_id(kind.select_id())
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
}

/// Installs the click-toggle behavior on `select`.
///
/// A mousedown over an option flips that option's selected flag and
/// suppresses the default handling, so plain clicks toggle membership
/// without modifier keys and without clearing the rest of the selection.
/// Mousedown elsewhere in the element changes nothing. Mousemove is
/// suppressed entirely to disable drag-range selection.
///
/// Dropping the returned listeners restores native behavior.
pub fn install_click_toggle(select: &HtmlSelectElement) -> Vec<EventListener> {
    let mousedown = EventListener::new_with_options(
        select,
        "mousedown",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            event.prevent_default();
            let Some(option) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlOptionElement>().ok())
            else {
                return;
            };
            option.set_selected(!option.selected());
        },
    );

    let mousemove = EventListener::new_with_options(
        select,
        "mousemove",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            event.prevent_default();
        },
    );

    vec![mousedown, mousemove]
}
