//! The transient inline row a user types a new tag or ingredient into.
//!
//! The row is built on demand when an add button is clicked and removed on
//! the next click; its container carries the id derived from the field name
//! so the toggle can find it again. Markup and classes match the Bootstrap
//! grid of the server-rendered page, and the button label stays Norwegian
//! like the rest of the form.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlDivElement, HtmlElement, HtmlInputElement};

use crate::error::AugmentError;
use crate::field::FieldSpec;

/// Handles to one live inline row. Owning this value is what keeps the
/// submit wiring alive; the DOM subtree itself is owned by the page until
/// the toggle removes it.
pub struct InlineRow {
    pub field: &'static FieldSpec,
    pub input: HtmlInputElement,
    pub submit: HtmlButtonElement,
    pub root: HtmlElement,
}

/// Builds the row for `field`: a text input and a "Legg til" button in a
/// two-column Bootstrap form group carrying [`FieldSpec::row_group_id`].
/// The row is not inserted into the document here.
pub fn build_row(document: &Document, field: &'static FieldSpec) -> Result<InlineRow, AugmentError> {
    let input: HtmlInputElement = document
        .create_element("input")
        .map_err(AugmentError::from_js)?
        .unchecked_into();
    input.set_type("text");
    input.set_name(field.name);
    input.set_placeholder(field.placeholder);
    input.set_class_name("form-control");

    let submit: HtmlButtonElement = document
        .create_element("button")
        .map_err(AugmentError::from_js)?
        .unchecked_into();
    submit.set_type("button");
    submit.set_inner_text("Legg til");
    submit.set_class_name("btn btn-primary");

    let input_column: HtmlDivElement = document
        .create_element("div")
        .map_err(AugmentError::from_js)?
        .unchecked_into();
    input_column.set_class_name("col-8");
    input_column
        .append_child(&input)
        .map_err(AugmentError::from_js)?;

    let button_column: HtmlDivElement = document
        .create_element("div")
        .map_err(AugmentError::from_js)?
        .unchecked_into();
    button_column.set_class_name("col-4");
    button_column
        .append_child(&submit)
        .map_err(AugmentError::from_js)?;

    let root: HtmlElement = document
        .create_element("div")
        .map_err(AugmentError::from_js)?
        .unchecked_into();
    root.set_class_name("form-group row");
    root.set_id(&field.row_group_id());
    root.append_child(&input_column)
        .map_err(AugmentError::from_js)?;
    root.append_child(&button_column)
        .map_err(AugmentError::from_js)?;

    Ok(InlineRow {
        field,
        input,
        submit,
        root,
    })
}

/// Inserts the row into the document directly after its toggle button.
pub fn insert_after(row: &InlineRow, button: &HtmlElement) -> Result<(), AugmentError> {
    let parent = button.parent_node().ok_or(AugmentError::Dom {
        detail: format!("#{} has no parent to insert a row into", row.field.button_id),
    })?;
    parent
        .insert_before(&row.root, button.next_sibling().as_ref())
        .map_err(AugmentError::from_js)?;
    Ok(())
}
