//! Client-side helpers for the recipe edit form.
//!
//! The page renders two add buttons and two multi-select lists; this crate
//! attaches to them and provides
//! - an inline row per button for typing a new tag or ingredient,
//! - a form-encoded POST of the typed value to `/recipe/additem/`, carrying
//!   the CSRF token from the `csrftoken` cookie,
//! - on acceptance, a new pre-selected option in the matching list,
//! - click-toggle selection on the lists, with drag selection disabled.
//!
//! [`start`] runs when the wasm module loads (module scripts are deferred,
//! so the document is parsed by then) and wires the live document. Hosts
//! embedding this crate as a library call [`FormAugmenter::attach`] with a
//! document of their choosing instead and keep the returned handle, which
//! detaches every listener on drop.

use wasm_bindgen::prelude::wasm_bindgen;

mod augmenter;
mod cookie;
mod error;
mod field;
mod net;
mod row;
mod select;

pub use augmenter::{apply_submit_outcome, FormAugmenter};
pub use cookie::{cookie_value, csrf_token, CSRF_COOKIE};
pub use error::AugmentError;
pub use field::{FieldSpec, ItemKind, FIELDS};
pub use net::{encode_body, is_success, submit_item, SubmitOutcome, ADD_ITEM_PATH, CSRF_HEADER};

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo_console::error!("no document to attach the recipe form helpers to");
        return;
    };

    match FormAugmenter::attach(&document) {
        // The page owns the listeners until unload.
        Ok(augmenter) => std::mem::forget(augmenter),
        Err(err) => gloo_console::error!("recipe form left untouched:", err.to_string()),
    }
}
