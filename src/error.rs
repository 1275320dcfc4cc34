use wasm_bindgen::JsValue;

/// Reasons attaching the form handlers can fail. The page is considered
/// broken in all of these cases; callers log and leave the form untouched.
#[derive(Debug, thiserror::Error)]
pub enum AugmentError {
    #[error("required element #{id} is missing from the document")]
    MissingElement { id: &'static str },

    #[error("element #{id} is not a {expected}")]
    UnexpectedElement {
        id: &'static str,
        expected: &'static str,
    },

    #[error("DOM operation rejected: {detail}")]
    Dom { detail: String },
}

impl AugmentError {
    pub(crate) fn from_js(value: JsValue) -> Self {
        AugmentError::Dom {
            detail: format!("{value:?}"),
        }
    }
}
