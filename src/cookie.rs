//! Cookie access for the CSRF token.
//!
//! The parsing half is pure so it can be unit tested without a browser:
//! `document.cookie` hands over a single `;`-separated header string and
//! [`cookie_value`] picks one percent-encoded pair out of it. The thin
//! wrappers below read that string through `web_sys::HtmlDocument`.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

/// Name of the cookie Django stores the anti-forgery token under.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Returns the decoded value of the first `key=value` pair whose key equals
/// `name` exactly, or `None` when the header is empty or the key is absent.
///
/// Keys are compared after trimming the whitespace the browser inserts
/// around `;` separators. Pairs without a `=` are skipped. Invalid UTF-8
/// left behind by percent-decoding is replaced rather than propagated, as
/// the token is opaque to us either way.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    if header.is_empty() {
        return None;
    }
    for pair in header.split(';') {
        let Some((key, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if key == name {
            return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
        }
    }
    None
}

/// Reads the raw cookie header off the document, if it carries one.
fn document_cookie(document: &Document) -> Option<String> {
    let html_document = document.dyn_ref::<HtmlDocument>()?;
    html_document.cookie().ok().filter(|header| !header.is_empty())
}

/// The CSRF token for state-changing requests, or `None` when the server
/// has not set one. Callers still send the request in that case and let the
/// server reject it.
pub fn csrf_token(document: &Document) -> Option<String> {
    document_cookie(document).and_then(|header| cookie_value(&header, CSRF_COOKIE))
}
