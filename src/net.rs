//! The add-item request path.
//!
//! A single form-encoded POST per submitted value, fire-and-forget from the
//! caller's side. Completion is delivered as a [`SubmitOutcome`] through the
//! callback handed to [`submit_item`], so the host decides what a failure
//! looks like; this crate's default wiring appends the option and logs.
//!
//! The CSRF token travels in a request header, read from the cookie the
//! server set out of band. A missing cookie simply omits the header and the
//! server turns the request away.

use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::cookie;
use crate::field::ItemKind;

/// Endpoint accepting new tags and ingredients.
pub const ADD_ITEM_PATH: &str = "/recipe/additem/";

/// Header the server expects the anti-forgery token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Typed result of one add-item request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the value (200 from an earlier deployment,
    /// 201 Created from the current one). `body` is the raw response text.
    Accepted { status: u16, body: String },
    /// Any other status. Transport errors that never produced a response
    /// are reported with status 0, the value `XMLHttpRequest` uses for
    /// the same situation.
    Rejected { status: u16, status_text: String },
}

/// Statuses treated as acceptance by [`submit_item`].
pub fn is_success(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Serializes the request body. `application/x-www-form-urlencoded`, both
/// fields percent-encoded.
pub fn encode_body(kind: ItemKind, value: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("type", kind.as_str())
        .append_pair("value", value)
        .finish()
}

/// Sends `value` to the server as a new item of `kind` and invokes
/// `on_done` with the outcome once the response (or transport failure)
/// arrives. Never blocks; the caller observes completion only through
/// `on_done`, which runs on the event loop.
pub fn submit_item(
    document: &Document,
    kind: ItemKind,
    value: String,
    on_done: impl FnOnce(SubmitOutcome) + 'static,
) {
    let token = cookie::csrf_token(document);
    spawn_local(async move {
        on_done(post_item(kind, &value, token.as_deref()).await);
    });
}

async fn post_item(kind: ItemKind, value: &str, token: Option<&str>) -> SubmitOutcome {
    let mut builder = Request::post(ADD_ITEM_PATH)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(CSRF_HEADER, token);
    }

    let request = match builder.body(encode_body(kind, value)) {
        Ok(request) => request,
        Err(err) => {
            return SubmitOutcome::Rejected {
                status: 0,
                status_text: err.to_string(),
            }
        }
    };

    match request.send().await {
        Ok(response) if is_success(response.status()) => SubmitOutcome::Accepted {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        },
        Ok(response) => SubmitOutcome::Rejected {
            status: response.status(),
            status_text: response.status_text(),
        },
        Err(err) => SubmitOutcome::Rejected {
            status: 0,
            status_text: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_and_201_are_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        for status in [0, 204, 301, 400, 403, 500] {
            assert!(!is_success(status));
        }
    }

    #[test]
    fn body_carries_type_then_value() {
        assert_eq!(
            encode_body(ItemKind::Ingredient, "Garlic"),
            "type=ingredient&value=Garlic"
        );
        assert_eq!(encode_body(ItemKind::Tag, "Middag"), "type=tag&value=Middag");
    }

    #[test]
    fn body_escapes_reserved_characters() {
        assert_eq!(
            encode_body(ItemKind::Ingredient, "salt & pepper"),
            "type=ingredient&value=salt+%26+pepper"
        );
        assert_eq!(
            encode_body(ItemKind::Tag, "a=b"),
            "type=tag&value=a%3Db"
        );
    }

    #[test]
    fn body_encodes_non_ascii_values() {
        assert_eq!(
            encode_body(ItemKind::Ingredient, "rømme"),
            "type=ingredient&value=r%C3%B8mme"
        );
    }
}
