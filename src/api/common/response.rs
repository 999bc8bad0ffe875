//
//  pinbot
//  api/common/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Raw and normalized API responses.
//!
//! The upstream answers every resource call with a JSON body shaped like:
//!
//! ```json
//! {"status": "success", "data": [...], "bookmark": "Pz8xMjM0fA=="}
//! ```
//!
//! [`RawResponse`] is that body as decoded. [`Response`] is the normalized
//! outcome providers work with: a success flag, an optional payload and the
//! cursor for the next page.
//!
//! # Notes
//!
//! - A missing or unrecognized `status` is a failure.
//! - A failed response never carries data.
//! - Empty payloads (`null`, `[]`, `{}`, `""`) are reported as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Bookmark value the upstream sends on the last page.
pub const END_BOOKMARK: &str = "-end-";

/// A response body as decoded from the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    /// Boolean-like status indicator (`true`, `"ok"`, `"success"`, ...).
    #[serde(default)]
    pub status: Option<Value>,

    /// Payload: a single record or a list of records.
    #[serde(default)]
    pub data: Option<Value>,

    /// Opaque cursor for the next page.
    #[serde(default, deserialize_with = "lenient_bookmark")]
    pub bookmark: Option<String>,

    /// Upstream error text, if any.
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: Option<String>,
}

/// Accepts a string bookmark, or the first string of a list. Other shapes
/// decode as no bookmark.
fn lenient_bookmark<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Array(items)) => items.into_iter().find_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        }),
        _ => None,
    })
}

/// Accepts a string message, an object carrying `message` or
/// `error.message`, or any other value rendered as JSON text.
fn lenient_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            let nested = other
                .get("message")
                .or_else(|| other.pointer("/error/message"))
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(nested.unwrap_or_else(|| other.to_string()))
        }
    })
}

impl RawResponse {
    /// Convenience constructor for a successful body.
    pub fn success(data: Value) -> Self {
        Self {
            status: Some(Value::Bool(true)),
            data: Some(data),
            ..Default::default()
        }
    }

    /// Convenience constructor for a failed body.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Some(Value::Bool(false)),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Builder-style setter for the bookmark.
    pub fn with_bookmark(mut self, bookmark: impl Into<String>) -> Self {
        self.bookmark = Some(bookmark.into());
        self
    }
}

/// Interprets a boolean-like status value.
fn status_is_success(status: Option<&Value>) -> bool {
    match status {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => matches!(
            s.to_ascii_lowercase().as_str(),
            "ok" | "success" | "true"
        ),
        _ => false,
    }
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Normalizes a bookmark: empty strings and the end sentinel become `None`.
pub fn normalize_bookmark(bookmark: Option<&str>) -> Option<&str> {
    bookmark.filter(|b| !b.is_empty() && *b != END_BOOKMARK)
}

/// A normalized success/data outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    succeeded: bool,
    data: Option<Value>,
    bookmark: Option<String>,
    message: Option<String>,
}

impl Response {
    /// Normalizes a raw body. Pure; never fails.
    pub fn wrap(raw: RawResponse) -> Self {
        let succeeded = status_is_success(raw.status.as_ref());
        if !succeeded {
            return Self {
                succeeded: false,
                data: None,
                bookmark: None,
                message: raw.message,
            };
        }

        Self {
            succeeded: true,
            data: raw.data.filter(|d| !is_empty_payload(d)),
            bookmark: raw.bookmark,
            message: raw.message,
        }
    }

    /// A failed response with no payload.
    pub fn failed() -> Self {
        Self::default()
    }

    pub fn is_successful(&self) -> bool {
        self.succeeded
    }

    /// The payload, or `None` when the call failed or returned nothing.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<Value> {
        self.data
    }

    /// Reads a single key of an object payload.
    pub fn data_at(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|d| d.get(key))
    }

    /// Deserializes the payload into `T`. `Ok(None)` when there is no payload.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.data
            .as_ref()
            .map(|d| serde_json::from_value(d.clone()))
            .transpose()
    }

    /// Cursor for the next page, with end markers normalized away.
    pub fn bookmark(&self) -> Option<&str> {
        normalize_bookmark(self.bookmark.as_deref())
    }

    pub fn has_more(&self) -> bool {
        self.bookmark().is_some()
    }

    /// Upstream error text, if the body carried one.
    pub fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Splits the payload into page items and the next cursor.
    pub fn into_page(self) -> Page {
        let bookmark = normalize_bookmark(self.bookmark.as_deref()).map(str::to_string);
        let items = match self.data {
            Some(Value::Array(items)) => items,
            Some(other) => vec![other],
            None => Vec::new(),
        };
        Page { items, bookmark }
    }
}

impl From<RawResponse> for Response {
    fn from(raw: RawResponse) -> Self {
        Self::wrap(raw)
    }
}

/// One page of a paginated resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Value>,
    pub bookmark: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_true_status_exposes_payload() {
        for status in [json!(true), json!("ok"), json!("SUCCESS"), json!(1)] {
            let response = Response::wrap(raw(json!({"status": status, "data": {"id": "1"}})));
            assert!(response.is_successful());
            assert_eq!(response.data(), Some(&json!({"id": "1"})));
        }
    }

    #[test]
    fn test_false_or_missing_status_hides_payload() {
        let failed = Response::wrap(raw(json!({"status": false, "data": {"id": "1"}})));
        assert!(!failed.is_successful());
        assert_eq!(failed.data(), None);

        let missing = Response::wrap(raw(json!({"data": [1, 2, 3]})));
        assert!(!missing.is_successful());
        assert_eq!(missing.data(), None);

        let unknown = Response::wrap(raw(json!({"status": "fail", "data": [1]})));
        assert!(!unknown.is_successful());
    }

    #[test]
    fn test_empty_payload_is_absent() {
        for empty in [json!(null), json!([]), json!({}), json!("")] {
            let response = Response::wrap(raw(json!({"status": true, "data": empty})));
            assert!(response.is_successful());
            assert_eq!(response.data(), None);
        }
    }

    #[test]
    fn test_bookmark_normalization() {
        let with = Response::wrap(RawResponse::success(json!([1])).with_bookmark("abc"));
        assert_eq!(with.bookmark(), Some("abc"));
        assert!(with.has_more());

        let empty = Response::wrap(RawResponse::success(json!([1])).with_bookmark(""));
        assert_eq!(empty.bookmark(), None);

        let end = Response::wrap(RawResponse::success(json!([1])).with_bookmark(END_BOOKMARK));
        assert_eq!(end.bookmark(), None);
        assert!(!end.has_more());
    }

    #[test]
    fn test_failed_response_keeps_message() {
        let response = Response::wrap(RawResponse::failure("board not found"));
        assert_eq!(response.error_message(), Some("board not found"));
        assert_eq!(response.bookmark(), None);
    }

    #[test]
    fn test_into_page_splits_items() {
        let page = Response::wrap(RawResponse::success(json!(["a", "b"])).with_bookmark("x"))
            .into_page();
        assert_eq!(page.items, vec![json!("a"), json!("b")]);
        assert_eq!(page.bookmark.as_deref(), Some("x"));

        let single = Response::wrap(RawResponse::success(json!({"id": 1}))).into_page();
        assert_eq!(single.items, vec![json!({"id": 1})]);
        assert_eq!(single.bookmark, None);
    }

    #[test]
    fn test_data_at_and_data_as() {
        #[derive(Deserialize)]
        struct Board {
            name: String,
        }

        let response = Response::wrap(RawResponse::success(json!({"name": "Recipes"})));
        assert_eq!(response.data_at("name"), Some(&json!("Recipes")));
        let board: Board = response.data_as().unwrap().unwrap();
        assert_eq!(board.name, "Recipes");

        let empty: Option<Board> = Response::failed().data_as().unwrap();
        assert!(empty.is_none());
    }

    #[test]
    fn test_structured_failure_message_still_fails_softly() {
        let body = r#"{"status":"failure","message":{"code":3,"text":"bad"}}"#;
        let response = Response::wrap(serde_json::from_str::<RawResponse>(body).unwrap());
        assert!(!response.is_successful());
        assert_eq!(response.error_message(), Some(r#"{"code":3,"text":"bad"}"#));

        let nested = raw(json!({"status": false, "message": {"error": {"message": "rate limited"}}}));
        assert_eq!(nested.message.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_non_string_bookmark_shapes() {
        let body = r#"{"status":"success","data":[1],"bookmark":["b1"]}"#;
        let response = Response::wrap(serde_json::from_str::<RawResponse>(body).unwrap());
        assert!(response.is_successful());
        assert_eq!(response.bookmark(), Some("b1"));

        let odd = raw(json!({"status": true, "data": [1], "bookmark": {"next": 2}}));
        assert_eq!(odd.bookmark, None);

        let null = raw(json!({"status": true, "bookmark": null}));
        assert_eq!(null.bookmark, None);
    }
}
