//
//  pinbot
//  api/common/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request parameters and the immutable request value.
//!
//! Every provider method assembles a [`Params`] map from its named inputs and
//! hands it, together with a fixed endpoint, to the executor as a
//! [`Request`]. Keys are kept sorted so the encoded query is deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single parameter value: a scalar or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Returns the string form of a scalar, or `None` for lists.
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::List(_) => None,
        }
    }

    /// Returns the inner string if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    fn flatten_into(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            Self::List(values) => {
                for value in values {
                    value.flatten_into(key, out);
                }
            }
            scalar => {
                if let Some(s) = scalar.as_scalar() {
                    out.push((key.to_string(), s));
                }
            }
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            scalar => write!(f, "{}", scalar.as_scalar().unwrap_or_default()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Values past `i64::MAX` are sent as their decimal text.
impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Str(value.to_string()),
        }
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// A flat, ordered mapping of parameter names to values.
///
/// # Example
///
/// ```rust
/// use pinbot::api::common::Params;
///
/// let defaults = Params::new().with("category", "other").with("board_id", "42");
/// let merged = defaults.merge(Params::new().with("privacy", "secret"));
///
/// assert_eq!(merged.get_str("category"), Some("other"));
/// assert_eq!(merged.get_str("privacy"), Some("secret"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts only when `value` is `Some`.
    pub fn with_opt<V: Into<ParamValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Overlays `other` on top of `self`; keys from `other` win.
    pub fn merge(mut self, other: Params) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Form/query encoding pairs. Lists become repeated keys.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            value.flatten_into(key, &mut pairs);
        }
        pairs
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// HTTP method used for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A request described as plain data. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: HttpMethod,
    endpoint: String,
    params: Params,
}

impl Request {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>, params: Params) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params,
        }
    }

    pub fn get(endpoint: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Get, endpoint, params)
    }

    pub fn post(endpoint: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Post, endpoint, params)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_right_hand_side_wins() {
        let base = Params::new().with("category", "other").with("board_id", "1");
        let merged = base.merge(Params::new().with("category", "art"));
        assert_eq!(merged.get_str("category"), Some("art"));
        assert_eq!(merged.get_str("board_id"), Some("1"));
    }

    #[test]
    fn test_to_pairs_flattens_lists_and_scalars() {
        let params = Params::new()
            .with("ids", vec!["a", "b"])
            .with("limit", 10i64)
            .with("secret", false);
        assert_eq!(
            params.to_pairs(),
            vec![
                ("ids".to_string(), "a".to_string()),
                ("ids".to_string(), "b".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("secret".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = Params::new()
            .with_opt("link", None::<&str>)
            .with_opt("description", Some("hello"));
        assert!(!params.contains_key("link"));
        assert_eq!(params.get_str("description"), Some("hello"));
    }

    #[test]
    fn test_request_accessors() {
        let req = Request::post("resource/BoardResource/create/", Params::new().with("name", "x"));
        assert_eq!(req.method(), HttpMethod::Post);
        assert_eq!(req.endpoint(), "resource/BoardResource/create/");
        assert_eq!(req.params().get_str("name"), Some("x"));
    }

    #[test]
    fn test_large_u64_does_not_wrap() {
        assert_eq!(ParamValue::from(42u64), ParamValue::Int(42));
        assert_eq!(
            ParamValue::from(u64::MAX),
            ParamValue::Str("18446744073709551615".to_string())
        );
        let pairs = Params::new().with("id", u64::MAX).to_pairs();
        assert_eq!(pairs, vec![("id".to_string(), "18446744073709551615".to_string())]);
    }

    #[test]
    fn test_param_value_display() {
        let value = ParamValue::from(vec![1i64, 2]);
        assert_eq!(value.to_string(), "[1, 2]");
        assert_eq!(ParamValue::from("x").to_string(), "x");
    }
}
