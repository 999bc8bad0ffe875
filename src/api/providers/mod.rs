//
//  pinbot
//  api/providers/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource providers.
//!
//! A provider is a named group of methods for one resource type. Each method
//! builds a [`Params`] map, picks an endpoint from the provider's
//! [`ProviderConfig`], sends it through the shared [`HttpExecutor`] and
//! normalizes the body into a [`Response`].
//!
//! # Architecture
//!
//! ```text
//! Boards / Pins / Pinners
//!   ├── Provider          (exec_get, exec_post, paginate, session gate)
//!   └── capabilities      (Searchable, Followable, HasFollowers, CanBeDeleted)
//!         │
//!         ▼
//!   HttpExecutor ──► RawResponse ──► Response ──► data / bool / Pagination
//! ```
//!
//! Session gating lives in one place: every call goes through
//! [`Provider::call`], which rejects operations listed in
//! [`ProviderConfig::login_required_for`] before anything is sent.

mod boards;
mod capabilities;
mod pinners;
mod pins;

pub use boards::{BoardPrivacy, Boards};
pub use capabilities::{CanBeDeleted, Followable, HasFollowers, Searchable};
pub use pinners::Pinners;
pub use pins::{NewPin, Pins};

use std::collections::{BTreeMap, BTreeSet};

use crate::api::client::HttpExecutor;
use crate::api::common::{paginate_over, ApiError, HttpMethod, Params, Pagination, Request, Response};

/// Name of the parameter carrying the pagination cursor.
pub const BOOKMARK_PARAM: &str = "bookmark";

/// Per-provider settings: endpoints, id field names and session requirements.
///
/// # Example
///
/// ```rust
/// use pinbot::api::providers::ProviderConfig;
///
/// let config = ProviderConfig::new("boards")
///     .with_entity_id_name("board_id")
///     .with_endpoint("follow", "resource/BoardFollowResource/create/")
///     .with_login_required(["follow"]);
///
/// assert!(config.requires_login("follow"));
/// assert_eq!(config.endpoint("follow").unwrap(), "resource/BoardFollowResource/create/");
/// assert!(config.endpoint("unfollow").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    name: String,
    entity_id_name: String,
    followers_for: String,
    search_scope: String,
    endpoints: BTreeMap<String, String>,
    login_required_for: BTreeSet<String>,
}

impl ProviderConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parameter name used for follow/unfollow/delete requests.
    pub fn with_entity_id_name(mut self, name: impl Into<String>) -> Self {
        self.entity_id_name = name.into();
        self
    }

    /// Parameter name used for follower listings.
    pub fn with_followers_for(mut self, name: impl Into<String>) -> Self {
        self.followers_for = name.into();
        self
    }

    pub fn with_search_scope(mut self, scope: impl Into<String>) -> Self {
        self.search_scope = scope.into();
        self
    }

    /// Sets (or replaces) the endpoint for an operation.
    pub fn with_endpoint(mut self, operation: impl Into<String>, endpoint: impl Into<String>) -> Self {
        self.endpoints.insert(operation.into(), endpoint.into());
        self
    }

    /// Marks operations as requiring an authenticated session.
    pub fn with_login_required<I, S>(mut self, operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.login_required_for
            .extend(operations.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity_id_name(&self) -> &str {
        &self.entity_id_name
    }

    pub fn followers_for(&self) -> &str {
        &self.followers_for
    }

    pub fn search_scope(&self) -> &str {
        &self.search_scope
    }

    pub fn login_required_for(&self) -> impl Iterator<Item = &str> {
        self.login_required_for.iter().map(String::as_str)
    }

    pub fn requires_login(&self, operation: &str) -> bool {
        self.login_required_for.contains(operation)
    }

    /// Looks up the endpoint for an operation.
    pub fn endpoint(&self, operation: &str) -> Result<&str, ApiError> {
        self.endpoints
            .get(operation)
            .map(String::as_str)
            .ok_or_else(|| ApiError::UnknownEndpoint {
                provider: self.name.clone(),
                operation: operation.to_string(),
            })
    }
}

/// Shared behaviour of every resource provider.
///
/// Implementors only supply [`executor`](Self::executor) and
/// [`config`](Self::config); everything else is provided.
pub trait Provider {
    fn executor(&self) -> &dyn HttpExecutor;

    fn config(&self) -> &ProviderConfig;

    /// Fails with `AuthenticationRequired` if `operation` is session-gated
    /// and no session is attached.
    fn ensure_session(&self, operation: &str) -> Result<(), ApiError> {
        if self.config().requires_login(operation) && !self.executor().has_session() {
            tracing::debug!(
                "Rejected {}::{} without a session",
                self.config().name(),
                operation
            );
            return Err(ApiError::AuthenticationRequired {
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    /// Gate, resolve, send and normalize one call.
    fn call(&self, method: HttpMethod, operation: &str, params: Params) -> Result<Response, ApiError> {
        self.ensure_session(operation)?;
        let endpoint = self.config().endpoint(operation)?;
        let raw = self.executor().execute(&Request::new(method, endpoint, params))?;
        let response = Response::wrap(raw);
        if !response.is_successful() {
            tracing::debug!(
                "{}::{} failed upstream: {}",
                self.config().name(),
                operation,
                response.error_message().unwrap_or("no message")
            );
        }
        Ok(response)
    }

    fn exec_get(&self, operation: &str, params: Params) -> Result<Response, ApiError> {
        self.call(HttpMethod::Get, operation, params)
    }

    fn exec_post(&self, operation: &str, params: Params) -> Result<Response, ApiError> {
        self.call(HttpMethod::Post, operation, params)
    }

    /// POST whose only interesting outcome is success.
    fn exec_post_ok(&self, operation: &str, params: Params) -> Result<bool, ApiError> {
        self.exec_post(operation, params).map(|r| r.is_successful())
    }

    /// GET for one page; the bookmark, if any, is added to the params.
    fn exec_get_with_pagination(
        &self,
        operation: &str,
        params: Params,
        bookmark: Option<&str>,
    ) -> Result<Response, ApiError> {
        let params = match bookmark {
            Some(b) => params.with(BOOKMARK_PARAM, b),
            None => params,
        };
        self.exec_get(operation, params)
    }

    /// Lazily pages through a GET operation.
    fn paginate(&self, operation: &str, params: Params, limit: usize) -> Pagination<'_> {
        let operation = operation.to_string();
        paginate_over(
            move |params: &Params, bookmark: Option<&str>| {
                self.exec_get_with_pagination(&operation, params.clone(), bookmark)
            },
            params,
            limit,
        )
    }
}
