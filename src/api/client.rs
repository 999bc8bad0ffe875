//
//  pinbot
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Executor
//!
//! This module provides the transport seam every provider talks through.
//! [`HttpExecutor`] describes "send this request, give me the decoded body";
//! [`PinClient`] implements it on top of a blocking `reqwest` client.
//!
//! ## Features
//!
//! - Endpoint resolution against a configurable base URL
//! - Query-string encoding for GET, form encoding for POST
//! - Session credential injection
//! - Error handling with messages extracted from the body
//! - Custom User-Agent header
//!
//! The executor never interprets the body's own status flag. A body that says
//! "failed" is returned as data for [`Response`](super::common::Response) to
//! normalize. Only transport faults are errors here.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

use crate::api::common::{ApiError, HttpMethod, Params, RawResponse, Request};
use crate::auth::SessionCredential;
use crate::config::Config;

/// Default upstream origin.
pub const DEFAULT_BASE_URL: &str = "https://www.pinterest.com/";

/// Extracts a human-readable message from an error response body.
///
/// The upstream returns errors in one of these shapes:
/// ```json
/// {"message": "Human readable message"}
/// {"error": {"message": "Human readable message"}}
/// {"resource_response": {"error": {"message": "..."}}}
/// ```
///
/// Falls back to the raw body, or the canonical status text for empty
/// bodies.
pub fn format_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }

        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json
            .pointer("/resource_response/error/message")
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }

    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }

    body.to_string()
}

/// The transport seam between providers and the network.
///
/// Implementations perform exactly one round trip per call and never retry.
/// The body's own failure flag is *not* an error: it comes back inside the
/// [`RawResponse`].
pub trait HttpExecutor {
    /// Performs one round trip.
    fn execute(&self, request: &Request) -> Result<RawResponse, ApiError>;

    /// Whether an authenticated session is attached.
    fn has_session(&self) -> bool;

    fn execute_get(&self, endpoint: &str, params: Params) -> Result<RawResponse, ApiError> {
        self.execute(&Request::get(endpoint, params))
    }

    fn execute_post(&self, endpoint: &str, params: Params) -> Result<RawResponse, ApiError> {
        self.execute(&Request::post(endpoint, params))
    }
}

impl<E: HttpExecutor + ?Sized> HttpExecutor for &E {
    fn execute(&self, request: &Request) -> Result<RawResponse, ApiError> {
        (**self).execute(request)
    }

    fn has_session(&self) -> bool {
        (**self).has_session()
    }
}

/// Blocking HTTP executor backed by `reqwest`.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use pinbot::api::PinClient;
/// use pinbot::auth::SessionCredential;
///
/// let client = PinClient::new("https://www.pinterest.com/")?
///     .with_session(SessionCredential::cookie("_pinterest_sess=..."));
/// assert!(client.is_authenticated());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct PinClient {
    /// The underlying HTTP client
    http: Client,
    /// Origin all endpoints are resolved against
    base_url: Url,
    /// Optional session credential
    session: Option<SessionCredential>,
}

impl PinClient {
    /// Creates a client for `base_url` with default transport settings.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS);
        Self::build(base_url, &format!("pinbot/{}", crate::VERSION), Some(timeout))
    }

    /// Creates a client from the loaded configuration.
    ///
    /// Uses `[client]` for the base URL, user agent and timeout, and attaches
    /// the `[session]` credential when one is configured.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = Self::build(
            &config.client.base_url,
            &config.client.user_agent,
            config.client.timeout(),
        )?;
        Ok(match config.session.credential() {
            Some(session) => client.with_session(session),
            None => client,
        })
    }

    fn build(base_url: &str, user_agent: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let builder = Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(timeout);

        Ok(Self {
            http: builder.build()?,
            base_url: parse_base_url(base_url)?,
            session: None,
        })
    }

    /// Attaches a session credential to every subsequent request.
    pub fn with_session(mut self, session: SessionCredential) -> Self {
        self.session = Some(session);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint against the base URL. Absolute URLs pass through.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(endpoint)?)
    }
}

/// Parses a base URL, making sure relative endpoints join under its path.
fn parse_base_url(base_url: &str) -> Result<Url, url::ParseError> {
    if base_url.ends_with('/') {
        Url::parse(base_url)
    } else {
        Url::parse(&format!("{}/", base_url))
    }
}

impl HttpExecutor for PinClient {
    fn execute(&self, request: &Request) -> Result<RawResponse, ApiError> {
        let url = self.endpoint_url(request.endpoint())?;
        let pairs = request.params().to_pairs();

        let mut builder = match request.method() {
            HttpMethod::Get => self.http.get(url.clone()).query(&pairs),
            HttpMethod::Post => self.http.post(url.clone()).form(&pairs),
        };

        if let Some(session) = &self.session {
            builder = session.apply_to_request(builder);
        }

        let response = builder.send()?;
        let status = response.status();
        tracing::debug!("{} {} -> {}", request.method(), url, status);

        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message: format_api_error(status, &text),
            });
        }

        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }

    fn has_session(&self) -> bool {
        self.is_authenticated()
    }
}
