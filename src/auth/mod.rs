//
//  pinbot
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Session Credentials
//!
//! pinbot does not log in, refresh cookies or store secrets. The caller
//! brings a session it already holds, and the client attaches it to every
//! request. Whether a credential is attached is what providers check before
//! session-gated operations.
//!
//! ## Supported Credentials
//!
//! - **Cookie**: a raw `Cookie` header value copied from a logged-in browser.
//! - **Bearer**: an access token sent as `Authorization: Bearer <token>`.
//!
//! ## Example
//!
//! ```rust
//! use pinbot::auth::SessionCredential;
//!
//! let session = SessionCredential::parse("bearer:abc123").unwrap();
//! assert_eq!(session, SessionCredential::bearer("abc123"));
//! ```

use reqwest::blocking::RequestBuilder;
use reqwest::header::COOKIE;

/// A session credential held by the caller.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionCredential {
    /// Raw `Cookie` header value.
    Cookie {
        /// The header value, e.g. `_pinterest_sess=...; csrftoken=...`
        value: String,
    },
    /// Bearer access token.
    Bearer {
        /// The token string
        token: String,
    },
}

impl SessionCredential {
    pub fn cookie(value: impl Into<String>) -> Self {
        Self::Cookie {
            value: value.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Parses the `--session` / `PINBOT_SESSION` form.
    ///
    /// `bearer:<token>` yields a bearer credential, `cookie:<value>` or any
    /// other non-empty string yields a cookie credential. Blank input yields
    /// `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(token) = raw.strip_prefix("bearer:") {
            return validate(token).map(Self::bearer);
        }
        if let Some(value) = raw.strip_prefix("cookie:") {
            return validate(value).map(Self::cookie);
        }
        Some(Self::cookie(raw))
    }

    /// Adds the credential to an outgoing request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Cookie { value } => request.header(COOKIE, value.as_str()),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}

fn validate(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cookie { .. } => f.write_str("SessionCredential::Cookie(***)"),
            Self::Bearer { .. } => f.write_str("SessionCredential::Bearer(***)"),
        }
    }
}
