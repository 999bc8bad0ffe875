//
//  pinbot
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the pieces every resource provider is built from:
//! the error type, the request parameter map, the wrapped response and the
//! bookmark-driven pagination iterator.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Params`] / [`ParamValue`] - Flat request parameter mapping
//! - [`Request`] - An immutable method + endpoint + params triple
//! - [`RawResponse`] / [`Response`] - Decoded body and its normalized form
//! - [`Pagination`] - Lazy, pull-based iterator over paged resources
//!
//! # Example
//!
//! ```rust
//! use pinbot::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthenticationRequired { operation }) => {
//!             println!("'{}' needs an active session", operation)
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - An upstream body whose status flag says "failed" is *not* an error. It
//!   becomes a [`Response`] with `is_successful() == false`.
//! - Only transport faults and precondition violations are `Err`.

use thiserror::Error;

mod pagination;
mod params;
mod response;

pub use pagination::*;
pub use params::*;
pub use response::*;

/// Unified error type for all API operations.
///
/// # Variants
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Transport` | The network round trip itself failed |
/// | `HttpStatus` | The server answered with a non-2xx status |
/// | `Decode` | The body was not the expected JSON shape |
/// | `AuthenticationRequired` | A session-gated call was made without a session |
/// | `UnknownEndpoint` | A provider config has no endpoint for an operation |
/// | `InvalidUrl` | The base URL and endpoint could not be joined |
///
/// `AuthenticationRequired` is always raised before any request is sent.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors and other
    /// transport-layer issues.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
        /// Message extracted from the response body, or the raw body
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation requires an authenticated session and none is attached.
    #[error("Authentication required: '{operation}' needs an active session")]
    AuthenticationRequired {
        /// Name of the rejected operation (e.g. `create`)
        operation: String,
    },

    /// The provider configuration has no endpoint for an operation.
    #[error("No endpoint configured for {provider}::{operation}")]
    UnknownEndpoint {
        /// Provider name (e.g. `boards`)
        provider: String,
        /// Operation name (e.g. `follow`)
        operation: String,
    },

    /// The endpoint could not be resolved into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Returns `true` for faults of the transport layer (network or HTTP status).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Returns `true` if the call was rejected for lack of a session.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthenticationRequired { .. })
    }
}
