//
//  pinbot
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module wraps Pinterest's internal resource endpoints behind typed
//! provider methods.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: The [`HttpExecutor`] seam and its `reqwest` implementation
//! - [`common`]: Params, response normalization, pagination and errors
//! - [`providers`]: Boards, Pins and Pinners plus the shared capabilities
//! - [`endpoints`]: Default endpoint paths
//! - [`bot`]: The [`Pinbot`] facade handing out providers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pinbot::api::{PinClient, Pinbot};
//! use pinbot::api::providers::HasFollowers;
//!
//! let bot = Pinbot::new(PinClient::new("https://www.pinterest.com/")?);
//!
//! for pin in bot.boards().pins("553942260544479869", 50) {
//!     println!("{}", pin?["id"]);
//! }
//!
//! let followers = bot.boards().followers("553942260544479869", 10).count();
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Only transport faults and missing sessions are errors ([`ApiError`]). An
//! upstream "this didn't work" comes back as `Ok(None)`, `Ok(false)` or an
//! empty iterator.

/// Bot facade owning the executor.
pub mod bot;

/// Transport seam and the blocking `reqwest` executor.
pub mod client;

/// Shared request/response/pagination types.
pub mod common;

/// Default endpoint paths.
pub mod endpoints;

/// Resource providers and capabilities.
pub mod providers;

pub use bot::Pinbot;
pub use client::{HttpExecutor, PinClient};
pub use common::{ApiError, Pagination, Params, Response};
