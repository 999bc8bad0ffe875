//
//  pinbot
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Pinbot Library
//!
//! A client library and command-line tool for Pinterest's internal
//! resource endpoints.
//!
//! ## Overview
//!
//! Requests go through an [`HttpExecutor`](api::HttpExecutor), come back as
//! a [`Response`](api::Response), and are grouped into resource providers
//! (boards, pins, pinners). Listing operations return lazy
//! [`Pagination`](api::Pagination) iterators that follow bookmarks page by
//! page until the upstream runs dry or a limit is reached.
//!
//! ## Module Structure
//!
//! - [`api`]: Executor, response wrapper, pagination and resource providers
//! - [`auth`]: Session credentials
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pinbot::{Config, PinClient, Pinbot};
//!
//! let config = Config::load().expect("Failed to load config");
//! let bot = Pinbot::new(PinClient::from_config(&config).expect("client"));
//!
//! for pin in bot.boards().pins("553942260544479869", 50) {
//!     println!("{}", pin.expect("page")["id"]);
//! }
//! ```
//!
//! ## Session Requirements
//!
//! | Operation | Anonymous | Session |
//! |-----------|-----------|---------|
//! | Board, pin and user lookups | Yes | Yes |
//! | Search and listings | Yes | Yes |
//! | Create, update, delete | No | Yes |
//! | Follow, unfollow, like, comment | No | Yes |

/// API client and resource providers.
///
/// The executor handles transport and session headers; providers map named
/// operations onto endpoints and enforce which of them need a session.
pub mod api;

/// Session credentials applied to outgoing requests.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/pinbot/config.toml`
/// - macOS: `~/Library/Application Support/pinbot/config.toml`
/// - Windows: `%APPDATA%\pinbot\config.toml`
pub mod config;

/// Output formatting for table and JSON modes.
pub mod output;

pub use api::{ApiError, PinClient, Pinbot};
pub use cli::Cli;
pub use config::Config;

/// Application name, used for the binary and configuration paths.
pub const APP_NAME: &str = "pinbot";

/// Application version, taken from Cargo.toml at compile time.
///
/// ```rust
/// use pinbot::VERSION;
///
/// println!("pinbot version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The operation needs a session and none was configured.
    ///
    /// Pass `--session`, set `PINBOT_SESSION`, or run
    /// `pinbot config set session.cookie <value>`.
    pub const AUTH_ERROR: i32 = 4;

    /// The upstream answered 404.
    pub const NOT_FOUND: i32 = 8;

    /// The upstream answered 429.
    pub const RATE_LIMIT: i32 = 32;
}

/// Maps an error chain onto an exit code.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::AuthenticationRequired { .. }) => exit_codes::AUTH_ERROR,
        Some(ApiError::HttpStatus { status: 404, .. }) => exit_codes::NOT_FOUND,
        Some(ApiError::HttpStatus { status: 429, .. }) => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_auth_required() {
        let err = anyhow::Error::new(ApiError::AuthenticationRequired {
            operation: "create".to_string(),
        });
        assert_eq!(exit_code_for(&err), exit_codes::AUTH_ERROR);
    }

    #[test]
    fn test_exit_code_for_http_status() {
        let not_found = anyhow::Error::new(ApiError::HttpStatus {
            status: 404,
            message: "missing".to_string(),
        });
        let limited = anyhow::Error::new(ApiError::HttpStatus {
            status: 429,
            message: "slow down".to_string(),
        });
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);
        assert_eq!(exit_code_for(&limited), exit_codes::RATE_LIMIT);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), exit_codes::ERROR);
    }
}
