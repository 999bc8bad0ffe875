//
//  pinbot
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loading, saving and accessing pinbot settings stored as TOML in the
//! platform-specific config directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/pinbot/config.toml`
//! - **macOS**: `~/Library/Application Support/pinbot/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\pinbot\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [client]
//! base_url = "https://www.pinterest.com/"
//! user_agent = "pinbot/0.1.0"
//! timeout_secs = 30
//!
//! [session]
//! cookie = "_pinterest_sess=...; csrftoken=..."
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pinbot::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("timeout_secs", "10".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_BASE_URL;
use crate::auth::SessionCredential;

/// Global configuration container.
///
/// # Notes
///
/// - All fields use `#[serde(default)]` so partial files load cleanly
/// - The file is created on first save if it doesn't exist
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Transport settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Session credential the client attaches to requests.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Transport settings for the HTTP executor.
///
/// | Field | Default |
/// |-------|---------|
/// | `base_url` | `https://www.pinterest.com/` |
/// | `user_agent` | `pinbot/<version>` |
/// | `timeout_secs` | `30` (`0` for none) |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Origin all endpoints are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Request timeout applied when the config does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl ClientConfig {
    /// The transport timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("pinbot/{}", crate::VERSION)
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

/// An already-established session. pinbot never creates one.
///
/// When both are set the bearer token is preferred.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    /// Raw `Cookie` header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    /// Bearer access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionConfig {
    /// The configured credential, if any non-blank value is present.
    pub fn credential(&self) -> Option<SessionCredential> {
        let token = self.token.as_deref().map(str::trim).filter(|t| !t.is_empty());
        if let Some(token) = token {
            return Some(SessionCredential::bearer(token));
        }
        self.cookie
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(SessionCredential::cookie)
    }
}

impl Config {
    /// Loads from the default location, or defaults if the file is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads from `path`, or defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Reads a setting by key. Session secrets are reported as set/unset only.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base_url" => Some(self.client.base_url.clone()),
            "user_agent" => Some(self.client.user_agent.clone()),
            "timeout_secs" => Some(self.client.timeout_secs.to_string()),
            "session" => Some(
                if self.session.credential().is_some() {
                    "set"
                } else {
                    "unset"
                }
                .to_string(),
            ),
            _ => None,
        }
    }

    /// Sets a setting by key. Returns `false` for unknown keys or bad values.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "base_url" => {
                if url::Url::parse(&value).is_err() {
                    return false;
                }
                self.client.base_url = value;
                true
            }
            "user_agent" => {
                self.client.user_agent = value;
                true
            }
            "timeout_secs" => match value.parse::<u64>() {
                Ok(secs) => {
                    self.client.timeout_secs = secs;
                    true
                }
                Err(_) => false,
            },
            "session.cookie" => {
                self.session.cookie = Some(value);
                true
            }
            "session.token" => {
                self.session.token = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Keys accepted by [`get`](Self::get) and [`set`](Self::set).
    pub fn keys() -> &'static [&'static str] {
        &[
            "base_url",
            "user_agent",
            "timeout_secs",
            "session",
            "session.cookie",
            "session.token",
        ]
    }
}
