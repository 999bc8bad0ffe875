//
//  pinbot
//  api/providers/pinners.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pinners (users) provider.
//!
//! Followers are listed by username while follow/unfollow take the numeric
//! user id, so the two id field names differ here.

use serde_json::Value;

use super::capabilities::{Followable, HasFollowers, Searchable};
use super::{Provider, ProviderConfig};
use crate::api::client::HttpExecutor;
use crate::api::common::{ApiError, Pagination, Params};
use crate::api::endpoints;

impl ProviderConfig {
    /// Default configuration for the pinners provider.
    pub fn pinners() -> Self {
        Self::new("pinners")
            .with_entity_id_name("user_id")
            .with_followers_for("username")
            .with_search_scope("people")
            .with_endpoint("info", endpoints::USER_INFO)
            .with_endpoint("pins", endpoints::USER_PINS)
            .with_endpoint("following", endpoints::USER_FOLLOWING)
            .with_endpoint("followers", endpoints::USER_FOLLOWERS)
            .with_endpoint("follow", endpoints::FOLLOW_USER)
            .with_endpoint("unfollow", endpoints::UNFOLLOW_USER)
            .with_endpoint("search", endpoints::SEARCH)
            .with_endpoint("search_paginated", endpoints::SEARCH_WITH_PAGINATION)
            .with_login_required(["follow", "unfollow"])
    }
}

/// User operations.
pub struct Pinners<'a> {
    executor: &'a dyn HttpExecutor,
    config: ProviderConfig,
}

impl<'a> Pinners<'a> {
    pub fn new(executor: &'a dyn HttpExecutor) -> Self {
        Self::with_config(executor, ProviderConfig::pinners())
    }

    pub fn with_config(executor: &'a dyn HttpExecutor, config: ProviderConfig) -> Self {
        Self { executor, config }
    }

    pub fn info(&self, username: &str) -> Result<Option<Value>, ApiError> {
        let params = Params::new().with("username", username);
        Ok(self.exec_get("info", params)?.into_data())
    }

    /// Lazily iterates a user's pins.
    pub fn pins(&self, username: &str, limit: usize) -> Pagination<'_> {
        self.paginate("pins", Params::new().with("username", username), limit)
    }

    /// Lazily iterates the users `username` follows.
    pub fn following(&self, username: &str, limit: usize) -> Pagination<'_> {
        self.paginate("following", Params::new().with("username", username), limit)
    }
}

impl Provider for Pinners<'_> {
    fn executor(&self) -> &dyn HttpExecutor {
        self.executor
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl Searchable for Pinners<'_> {}
impl Followable for Pinners<'_> {}
impl HasFollowers for Pinners<'_> {}
