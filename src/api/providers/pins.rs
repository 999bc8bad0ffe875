//
//  pinbot
//  api/providers/pins.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pins provider.

use serde_json::Value;

use super::capabilities::{CanBeDeleted, Searchable};
use super::{Provider, ProviderConfig};
use crate::api::client::HttpExecutor;
use crate::api::common::{ApiError, Params, Response};
use crate::api::endpoints;

impl ProviderConfig {
    /// Default configuration for the pins provider.
    pub fn pins() -> Self {
        Self::new("pins")
            .with_entity_id_name("id")
            .with_search_scope("pins")
            .with_endpoint("info", endpoints::PIN_INFO)
            .with_endpoint("create", endpoints::CREATE_PIN)
            .with_endpoint("edit", endpoints::UPDATE_PIN)
            .with_endpoint("delete", endpoints::DELETE_PIN)
            .with_endpoint("repin", endpoints::REPIN)
            .with_endpoint("like", endpoints::LIKE_PIN)
            .with_endpoint("unlike", endpoints::UNLIKE_PIN)
            .with_endpoint("comment", endpoints::COMMENT_PIN)
            .with_endpoint("delete_comment", endpoints::DELETE_COMMENT_PIN)
            .with_endpoint("search", endpoints::SEARCH)
            .with_endpoint("search_paginated", endpoints::SEARCH_WITH_PAGINATION)
            .with_login_required([
                "create",
                "edit",
                "delete",
                "repin",
                "like",
                "unlike",
                "comment",
                "delete_comment",
            ])
    }
}

/// A pin to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPin {
    pub image_url: String,
    pub board_id: String,
    pub description: String,
    /// Destination link; defaults to the image URL upstream.
    pub link: Option<String>,
}

impl NewPin {
    fn into_params(self) -> Params {
        let link = self.link.unwrap_or_else(|| self.image_url.clone());
        Params::new()
            .with("method", "scraped")
            .with("image_url", self.image_url)
            .with("board_id", self.board_id)
            .with("description", self.description)
            .with("link", link)
    }
}

/// Pin operations.
pub struct Pins<'a> {
    executor: &'a dyn HttpExecutor,
    config: ProviderConfig,
}

impl<'a> Pins<'a> {
    pub fn new(executor: &'a dyn HttpExecutor) -> Self {
        Self::with_config(executor, ProviderConfig::pins())
    }

    pub fn with_config(executor: &'a dyn HttpExecutor, config: ProviderConfig) -> Self {
        Self { executor, config }
    }

    pub fn info(&self, pin_id: &str) -> Result<Option<Value>, ApiError> {
        let params = Params::new()
            .with("id", pin_id)
            .with("field_set_key", "detailed");
        Ok(self.exec_get("info", params)?.into_data())
    }

    /// Creates a pin. The response carries the created record, when the
    /// upstream returns one.
    pub fn create(&self, pin: NewPin) -> Result<Response, ApiError> {
        self.exec_post("create", pin.into_params())
    }

    /// Saves an existing pin to one of the session user's boards.
    pub fn repin(&self, pin_id: &str, board_id: &str, description: &str) -> Result<Response, ApiError> {
        let params = Params::new()
            .with("pin_id", pin_id)
            .with("board_id", board_id)
            .with("description", description)
            .with("is_video", false);
        self.exec_post("repin", params)
    }

    /// Edits a pin. `None` fields are left unchanged.
    pub fn edit(
        &self,
        pin_id: &str,
        description: Option<&str>,
        link: Option<&str>,
        board_id: Option<&str>,
    ) -> Result<bool, ApiError> {
        let params = Params::new()
            .with("id", pin_id)
            .with_opt("description", description)
            .with_opt("link", link)
            .with_opt("board_id", board_id);
        self.exec_post_ok("edit", params)
    }

    pub fn like(&self, pin_id: &str) -> Result<bool, ApiError> {
        self.exec_post_ok("like", Params::new().with("pin_id", pin_id))
    }

    pub fn unlike(&self, pin_id: &str) -> Result<bool, ApiError> {
        self.exec_post_ok("unlike", Params::new().with("pin_id", pin_id))
    }

    /// Comments on a pin. The response carries the created comment, if any.
    pub fn comment(&self, pin_id: &str, text: &str) -> Result<Response, ApiError> {
        let params = Params::new().with("pin_id", pin_id).with("text", text);
        self.exec_post("comment", params)
    }

    pub fn delete_comment(&self, pin_id: &str, comment_id: &str) -> Result<bool, ApiError> {
        let params = Params::new()
            .with("pin_id", pin_id)
            .with("comment_id", comment_id);
        self.exec_post_ok("delete_comment", params)
    }
}

impl Provider for Pins<'_> {
    fn executor(&self) -> &dyn HttpExecutor {
        self.executor
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl Searchable for Pins<'_> {}
impl CanBeDeleted for Pins<'_> {}
