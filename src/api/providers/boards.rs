//
//  pinbot
//  api/providers/boards.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Boards provider.
//!
//! Lists a user's boards, reads board details, walks a board's pin feed and
//! creates/updates boards. Deleting, following, follower listings and search
//! come from the capability traits.
//!
//! | Operation | Method | Session |
//! |-----------|--------|---------|
//! | `get_boards` | GET | no |
//! | `board_feed` | GET (paginated) | no |
//! | `create` | POST | yes |
//! | `update` | POST | yes |
//! | `delete` | POST | yes |
//! | `follow` / `unfollow` | POST | yes |
//! | `followers` | GET (paginated) | no |
//! | `search` | GET (paginated) | no |

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::capabilities::{CanBeDeleted, Followable, HasFollowers, Searchable};
use super::{Provider, ProviderConfig};
use crate::api::client::HttpExecutor;
use crate::api::common::{ApiError, Pagination, Params, Response};
use crate::api::endpoints;

/// Category sent with every board update unless the caller overrides it.
pub const DEFAULT_CATEGORY: &str = "other";

/// Board visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardPrivacy {
    #[default]
    Public,
    Secret,
}

impl BoardPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Secret => "secret",
        }
    }
}

impl fmt::Display for BoardPrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardPrivacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "secret" => Ok(Self::Secret),
            other => Err(format!("unknown privacy '{}', expected public or secret", other)),
        }
    }
}

impl ProviderConfig {
    /// Default configuration for the boards provider.
    pub fn boards() -> Self {
        Self::new("boards")
            .with_entity_id_name("board_id")
            .with_followers_for("board_id")
            .with_search_scope("boards")
            .with_endpoint("get_boards", endpoints::GET_BOARDS)
            .with_endpoint("board_feed", endpoints::BOARD_FEED)
            .with_endpoint("create", endpoints::CREATE_BOARD)
            .with_endpoint("update", endpoints::UPDATE_BOARD)
            .with_endpoint("delete", endpoints::DELETE_BOARD)
            .with_endpoint("follow", endpoints::FOLLOW_BOARD)
            .with_endpoint("unfollow", endpoints::UNFOLLOW_BOARD)
            .with_endpoint("followers", endpoints::BOARD_FOLLOWERS)
            .with_endpoint("search", endpoints::SEARCH)
            .with_endpoint("search_paginated", endpoints::SEARCH_WITH_PAGINATION)
            .with_login_required(["create", "update", "delete", "follow", "unfollow"])
    }
}

/// Board operations.
pub struct Boards<'a> {
    executor: &'a dyn HttpExecutor,
    config: ProviderConfig,
}

impl<'a> Boards<'a> {
    pub fn new(executor: &'a dyn HttpExecutor) -> Self {
        Self::with_config(executor, ProviderConfig::boards())
    }

    pub fn with_config(executor: &'a dyn HttpExecutor, config: ProviderConfig) -> Self {
        Self { executor, config }
    }

    /// Boards owned by `username`.
    pub fn for_user(&self, username: &str) -> Result<Option<Value>, ApiError> {
        let params = Params::new().with("username", username);
        Ok(self.exec_get("get_boards", params)?.into_data())
    }

    /// Detailed info about one of `username`'s boards, by slug.
    pub fn info(&self, username: &str, board: &str) -> Result<Option<Value>, ApiError> {
        let params = Params::new()
            .with("username", username)
            .with("slug", board)
            .with("field_set_key", "detailed");
        Ok(self.exec_get("get_boards", params)?.into_data())
    }

    /// Lazily iterates the pins of a board. `limit == 0` means all of them.
    pub fn pins(&self, board_id: &str, limit: usize) -> Pagination<'_> {
        self.paginate("board_feed", Params::new().with("board_id", board_id), limit)
    }

    /// Fetches a single page of a board's pins.
    pub fn get_pins_from_board(&self, board_id: &str, bookmark: Option<&str>) -> Result<Response, ApiError> {
        self.exec_get_with_pagination(
            "board_feed",
            Params::new().with("board_id", board_id),
            bookmark,
        )
    }

    /// Updates a board. Known attributes are `name`, `description`,
    /// `category` and `privacy`; caller values override the defaults.
    pub fn update(&self, board_id: &str, attributes: Params) -> Result<bool, ApiError> {
        self.exec_post_ok("update", update_params(board_id, attributes))
    }

    /// Creates a board.
    pub fn create(&self, name: &str, description: &str, privacy: BoardPrivacy) -> Result<bool, ApiError> {
        let params = Params::new()
            .with("name", name)
            .with("description", description)
            .with("privacy", privacy.as_str());
        self.exec_post_ok("create", params)
    }
}

fn update_params(board_id: &str, attributes: Params) -> Params {
    Params::new()
        .with("board_id", board_id)
        .with("category", DEFAULT_CATEGORY)
        .merge(attributes)
}

impl Provider for Boards<'_> {
    fn executor(&self) -> &dyn HttpExecutor {
        self.executor
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl Searchable for Boards<'_> {}
impl Followable for Boards<'_> {}
impl HasFollowers for Boards<'_> {}
impl CanBeDeleted for Boards<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{HttpMethod, RawResponse};
    use crate::api::providers::test_support::RecordingExecutor;
    use serde_json::json;

    #[test]
    fn test_for_user_returns_payload() {
        let executor = RecordingExecutor::new(vec![RawResponse::success(json!([{"name": "Recipes"}]))]);
        let boards = Boards::new(&executor);

        let data = boards.for_user("alice").unwrap();
        assert_eq!(data, Some(json!([{"name": "Recipes"}])));

        let request = executor.last_request();
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.endpoint(), endpoints::GET_BOARDS);
        assert_eq!(request.params().get_str("username"), Some("alice"));
    }

    #[test]
    fn test_for_user_failure_is_none() {
        let executor = RecordingExecutor::new(vec![RawResponse::failure("no such user")]);
        assert_eq!(Boards::new(&executor).for_user("ghost").unwrap(), None);
    }

    #[test]
    fn test_info_requests_detailed_field_set() {
        let executor = RecordingExecutor::new(vec![RawResponse::success(json!({"id": "1"}))]);
        Boards::new(&executor).info("alice", "recipes").unwrap();

        let params = executor.last_request().params().clone();
        assert_eq!(params.get_str("slug"), Some("recipes"));
        assert_eq!(params.get_str("field_set_key"), Some("detailed"));
    }

    #[test]
    fn test_pins_walks_board_feed() {
        let executor = RecordingExecutor::new(vec![
            RawResponse::success(json!([{"id": "a"}, {"id": "b"}])).with_bookmark("x"),
            RawResponse::success(json!([{"id": "c"}])),
        ]);
        let boards = Boards::new(&executor);
        let ids: Vec<Value> = boards
            .pins("42", 0)
            .map(|pin| pin.unwrap()["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!("a"), json!("b"), json!("c")]);

        let requests = executor.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.endpoint() == endpoints::BOARD_FEED));
        assert!(requests.iter().all(|r| r.params().get_str("board_id") == Some("42")));
        assert_eq!(requests[1].params().get_str("bookmark"), Some("x"));
    }

    #[test]
    fn test_pins_limit_skips_second_page() {
        let executor = RecordingExecutor::new(vec![
            RawResponse::success(json!(["a", "b"])).with_bookmark("x"),
            RawResponse::success(json!(["c"])),
        ]);
        let boards = Boards::new(&executor);
        assert_eq!(boards.pins("42", 2).count(), 2);
        assert_eq!(executor.requests().len(), 1);
    }

    #[test]
    fn test_get_pins_from_board_passes_bookmark() {
        let executor = RecordingExecutor::new(vec![RawResponse::success(json!(["a"]))]);
        let page = Boards::new(&executor).get_pins_from_board("42", Some("cur")).unwrap();
        assert!(page.is_successful());
        assert_eq!(executor.last_request().params().get_str("bookmark"), Some("cur"));
    }

    #[test]
    fn test_update_merges_defaults_with_attributes() {
        let executor = RecordingExecutor::authenticated(vec![RawResponse::success(json!({}))]);
        let ok = Boards::new(&executor)
            .update("42", Params::new().with("privacy", "secret"))
            .unwrap();
        assert!(ok);

        let request = executor.last_request();
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.endpoint(), endpoints::UPDATE_BOARD);
        assert_eq!(request.params().get_str("board_id"), Some("42"));
        assert_eq!(request.params().get_str("category"), Some("other"));
        assert_eq!(request.params().get_str("privacy"), Some("secret"));
    }

    #[test]
    fn test_update_caller_category_wins() {
        let params = update_params("42", Params::new().with("category", "travel"));
        assert_eq!(params.get_str("category"), Some("travel"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_create_without_session_sends_nothing() {
        let executor = RecordingExecutor::new(vec![RawResponse::success(json!({}))]);
        let err = Boards::new(&executor)
            .create("Recipes", "Food", BoardPrivacy::default())
            .unwrap_err();
        assert!(err.is_auth_required());
        assert!(executor.requests().is_empty());
    }

    #[test]
    fn test_create_with_session() {
        let executor = RecordingExecutor::authenticated(vec![RawResponse::success(json!({"id": "9"}))]);
        assert!(Boards::new(&executor)
            .create("Recipes", "Food", BoardPrivacy::Secret)
            .unwrap());

        let params = executor.last_request().params().clone();
        assert_eq!(params.get_str("name"), Some("Recipes"));
        assert_eq!(params.get_str("description"), Some("Food"));
        assert_eq!(params.get_str("privacy"), Some("secret"));
    }

    #[test]
    fn test_create_upstream_failure_is_false() {
        let executor = RecordingExecutor::authenticated(vec![RawResponse::failure("duplicate")]);
        assert!(!Boards::new(&executor)
            .create("Recipes", "Food", BoardPrivacy::Public)
            .unwrap());
    }

    #[test]
    fn test_every_gated_operation_rejected_without_session() {
        let executor = RecordingExecutor::new(vec![]);
        let boards = Boards::new(&executor);

        assert!(boards.update("1", Params::new()).unwrap_err().is_auth_required());
        assert!(boards.delete("1").unwrap_err().is_auth_required());
        assert!(boards.follow("1").unwrap_err().is_auth_required());
        assert!(boards.unfollow("1").unwrap_err().is_auth_required());
        assert!(executor.requests().is_empty());
    }

    #[test]
    fn test_privacy_parsing() {
        assert_eq!("SECRET".parse::<BoardPrivacy>(), Ok(BoardPrivacy::Secret));
        assert_eq!(BoardPrivacy::default().to_string(), "public");
        assert!("hidden".parse::<BoardPrivacy>().is_err());
    }
}
