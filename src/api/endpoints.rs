//
//  pinbot
//  api/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upstream resource endpoints, relative to the base URL.
//!
//! These are only the defaults baked into each provider's
//! [`ProviderConfig`](super::providers::ProviderConfig); callers can point any
//! operation somewhere else.

// Boards
pub const GET_BOARDS: &str = "resource/BoardsResource/get/";
pub const BOARD_FEED: &str = "resource/BoardFeedResource/get/";
pub const CREATE_BOARD: &str = "resource/BoardResource/create/";
pub const UPDATE_BOARD: &str = "resource/BoardResource/update/";
pub const DELETE_BOARD: &str = "resource/BoardResource/delete/";
pub const FOLLOW_BOARD: &str = "resource/BoardFollowResource/create/";
pub const UNFOLLOW_BOARD: &str = "resource/BoardFollowResource/delete/";
pub const BOARD_FOLLOWERS: &str = "resource/BoardFollowersResource/get/";

// Pins
pub const PIN_INFO: &str = "resource/PinResource/get/";
pub const CREATE_PIN: &str = "resource/PinResource/create/";
pub const UPDATE_PIN: &str = "resource/PinResource/update/";
pub const DELETE_PIN: &str = "resource/PinResource/delete/";
pub const REPIN: &str = "resource/RepinResource/create/";
pub const LIKE_PIN: &str = "resource/PinLikeResource2/create/";
pub const UNLIKE_PIN: &str = "resource/PinLikeResource2/delete/";
pub const COMMENT_PIN: &str = "resource/PinCommentResource/create/";
pub const DELETE_COMMENT_PIN: &str = "resource/PinCommentResource/delete/";

// Users
pub const USER_INFO: &str = "resource/UserResource/get/";
pub const USER_PINS: &str = "resource/UserPinsResource/get/";
pub const USER_FOLLOWERS: &str = "resource/UserFollowersResource/get/";
pub const USER_FOLLOWING: &str = "resource/UserFollowingResource/get/";
pub const FOLLOW_USER: &str = "resource/UserFollowResource/create/";
pub const UNFOLLOW_USER: &str = "resource/UserFollowResource/delete/";

// Search
pub const SEARCH: &str = "resource/SearchResource/get/";
pub const SEARCH_WITH_PAGINATION: &str = "resource/BaseSearchResource/get/";
