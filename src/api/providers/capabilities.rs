//
//  pinbot
//  api/providers/capabilities.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Small capabilities shared by several providers.
//!
//! Each trait contributes one to three provided methods and needs nothing
//! but [`Provider`]: the endpoints and id field names come from the host's
//! [`ProviderConfig`](super::ProviderConfig). A provider opts in with an
//! empty `impl`.

use super::Provider;
use crate::api::common::{paginate_over, ApiError, Pagination, Params};

/// Keyword search within the provider's scope.
///
/// The first page goes to the `search` endpoint, later pages (which carry a
/// bookmark) to `search_paginated`.
pub trait Searchable: Provider {
    fn search(&self, query: &str, limit: usize) -> Pagination<'_> {
        let params = Params::new()
            .with("scope", self.config().search_scope())
            .with("query", query);

        paginate_over(
            move |params: &Params, bookmark: Option<&str>| {
                let operation = if bookmark.is_some() {
                    "search_paginated"
                } else {
                    "search"
                };
                self.exec_get_with_pagination(operation, params.clone(), bookmark)
            },
            params,
            limit,
        )
    }
}

/// Follow and unfollow by entity id.
pub trait Followable: Provider {
    fn follow(&self, entity_id: &str) -> Result<bool, ApiError> {
        self.exec_post_ok("follow", self.follow_request_query(entity_id))
    }

    fn unfollow(&self, entity_id: &str) -> Result<bool, ApiError> {
        self.exec_post_ok("unfollow", self.follow_request_query(entity_id))
    }

    fn follow_request_query(&self, entity_id: &str) -> Params {
        Params::new().with(self.config().entity_id_name(), entity_id)
    }
}

/// Paginated follower listing.
pub trait HasFollowers: Provider {
    fn followers(&self, entity_id: &str, limit: usize) -> Pagination<'_> {
        let params = Params::new().with(self.config().followers_for(), entity_id);
        self.paginate("followers", params, limit)
    }
}

/// Deletion by entity id.
pub trait CanBeDeleted: Provider {
    fn delete(&self, entity_id: &str) -> Result<bool, ApiError> {
        let params = Params::new().with(self.config().entity_id_name(), entity_id);
        self.exec_post_ok("delete", params)
    }
}
