//
//  pinbot
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bookmark-driven pagination.
//!
//! The upstream pages list resources with an opaque `bookmark` token: each
//! page carries the token for the next one, and an empty token marks the end.
//! [`Pagination`] walks those pages lazily as a plain [`Iterator`].
//!
//! # Overview
//!
//! | Step | Behaviour |
//! |------|-----------|
//! | Fetch | Only when the buffered page is drained and more items are pulled |
//! | Failed page | Ends the sequence without an error |
//! | Transport error | Yielded once as `Err`, then the sequence ends |
//! | Limit reached | Stops mid-page, the next page is never fetched |
//! | Empty / `-end-` bookmark | Ends the sequence after the current page |
//!
//! # Example
//!
//! ```rust
//! use pinbot::api::common::{paginate_over, Params, RawResponse, Response};
//! use serde_json::json;
//!
//! let pages = paginate_over(
//!     |_params: &Params, bookmark: Option<&str>| {
//!         let raw = match bookmark {
//!             None => RawResponse::success(json!(["a", "b"])).with_bookmark("next"),
//!             Some(_) => RawResponse::success(json!(["c"])),
//!         };
//!         Ok(Response::wrap(raw))
//!     },
//!     Params::new(),
//!     0,
//! );
//!
//! let items: Vec<_> = pages.collect::<Result<_, _>>().unwrap();
//! assert_eq!(items, vec![json!("a"), json!("b"), json!("c")]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use serde_json::Value;

use super::{ApiError, Params, Response};

/// Boxed page-fetch capability: `(params, bookmark) -> Response`.
pub type PageFetcher<'a> = Box<dyn Fn(&Params, Option<&str>) -> Result<Response, ApiError> + 'a>;

/// Cursor position of a pagination session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Bookmark to send with the next page request.
    pub bookmark: Option<String>,
    /// Items yielded so far.
    pub fetched: usize,
    /// Maximum items to yield; `0` means unbounded.
    pub limit: usize,
}

impl PaginationState {
    pub fn new(limit: usize) -> Self {
        Self {
            bookmark: None,
            fetched: 0,
            limit,
        }
    }

    /// Whether the item limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.limit > 0 && self.fetched >= self.limit
    }
}

/// Lazy, forward-only sequence of items across pages.
pub struct Pagination<'a> {
    fetcher: PageFetcher<'a>,
    params: Params,
    state: PaginationState,
    buffer: VecDeque<Value>,
    exhausted: bool,
}

/// Starts a pagination session over `fetcher`.
///
/// Nothing is fetched until the first item is pulled.
pub fn paginate_over<'a, F>(fetcher: F, params: Params, limit: usize) -> Pagination<'a>
where
    F: Fn(&Params, Option<&str>) -> Result<Response, ApiError> + 'a,
{
    Pagination::new(fetcher, params, limit)
}

impl<'a> Pagination<'a> {
    pub fn new<F>(fetcher: F, params: Params, limit: usize) -> Self
    where
        F: Fn(&Params, Option<&str>) -> Result<Response, ApiError> + 'a,
    {
        Self {
            fetcher: Box::new(fetcher),
            params,
            state: PaginationState::new(limit),
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Current cursor position.
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    fn finish(&mut self) {
        self.exhausted = true;
        self.buffer.clear();
    }

    /// Fetches the next page into the buffer.
    fn fetch_page(&mut self) -> Result<(), ApiError> {
        let response = (self.fetcher)(&self.params, self.state.bookmark.as_deref())?;

        if !response.is_successful() {
            tracing::debug!(
                "Pagination stopped on failed page: {}",
                response.error_message().unwrap_or("no message")
            );
            self.exhausted = true;
            return Ok(());
        }

        let page = response.into_page();
        match page.bookmark {
            Some(next) if self.state.bookmark.as_deref() == Some(next.as_str()) => {
                tracing::warn!("Upstream repeated bookmark {:?}, stopping pagination", next);
                self.exhausted = true;
            }
            Some(next) => self.state.bookmark = Some(next),
            None => self.exhausted = true,
        }
        self.buffer.extend(page.items);
        Ok(())
    }
}

impl Iterator for Pagination<'_> {
    type Item = Result<Value, ApiError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state.limit_reached() {
                self.finish();
                return None;
            }

            if let Some(item) = self.buffer.pop_front() {
                self.state.fetched += 1;
                return Some(Ok(item));
            }

            if self.exhausted {
                return None;
            }

            if let Err(e) = self.fetch_page() {
                self.finish();
                return Some(Err(e));
            }
        }
    }
}

impl FusedIterator for Pagination<'_> {}

impl std::fmt::Debug for Pagination<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pagination")
            .field("params", &self.params)
            .field("state", &self.state)
            .field("buffered", &self.buffer.len())
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
