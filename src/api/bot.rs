//
//  pinbot
//  api/bot.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The [`Pinbot`] facade.
//!
//! Owns one executor and hands out providers that borrow it, so every
//! provider shares the same connection pool and session.

use super::client::HttpExecutor;
use super::providers::{Boards, Pinners, Pins};

/// Entry point owning the shared executor.
pub struct Pinbot<E: HttpExecutor> {
    executor: E,
}

impl<E: HttpExecutor> Pinbot<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn boards(&self) -> Boards<'_> {
        Boards::new(&self.executor)
    }

    pub fn pins(&self) -> Pins<'_> {
        Pins::new(&self.executor)
    }

    pub fn pinners(&self) -> Pinners<'_> {
        Pinners::new(&self.executor)
    }

    pub fn is_authenticated(&self) -> bool {
        self.executor.has_session()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}
