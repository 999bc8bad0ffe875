//
//  pinbot
//  cli/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::providers::{Followable, HasFollowers, Searchable};

use super::rows::{PinRow, UserRow};
use super::{print_pages, print_record, report, GlobalOptions};

/// Work with users
#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// View a user's profile
    Info(UserArgs),

    /// List a user's pins
    Pins(UserListArgs),

    /// List a user's followers
    Followers(UserListArgs),

    /// List who a user follows
    Following(UserListArgs),

    /// Follow a user
    Follow(UserIdArgs),

    /// Unfollow a user
    Unfollow(UserIdArgs),

    /// Search users
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct UserArgs {
    /// Username
    pub username: String,
}

#[derive(Args, Debug)]
pub struct UserIdArgs {
    /// User ID
    pub user_id: String,
}

#[derive(Args, Debug)]
pub struct UserListArgs {
    /// Username
    pub username: String,

    /// Maximum number of items to list (0 for all)
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (0 for all)
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: usize,
}

impl UsersCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let bot = global.bot()?;
        let pinners = bot.pinners();

        match &self.command {
            UsersSubcommand::Info(args) => {
                print_record(pinners.info(&args.username)?, global, "user", UserRow::from_value)
            }
            UsersSubcommand::Pins(args) => {
                print_pages(pinners.pins(&args.username, args.limit), global, PinRow::from_value)
            }
            UsersSubcommand::Followers(args) => print_pages(
                pinners.followers(&args.username, args.limit),
                global,
                UserRow::from_value,
            ),
            UsersSubcommand::Following(args) => print_pages(
                pinners.following(&args.username, args.limit),
                global,
                UserRow::from_value,
            ),
            UsersSubcommand::Follow(args) => {
                let ok = pinners.follow(&args.user_id)?;
                report(ok, global, &format!("Following user {}", args.user_id))
            }
            UsersSubcommand::Unfollow(args) => {
                let ok = pinners.unfollow(&args.user_id)?;
                report(ok, global, &format!("Unfollowed user {}", args.user_id))
            }
            UsersSubcommand::Search(args) => {
                print_pages(pinners.search(&args.query, args.limit), global, UserRow::from_value)
            }
        }
    }
}
