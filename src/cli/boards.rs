//
//  pinbot
//  cli/boards.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Board commands
//!
//! Listing and lookups work anonymously. Creating, updating, deleting and
//! following boards need a session (`--session` or `PINBOT_SESSION`).

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::Params;
use crate::api::providers::{BoardPrivacy, CanBeDeleted, Followable, HasFollowers, Searchable};

use super::rows::{BoardRow, PinRow, UserRow};
use super::{print_pages, print_record, report, GlobalOptions};

/// Work with boards
#[derive(Args, Debug)]
pub struct BoardsCommand {
    #[command(subcommand)]
    pub command: BoardsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BoardsSubcommand {
    /// List a user's boards
    #[command(visible_alias = "ls")]
    List(UserArgs),

    /// View a board by owner and slug
    Info(InfoArgs),

    /// List pins on a board
    Pins(BoardListArgs),

    /// Create a board
    Create(CreateArgs),

    /// Update a board
    Update(UpdateArgs),

    /// Delete a board
    Delete(BoardArgs),

    /// Follow a board
    Follow(BoardArgs),

    /// Unfollow a board
    Unfollow(BoardArgs),

    /// List a board's followers
    Followers(BoardListArgs),

    /// Search boards
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct UserArgs {
    /// Username
    pub username: String,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Board owner's username
    pub username: String,

    /// Board slug or name
    pub board: String,
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Board ID
    pub board_id: String,
}

#[derive(Args, Debug)]
pub struct BoardListArgs {
    /// Board ID
    pub board_id: String,

    /// Maximum number of items to list (0 for all)
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Board name
    pub name: String,

    /// Board description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Board privacy
    #[arg(long, short = 'p', default_value = "public", value_parser = ["public", "secret"])]
    pub privacy: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Board ID
    pub board_id: String,

    /// New name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// New category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// New privacy
    #[arg(long, short = 'p', value_parser = ["public", "secret"])]
    pub privacy: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (0 for all)
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: usize,
}

impl BoardsCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let bot = global.bot()?;
        let boards = bot.boards();

        match &self.command {
            BoardsSubcommand::List(args) => {
                let data = boards.for_user(&args.username)?;
                let items = data
                    .as_ref()
                    .and_then(|d| d.as_array())
                    .cloned()
                    .unwrap_or_default();
                let writer = global.writer();
                if global.json {
                    crate::output::write_json(&items)
                } else if items.is_empty() {
                    println!("No boards found for {}.", args.username);
                    Ok(())
                } else {
                    let rows: Vec<BoardRow> = items.iter().map(BoardRow::from_value).collect();
                    writer.write_list(&rows)
                }
            }
            BoardsSubcommand::Info(args) => print_record(
                boards.info(&args.username, &args.board)?,
                global,
                "board",
                BoardRow::from_value,
            ),
            BoardsSubcommand::Pins(args) => {
                print_pages(boards.pins(&args.board_id, args.limit), global, PinRow::from_value)
            }
            BoardsSubcommand::Create(args) => {
                let privacy: BoardPrivacy = args.privacy.parse().map_err(anyhow::Error::msg)?;
                let ok = boards.create(&args.name, &args.description, privacy)?;
                report(ok, global, &format!("Created board {}", args.name))
            }
            BoardsSubcommand::Update(args) => {
                let attributes = Params::new()
                    .with_opt("name", args.name.as_deref())
                    .with_opt("description", args.description.as_deref())
                    .with_opt("category", args.category.as_deref())
                    .with_opt("privacy", args.privacy.as_deref());
                let ok = boards.update(&args.board_id, attributes)?;
                report(ok, global, &format!("Updated board {}", args.board_id))
            }
            BoardsSubcommand::Delete(args) => {
                let ok = boards.delete(&args.board_id)?;
                report(ok, global, &format!("Deleted board {}", args.board_id))
            }
            BoardsSubcommand::Follow(args) => {
                let ok = boards.follow(&args.board_id)?;
                report(ok, global, &format!("Following board {}", args.board_id))
            }
            BoardsSubcommand::Unfollow(args) => {
                let ok = boards.unfollow(&args.board_id)?;
                report(ok, global, &format!("Unfollowed board {}", args.board_id))
            }
            BoardsSubcommand::Followers(args) => print_pages(
                boards.followers(&args.board_id, args.limit),
                global,
                UserRow::from_value,
            ),
            BoardsSubcommand::Search(args) => {
                print_pages(boards.search(&args.query, args.limit), global, BoardRow::from_value)
            }
        }
    }
}
