//
//  pinbot
//  cli/pins.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pin commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::providers::{CanBeDeleted, NewPin, Searchable};

use super::rows::{CommentRow, PinRow};
use super::{print_outcome, print_pages, print_record, report, GlobalOptions};

/// Work with pins
#[derive(Args, Debug)]
pub struct PinsCommand {
    #[command(subcommand)]
    pub command: PinsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PinsSubcommand {
    /// View a pin
    Info(PinArgs),

    /// Search pins
    Search(SearchArgs),

    /// Create a pin from an image URL
    Create(CreateArgs),

    /// Save an existing pin to one of your boards
    Repin(RepinArgs),

    /// Edit a pin
    Edit(EditArgs),

    /// Like a pin
    Like(PinArgs),

    /// Remove a like from a pin
    Unlike(PinArgs),

    /// Comment on a pin
    Comment(CommentArgs),

    /// Delete a pin
    Delete(PinArgs),
}

#[derive(Args, Debug)]
pub struct PinArgs {
    /// Pin ID
    pub pin_id: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (0 for all)
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Image URL
    pub image_url: String,

    /// Target board ID
    #[arg(long, short = 'b')]
    pub board: String,

    /// Pin description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Destination link (defaults to the image URL)
    #[arg(long)]
    pub link: Option<String>,
}

#[derive(Args, Debug)]
pub struct RepinArgs {
    /// Pin ID
    pub pin_id: String,

    /// Target board ID
    #[arg(long, short = 'b')]
    pub board: String,

    /// Description for the repin
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Pin ID
    pub pin_id: String,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// New destination link
    #[arg(long)]
    pub link: Option<String>,

    /// Move to board ID
    #[arg(long, short = 'b')]
    pub board: Option<String>,
}

#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Pin ID
    pub pin_id: String,

    /// Comment text
    pub text: String,
}

impl PinsCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let bot = global.bot()?;
        let pins = bot.pins();

        match &self.command {
            PinsSubcommand::Info(args) => {
                print_record(pins.info(&args.pin_id)?, global, "pin", PinRow::from_value)
            }
            PinsSubcommand::Search(args) => {
                print_pages(pins.search(&args.query, args.limit), global, PinRow::from_value)
            }
            PinsSubcommand::Create(args) => {
                let pin = NewPin {
                    image_url: args.image_url.clone(),
                    board_id: args.board.clone(),
                    description: args.description.clone(),
                    link: args.link.clone(),
                };
                print_outcome(pins.create(pin)?, global, "Created pin", PinRow::from_value)
            }
            PinsSubcommand::Repin(args) => print_outcome(
                pins.repin(&args.pin_id, &args.board, &args.description)?,
                global,
                &format!("Saved pin {} to board {}", args.pin_id, args.board),
                PinRow::from_value,
            ),
            PinsSubcommand::Edit(args) => {
                let ok = pins.edit(
                    &args.pin_id,
                    args.description.as_deref(),
                    args.link.as_deref(),
                    args.board.as_deref(),
                )?;
                report(ok, global, &format!("Updated pin {}", args.pin_id))
            }
            PinsSubcommand::Like(args) => {
                let ok = pins.like(&args.pin_id)?;
                report(ok, global, &format!("Liked pin {}", args.pin_id))
            }
            PinsSubcommand::Unlike(args) => {
                let ok = pins.unlike(&args.pin_id)?;
                report(ok, global, &format!("Removed like from pin {}", args.pin_id))
            }
            PinsSubcommand::Comment(args) => print_outcome(
                pins.comment(&args.pin_id, &args.text)?,
                global,
                &format!("Commented on pin {}", args.pin_id),
                CommentRow::from_value,
            ),
            PinsSubcommand::Delete(args) => {
                let ok = pins.delete(&args.pin_id)?;
                report(ok, global, &format!("Deleted pin {}", args.pin_id))
            }
        }
    }
}
