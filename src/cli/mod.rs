//
//  pinbot
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod boards;
mod config;
mod pins;
mod rows;
mod users;

pub use boards::BoardsCommand;
pub use config::ConfigCommand;
pub use pins::PinsCommand;
pub use users::UsersCommand;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::api::{Pagination, PinClient, Pinbot, Response};
use crate::auth::SessionCredential;
use crate::config::Config;
use crate::output::{write_json_lines, OutputFormat, OutputWriter, TableOutput};

/// pinbot - Work with Pinterest boards, pins and users from the command line
#[derive(Parser, Debug)]
#[command(
    name = "pinbot",
    version,
    about = "Work with Pinterest boards, pins and users from the command line",
    propagate_version = true,
    after_help = "Use 'pinbot <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Base URL of the upstream service
    #[arg(long, global = true, env = "PINBOT_BASE_URL")]
    pub base_url: Option<String>,

    /// Session credential: a cookie header value, or bearer:<token>
    #[arg(long, global = true, env = "PINBOT_SESSION", hide_env_values = true)]
    pub session: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "PINBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Builds the client from config, with flags and env taking precedence.
    pub fn bot(&self) -> Result<Pinbot<PinClient>> {
        let mut config = self.load_config()?;
        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }

        let mut client = PinClient::from_config(&config)?;
        if let Some(session) = self.session.as_deref().and_then(SessionCredential::parse) {
            client = client.with_session(session);
        }
        tracing::debug!(
            "Using {} (session: {})",
            client.base_url(),
            client.is_authenticated()
        );
        Ok(Pinbot::new(client))
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.format())
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with boards
    #[command(visible_alias = "b")]
    Boards(BoardsCommand),

    /// Work with pins
    #[command(visible_alias = "p")]
    Pins(PinsCommand),

    /// Work with users
    #[command(visible_alias = "u")]
    Users(UsersCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// Prints a paginated listing.
///
/// JSON output streams one item per line as pages arrive; table output
/// collects everything first.
fn print_pages<T, F>(pages: Pagination<'_>, global: &GlobalOptions, to_row: F) -> Result<()>
where
    T: Serialize + TableOutput,
    F: Fn(&Value) -> T,
{
    let writer = global.writer();
    match writer.format() {
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for item in pages {
                write_json_lines(&mut handle, std::iter::once(item?))?;
            }
        }
        OutputFormat::Table => {
            let items = pages.collect::<Result<Vec<_>, _>>()?;
            if items.is_empty() {
                println!("Nothing found.");
                return Ok(());
            }
            let rows: Vec<T> = items.iter().map(&to_row).collect();
            writer.write_list(&rows)?;
            println!("Showing {} item(s)", rows.len());
        }
    }
    Ok(())
}

/// Prints a single optional record, failing when the upstream returned none.
fn print_record<T, F>(data: Option<Value>, global: &GlobalOptions, what: &str, to_row: F) -> Result<()>
where
    T: Serialize + TableOutput,
    F: Fn(&Value) -> T,
{
    let data = data.ok_or_else(|| anyhow::anyhow!("No {} found", what))?;
    let writer = global.writer();
    match writer.format() {
        OutputFormat::Json => crate::output::write_json(&data),
        OutputFormat::Table => writer.write(&to_row(&data)),
    }
}

/// Reports a mutation that may echo back the record it created.
///
/// An upstream refusal becomes an error. A success with an empty payload
/// still counts as success.
fn print_outcome<T, F>(response: Response, global: &GlobalOptions, success: &str, to_row: F) -> Result<()>
where
    T: Serialize + TableOutput,
    F: Fn(&Value) -> T,
{
    if !response.is_successful() {
        anyhow::bail!(
            "The request was rejected upstream: {}",
            response.error_message().unwrap_or("no message")
        );
    }
    let writer = global.writer();
    match (response.into_data(), writer.format()) {
        (Some(data), OutputFormat::Json) => crate::output::write_json(&data),
        (Some(data), OutputFormat::Table) => {
            writer.write_success(success);
            writer.write(&to_row(&data))
        }
        (None, OutputFormat::Json) => Ok(()),
        (None, OutputFormat::Table) => {
            writer.write_success(success);
            Ok(())
        }
    }
}

/// Reports a boolean outcome; an upstream refusal becomes an error.
fn report(ok: bool, global: &GlobalOptions, success: &str) -> Result<()> {
    if !ok {
        anyhow::bail!("The request was rejected upstream");
    }
    if !global.json {
        global.writer().write_success(success);
    }
    Ok(())
}
