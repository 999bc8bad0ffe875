//
//  pinbot
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the TOML config file. Session secrets are never echoed
//! back; `get session` only reports whether one is stored.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::Config;

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Value to set
    pub value: String,
}

impl ConfigCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => {
                println!("{}", global.config_path()?.display());
                Ok(())
            }
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        match config.get(&args.key) {
            Some(value) => {
                println!("{}", value);
                Ok(())
            }
            None if Config::keys().contains(&args.key.as_str()) => Ok(()),
            None => bail!(
                "Unknown configuration key: {}. Valid keys: {}",
                args.key,
                Config::keys().join(", ")
            ),
        }
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = global.load_config()?;

        if !config.set(&args.key, args.value.clone()) {
            if Config::keys().contains(&args.key.as_str()) {
                bail!("Invalid value for {}: {}", args.key, args.value);
            }
            bail!(
                "Unknown configuration key: {}. Valid keys: {}",
                args.key,
                Config::keys().join(", ")
            );
        }
        config.save_to(&path)?;
        tracing::debug!("Saved config to {}", path.display());

        if !global.json {
            global.writer().write_success(&format!("Set {}", args.key));
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let color = global.writer().color_enabled();
        for key in ["base_url", "user_agent", "timeout_secs", "session"] {
            let value = config.get(key).unwrap_or_default();
            if color {
                println!("{} = {}", style(key).cyan(), value);
            } else {
                println!("{} = {}", key, value);
            }
        }
        Ok(())
    }
}
