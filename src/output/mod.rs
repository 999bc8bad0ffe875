//
//  pinbot
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the pinbot CLI:
//!
//! - **Table format**: Human-readable tables for interactive terminal use
//! - **JSON format**: Machine-readable JSON for scripting and automation
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for records that know their table columns
//!
//! ## Example
//!
//! ```rust,ignore
//! use pinbot::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&boards)?;
//! writer.write_success("Board created");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use console::style;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format with optional color support.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting.
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer; color follows terminal capabilities.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Writes a single record: JSON, or a two-column property table.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                let mut builder = TableBuilder::new().color(self.color).headers(["FIELD", "VALUE"]);
                for (header, cell) in T::headers().iter().zip(value.row()) {
                    builder = builder.row([header.to_string(), cell]);
                }
                builder.print();
                Ok(())
            }
        }
    }

    /// Writes a list of records: JSON array, or one table row per record.
    pub fn write_list<T: Serialize + TableOutput>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values),
            OutputFormat::Table => {
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::headers().iter().copied())
                    .rows(values.iter().map(|v| v.row()))
                    .print();
                Ok(())
            }
        }
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Records that can be rendered as table rows.
pub trait TableOutput {
    /// Column headers, in row order.
    fn headers() -> &'static [&'static str];

    /// Cell values for this record.
    fn row(&self) -> Vec<String>;
}
