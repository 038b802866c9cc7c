// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List built-in locales

use ago_core::{Config, BUILTIN_IDS};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::{format_max, OutputFormat};

#[derive(Args, Debug)]
pub struct LocalesArgs {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Debug, Serialize)]
struct LocaleSummary<'a> {
    id: &'a str,
    max: String,
    layout: &'a str,
    example: String,
}

impl<'a> LocaleSummary<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            id: config.locale_id(),
            max: format_max(config.max()),
            layout: config.default_layout(),
            example: config.format_relative_duration(chrono::TimeDelta::minutes(5)),
        }
    }
}

pub fn handle(args: LocalesArgs) -> Result<String> {
    let summaries: Vec<_> = BUILTIN_IDS
        .iter()
        .filter_map(|id| ago_core::builtin(id))
        .map(LocaleSummary::new)
        .collect();

    match args.output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => {
            let width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
            let lines: Vec<_> = summaries
                .iter()
                .map(|s| {
                    format!(
                        "{:width$}  {:>4}  {:10}  {}",
                        s.id, s.max, s.layout, s.example
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "locales_tests.rs"]
mod tests;
