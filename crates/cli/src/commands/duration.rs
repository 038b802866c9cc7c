// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Format a bare duration without a timestamp

use ago_core::parse_duration;
use anyhow::{Context, Result};
use chrono::TimeDelta;
use clap::Args;

#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Duration to format (e.g. "45s", "90m", "2y")
    #[arg(value_name = "DURATION")]
    pub duration: String,

    /// Phrase the duration as lying ahead ("in 5 minutes")
    #[arg(long)]
    pub future: bool,

    /// Print only the phrase, without past/future wording
    #[arg(long, conflicts_with = "future")]
    pub bare: bool,

    /// Built-in locale id or path to a locale file
    #[arg(short, long, value_name = "ID|FILE", default_value = "en")]
    pub locale: String,
}

pub fn handle(args: DurationArgs) -> Result<String> {
    let d = parse_duration(&args.duration)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("invalid duration '{}'", args.duration))?;
    let config = super::load_config(&args.locale)?;
    if args.bare {
        return Ok(config.duration_phrase(d));
    }
    let delta = TimeDelta::from_std(d)
        .with_context(|| format!("duration '{}' is too large", args.duration))?;
    let delta = if args.future { -delta } else { delta };
    Ok(config.format_relative_duration(delta))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
