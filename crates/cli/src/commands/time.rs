// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Format a timestamp relative to a reference time

use ago_core::{parse_duration, Clock, Config};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::Args;

#[derive(Args, Debug)]
pub struct TimeArgs {
    /// Time to format (RFC 3339, e.g. 2013-08-30T12:00:00Z, or "now")
    #[arg(value_name = "TIME")]
    pub time: Option<String>,

    /// Reference time (RFC 3339 or "now")
    #[arg(short, long, value_name = "TIME", default_value = "now")]
    pub reference: String,

    /// Built-in locale id or path to a locale file (.toml, .hcl, .json)
    #[arg(short, long, value_name = "ID|FILE", default_value = "en")]
    pub locale: String,

    /// Render times at least this far away as dates (e.g. "90m", "3d")
    #[arg(long, value_name = "DURATION", conflicts_with = "no_max")]
    pub max: Option<String>,

    /// Date layout (strftime) for times past the cutoff
    #[arg(long, value_name = "FMT", conflicts_with = "no_max")]
    pub layout: Option<String>,

    /// Never fall back to dates
    #[arg(long)]
    pub no_max: bool,
}

pub fn handle(args: TimeArgs, clock: &impl Clock) -> Result<String> {
    let Some(raw) = args.time.as_deref() else {
        bail!("missing TIME argument");
    };
    let t = parse_time(raw, clock)?;
    let reference = parse_time(&args.reference, clock)?;
    let config = apply_cutoff(super::load_config(&args.locale)?, &args)?;
    tracing::debug!(%t, %reference, locale = config.locale_id(), "formatting");
    Ok(config.format_reference(&t, &reference))
}

/// Apply `--max`, `--layout` and `--no-max` to a locale.
fn apply_cutoff(config: Config, args: &TimeArgs) -> Result<Config> {
    if args.no_max {
        return Ok(config.without_max());
    }
    let max = match args.max.as_deref() {
        Some(raw) => parse_duration(raw)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid --max '{raw}'"))?,
        None => config.max(),
    };
    if args.max.is_none() && args.layout.is_none() {
        return Ok(config);
    }
    let layout = args
        .layout
        .clone()
        .unwrap_or_else(|| config.default_layout().to_string());
    Ok(config.with_max(max, layout))
}

/// Parse an RFC 3339 timestamp; `now` reads the clock.
pub(crate) fn parse_time(raw: &str, clock: &impl Clock) -> Result<DateTime<FixedOffset>> {
    if raw.eq_ignore_ascii_case("now") {
        return Ok(clock.now().fixed_offset());
    }
    DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid time '{raw}'; expected RFC 3339 (2013-08-30T12:00:00Z)"))
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
