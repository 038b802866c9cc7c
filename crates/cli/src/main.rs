// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ago - fuzzy relative time formatting

mod commands;
mod output;

use ago_core::SystemClock;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{duration, locales, time};

#[derive(Parser)]
#[command(
    name = "ago",
    version,
    about = "Format timestamps as fuzzy relative phrases (\"5 minutes ago\")",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    time: time::TimeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in locales
    Locales(locales::LocalesArgs),
    /// Format a bare duration (e.g. "90m")
    Duration(duration::DurationArgs),
}

fn main() {
    setup_logging();
    match run() {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {}", format_error(&e));
            std::process::exit(1);
        }
    }
}

/// Render an error for stderr.
///
/// Causes already quoted in the message are dropped; the rest are numbered
/// under a single "Caused by" heading.
fn format_error(err: &anyhow::Error) -> String {
    let message = err.to_string();
    let causes: Vec<String> = err
        .chain()
        .skip(1)
        .map(|cause| cause.to_string())
        .filter(|cause| !message.contains(cause.as_str()))
        .collect();

    if causes.is_empty() {
        return message;
    }

    let mut buf = message;
    buf.push_str("\n\nCaused by:");
    for (i, cause) in causes.iter().enumerate() {
        buf.push_str(&format!("\n    {i}: {cause}"));
    }
    buf
}

/// Log to stderr so stdout carries only the formatted output.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<String> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Locales(args)) => locales::handle(args),
        Some(Commands::Duration(args)) => duration::handle(args),
        None if cli.time.time.is_none() => {
            // No time and no subcommand: print help
            Ok(Cli::command().render_help().to_string())
        }
        None => time::handle(cli.time, &SystemClock),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
