//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn ago_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn ago_help_shows_usage() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("locales")
        .stdout_has("duration");
}

#[test]
fn ago_duration_help_shows_flags() {
    cli()
        .args(&["duration", "--help"])
        .passes()
        .stdout_has("--future")
        .stdout_has("--locale");
}

#[test]
fn ago_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}
