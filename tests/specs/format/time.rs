//! Timestamp formatting specs
//!
//! Verify fuzzy phrases, the date cutoff, and locale selection.

use crate::prelude::*;

#[test]
fn minutes_ago() {
    cli()
        .at("2013-08-30T11:55:00Z")
        .passes()
        .stdout_eq("5 minutes ago\n");
}

#[test]
fn hours_ahead() {
    cli()
        .at("2013-08-30T15:00:00Z")
        .passes()
        .stdout_eq("in 3 hours\n");
}

#[test]
fn same_instant_is_past() {
    cli()
        .at(REFERENCE)
        .passes()
        .stdout_eq("about a second ago\n");
}

#[test]
fn rounds_up_to_next_period() {
    cli()
        .at("2013-08-30T11:00:30Z")
        .passes()
        .stdout_eq("about an hour ago\n");
}

#[test]
fn default_cutoff_renders_date() {
    cli()
        .at("2013-08-20T12:00:00Z")
        .passes()
        .stdout_eq("2013-08-20\n");
}

#[test]
fn just_under_cutoff_stays_fuzzy() {
    cli()
        .at("2013-08-27T11:00:00.000000001Z")
        .passes()
        .stdout_eq("3 days ago\n");
}

#[test]
fn custom_max_and_layout() {
    cli()
        .at("2013-08-30T10:00:00Z")
        .args(&["--max", "90m", "--layout", "%H:%M on %d %b"])
        .passes()
        .stdout_eq("10:00 on 30 Aug\n");
}

#[test]
fn no_max_never_renders_date() {
    cli()
        .at("2003-08-30T12:00:00Z")
        .args(&["--no-max"])
        .passes()
        .stdout_eq("10 years ago\n");
}

#[test]
fn locale_phrases() {
    cli()
        .at("2013-08-30T11:58:00Z")
        .args(&["--locale", "de"])
        .passes()
        .stdout_eq("vor 2 Minuten\n");
    cli()
        .at("2013-08-30T07:00:00Z")
        .args(&["--locale", "ru"])
        .passes()
        .stdout_eq("5 часов назад\n");
    cli()
        .at("2013-08-30T12:05:00Z")
        .args(&["-l", "tr"])
        .passes()
        .stdout_eq("5 dakika içinde\n");
}

#[test]
fn locale_date_layout() {
    cli()
        .at("2013-08-20T12:00:00Z")
        .args(&["--locale", "en-GB"])
        .passes()
        .stdout_eq("20/08/2013\n");
}

#[test]
fn date_keeps_input_offset() {
    cli()
        .at("2013-08-20T23:30:00-05:00")
        .args(&["--layout", "%Y-%m-%d %H:%M %:z"])
        .passes()
        .stdout_eq("2013-08-20 23:30 -05:00\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let run = cli()
        .at("2013-08-30T11:55:00Z")
        .env("RUST_LOG", "debug")
        .passes()
        .stdout_eq("5 minutes ago\n");
    assert!(run.stderr().contains("formatting"), "{}", run.stderr());
}
