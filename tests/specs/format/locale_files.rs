//! Locale file specs
//!
//! Verify locales loaded from TOML, HCL, and JSON files.

use crate::prelude::*;

const SHORT_LOCALE_HCL: &str = r#"
id     = "en-x-short"
zero   = "now"
past   = { suffix = " ago" }
future = { prefix = "in " }

period "second" {
  unit  = "1s"
  one   = "1s"
  other = "{count}s"
}

period "minute" {
  unit  = "1m"
  one   = "1m"
  other = "{count}m"
}
"#;

const SHORT_LOCALE_JSON: &str = r#"{
  "id": "en-x-short",
  "past": { "suffix": " ago" },
  "periods": [
    { "unit": "1m", "one": "1m", "other": "{count}m" },
    { "unit": "1h", "one": "1h", "other": "{count}h" }
  ]
}"#;

#[test]
fn toml_locale_file() {
    let project = Project::empty();
    project.file("short.toml", SHORT_LOCALE_TOML);
    project
        .ago()
        .at("2013-08-30T11:15:00Z")
        .args(&["--locale", "short.toml"])
        .passes()
        .stdout_eq("45m ago\n");
}

#[test]
fn toml_locale_cutoff() {
    let project = Project::empty();
    let path = project.file("short.toml", SHORT_LOCALE_TOML);
    cli()
        .at("2013-08-28T12:00:00Z")
        .args(&["--locale", path.to_str().unwrap()])
        .passes()
        .stdout_eq("Aug 28\n");
}

#[test]
fn hcl_locale_file() {
    let project = Project::empty();
    project.file("short.hcl", SHORT_LOCALE_HCL);
    project
        .ago()
        .at("2013-08-30T12:00:10Z")
        .args(&["--locale", "short.hcl"])
        .passes()
        .stdout_eq("in 10s\n");
}

#[test]
fn json_locale_file() {
    let project = Project::empty();
    project.file("short.json", SHORT_LOCALE_JSON);
    project
        .ago()
        .args(&["duration", "2h", "--locale", "short.json"])
        .passes()
        .stdout_eq("2h ago\n");
}

#[test]
fn missing_locale_file() {
    let project = Project::empty();
    project
        .ago()
        .at(REFERENCE)
        .args(&["--locale", "missing.toml"])
        .fails()
        .stderr_has("failed to read missing.toml");
}

#[test]
fn invalid_locale_file_reports_location() {
    let project = Project::empty();
    project.file(
        "bad.toml",
        r#"
id = "en"

[[period]]
unit = "1 fortnight"
one = "a"
other = "{count}"
"#,
    );
    project
        .ago()
        .at(REFERENCE)
        .args(&["--locale", "bad.toml"])
        .fails()
        .stderr_has("period[0].unit");
}

#[test]
fn unordered_periods_rejected() {
    let project = Project::empty();
    project.file(
        "bad.toml",
        r#"
id = "en"

[[period]]
unit = "1h"
one = "an hour"
other = "{count} hours"

[[period]]
unit = "1m"
one = "a minute"
other = "{count} minutes"
"#,
    );
    project
        .ago()
        .at(REFERENCE)
        .args(&["--locale", "bad.toml"])
        .fails()
        .stderr_has("period[1] unit must be greater");
}
