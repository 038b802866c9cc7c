//! Bare duration specs

use crate::prelude::*;

#[test]
fn duration_past() {
    cli()
        .args(&["duration", "90m"])
        .passes()
        .stdout_eq("2 hours ago\n");
}

#[test]
fn duration_future() {
    cli()
        .args(&["duration", "45s", "--future"])
        .passes()
        .stdout_eq("in 45 seconds\n");
}

#[test]
fn duration_bare() {
    cli()
        .args(&["duration", "2y", "--bare"])
        .passes()
        .stdout_eq("2 years\n");
}

#[test]
fn duration_locale() {
    cli()
        .args(&["duration", "3d", "--locale", "fr"])
        .passes()
        .stdout_eq("il y a 3 jours\n");
}

#[test]
fn duration_ignores_cutoff() {
    cli()
        .args(&["duration", "10d"])
        .passes()
        .stdout_eq("10 days ago\n");
}
