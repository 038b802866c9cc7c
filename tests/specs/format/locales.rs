//! Built-in locale listing specs

use crate::prelude::*;

#[test]
fn locales_lists_ids() {
    let run = cli().args(&["locales"]).passes();
    let ids: Vec<String> = run
        .stdout()
        .lines()
        .filter_map(|l| l.split_whitespace().next().map(str::to_string))
        .collect();
    assert_eq!(
        ids,
        ["en", "en-US", "en-GB", "zh", "fr", "ru", "pt", "de", "tr"]
    );
}

#[test]
fn locales_json() {
    let run = cli().args(&["locales", "-o", "json"]).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[3]["id"], "zh");
    assert_eq!(entries[3]["example"], "5 分钟前");
}
