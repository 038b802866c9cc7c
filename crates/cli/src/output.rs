// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use std::time::Duration;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a cutoff compactly ("73h", "2d", "none").
pub fn format_max(max: Duration) -> String {
    if max == Duration::MAX {
        return "none".to_string();
    }
    let secs = max.as_secs();
    if max.subsec_nanos() != 0 || secs == 0 {
        return format!("{}ms", max.as_millis());
    }
    match secs {
        s if s % 86_400 == 0 => format!("{}d", s / 86_400),
        s if s % 3600 == 0 => format!("{}h", s / 3600),
        s if s % 60 == 0 => format!("{}m", s / 60),
        s => format!("{}s", s),
    }
}
