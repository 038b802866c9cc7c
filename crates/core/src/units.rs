// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration units used by the built-in period scales, and duration-string parsing.
//!
//! Months and years are fixed-length approximations (30 and 365 days); no
//! calendar arithmetic happens anywhere in the crate.

use std::time::Duration;

pub const SECOND: Duration = Duration::from_secs(1);
pub const MINUTE: Duration = Duration::from_secs(60);
pub const HOUR: Duration = Duration::from_secs(60 * 60);
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);
pub const MONTH: Duration = Duration::from_secs(30 * 24 * 60 * 60);
pub const YEAR: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Parse a duration string like "30s", "5m", "73h" or "2y" into a Duration.
///
/// A bare number is read as seconds. `mo` is a 30-day month and `y` a
/// 365-day year, matching [`MONTH`] and [`YEAR`].
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Find the numeric prefix
    let (num_str, suffix) = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| (&s[..i], &s[i..]))
        .unwrap_or((s, ""));

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in duration: {}", s))?;

    let unit = match suffix.trim() {
        "ms" | "millis" | "millisecond" | "milliseconds" => Duration::from_millis(1),
        "" | "s" | "sec" | "secs" | "second" | "seconds" => SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "mo" | "month" | "months" => MONTH,
        "y" | "yr" | "yrs" | "year" | "years" => YEAR,
        other => return Err(format!("unknown duration suffix: {}", other)),
    };

    u32::try_from(num)
        .ok()
        .and_then(|n| unit.checked_mul(n))
        .ok_or_else(|| format!("duration out of range: {}", s))
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
