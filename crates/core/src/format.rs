// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fuzzy duration formatting.
//!
//! # Algorithm
//!
//! 1. `delta = reference - t`; non-negative means `t` is in the past
//! 2. `|delta| >= max` renders `t` with the configured date layout
//! 3. Otherwise the magnitude is bucketed into the first period `i` for which
//!    it is the last period or `d < unit[i + 1]`
//! 4. The count is `d / unit[i]` rounded half up; when that count equals the
//!    rounded size of the next unit (59.5 minutes → 60) the next period is
//!    used instead
//! 5. The count selects a plural form, is interpolated, and the phrase is
//!    wrapped with the past or future prefix and suffix

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::plural::{PluralCategory, PluralRules};
use chrono::{DateTime, TimeDelta, TimeZone};
use std::fmt::{self, Write};
use std::time::Duration;

/// A configuration bound to the plural rules used to pick grammatical forms.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    config: &'a Config,
    rules: &'a PluralRules,
}

impl<'a> Formatter<'a> {
    pub fn new(config: &'a Config, rules: &'a PluralRules) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Format `t` relative to the host clock.
    pub fn format<Tz>(&self, t: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.format_with_clock(t, &SystemClock)
    }

    /// Format `t` relative to the time reported by `clock`.
    pub fn format_with_clock<Tz, C>(&self, t: &DateTime<Tz>, clock: &C) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
        C: Clock + ?Sized,
    {
        self.format_reference(t, &clock.now())
    }

    /// Format `t` relative to `reference`.
    pub fn format_reference<Tz, Rz>(&self, t: &DateTime<Tz>, reference: &DateTime<Rz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
        Rz: TimeZone,
    {
        let delta = reference.naive_utc().signed_duration_since(t.naive_utc());
        let magnitude = magnitude(delta);
        if magnitude >= self.config.max() {
            return format_date(t, self.config.default_layout());
        }
        self.config
            .wrap(&self.duration_phrase(magnitude), delta >= TimeDelta::zero())
    }

    /// Format a signed duration; non-negative is past, negative is future.
    ///
    /// The cutoff is not applied since there is no timestamp to fall back to.
    pub fn format_relative_duration(&self, delta: TimeDelta) -> String {
        self.config.wrap(
            &self.duration_phrase(magnitude(delta)),
            delta >= TimeDelta::zero(),
        )
    }

    /// The bare phrase for a duration magnitude, without prefix or suffix.
    pub fn duration_phrase(&self, d: Duration) -> String {
        let config = self.config;
        let periods = config.periods();
        match periods.first() {
            Some(first) if d >= first.unit() => {}
            _ => return config.zero().to_string(),
        }

        for (i, period) in periods.iter().enumerate() {
            let unit = period.unit();
            let is_last = i + 1 == periods.len();
            let next = periods.get(i + 1).map_or(unit, |p| p.unit());
            if !is_last && d >= next {
                continue;
            }

            let count = round_half_up(d, unit);
            if next != unit && count == round_half_up(next, unit) {
                continue;
            }
            if count == 0 {
                return String::new();
            }

            let category = self.category(count);
            return period.forms().select(category).render(count);
        }

        String::new()
    }

    fn category(&self, count: u128) -> PluralCategory {
        match u64::try_from(count) {
            Ok(n) => self.rules.category(self.config.locale_id(), n),
            Err(_) => {
                tracing::warn!(count = %count, "count out of range for plural rules, using 'other'");
                PluralCategory::Other
            }
        }
    }
}

/// `floor(d / unit + 0.5)` in exact integer arithmetic.
pub fn round_half_up(d: Duration, unit: Duration) -> u128 {
    let unit = unit.as_nanos();
    if unit == 0 {
        return 0;
    }
    (2 * d.as_nanos() + unit) / (2 * unit)
}

fn magnitude(delta: TimeDelta) -> Duration {
    delta.abs().to_std().unwrap_or(Duration::MAX)
}

/// Render `t` with a strftime-style layout, degrading to RFC 3339 when the
/// layout cannot be rendered.
pub fn format_date<Tz>(t: &DateTime<Tz>, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", t.format(layout)).is_err() {
        tracing::warn!(layout, "invalid date layout, falling back to RFC 3339");
        return t.to_rfc3339();
    }
    out
}

impl Config {
    /// Format `t` relative to the host clock using the built-in plural rules.
    pub fn format<Tz>(&self, t: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.formatter().format(t)
    }

    /// Format `t` relative to `clock`'s current time.
    pub fn format_with_clock<Tz, C>(&self, t: &DateTime<Tz>, clock: &C) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
        C: Clock + ?Sized,
    {
        self.formatter().format_with_clock(t, clock)
    }

    /// Format `t` relative to `reference` using the built-in plural rules.
    pub fn format_reference<Tz, Rz>(&self, t: &DateTime<Tz>, reference: &DateTime<Rz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
        Rz: TimeZone,
    {
        self.formatter().format_reference(t, reference)
    }

    /// See [`Formatter::format_relative_duration`].
    pub fn format_relative_duration(&self, delta: TimeDelta) -> String {
        self.formatter().format_relative_duration(delta)
    }

    /// See [`Formatter::duration_phrase`].
    pub fn duration_phrase(&self, d: Duration) -> String {
        self.formatter().duration_phrase(d)
    }

    /// Bind this configuration to the built-in plural rules.
    pub fn formatter(&self) -> Formatter<'_> {
        Formatter::new(self, PluralRules::builtin())
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
