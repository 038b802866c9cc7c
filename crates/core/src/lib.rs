// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ago-core: fuzzy "time ago" formatting with per-locale phrase tables

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod locales;
pub mod period;
pub mod plural;
pub mod units;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{with_max, without_max, Config, ConfigBuilder, PRECISE_LAYOUT};
pub use error::ConfigError;
pub use format::{format_date, round_half_up, Formatter};
pub use locales::{
    builtin, BUILTIN_IDS, CHINESE, DEFAULT_MAX, ENGLISH, ENGLISH_UK, ENGLISH_US, FRENCH, GERMAN,
    PORTUGUESE, RUSSIAN, TURKISH,
};
pub use period::{Period, PeriodDef, PluralForms, Template, COUNT_PLACEHOLDER};
pub use plural::{PluralCategory, PluralRule, PluralRules};
pub use units::parse_duration;
