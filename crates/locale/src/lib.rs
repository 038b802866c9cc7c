// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Locale file parsing and lookup

mod find;
mod parser;

pub use find::{format_for_path, load_locale, resolve_locale};
pub use parser::{
    parse_locale, parse_locale_with_format, AffixDef, Format, LocaleDef, ParseError, PeriodFile,
    DEFAULT_LAYOUT,
};
