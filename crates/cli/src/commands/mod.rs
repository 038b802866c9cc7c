// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod duration;
pub mod locales;
pub mod time;

use ago_core::Config;
use anyhow::{Context, Result};

/// Resolve `--locale`: a built-in identifier or a locale file path.
pub(crate) fn load_config(locale: &str) -> Result<Config> {
    ago_locale::resolve_locale(locale).with_context(|| format!("failed to load locale '{locale}'"))
}
