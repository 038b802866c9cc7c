// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale lookup: built-in identifiers and locale files

use crate::parser::{parse_locale_with_format, Format, ParseError};
use ago_core::Config;
use std::path::Path;

/// Resolve a locale name to a configuration.
///
/// Built-in identifiers win; anything else is treated as a path to a locale
/// file when it has a known extension or exists on disk.
pub fn resolve_locale(name: &str) -> Result<Config, ParseError> {
    if let Some(config) = ago_core::builtin(name) {
        return Ok(config.clone());
    }
    let path = Path::new(name);
    if format_for_path(path).is_some() || path.exists() {
        return load_locale(path);
    }
    Err(ParseError::UnknownLocale {
        name: name.to_string(),
    })
}

/// Load and validate a locale file; the format follows the file extension.
pub fn load_locale(path: &Path) -> Result<Config, ParseError> {
    let format = format_for_path(path).ok_or_else(|| ParseError::InvalidFormat {
        location: path.display().to_string(),
        message: "unsupported extension; expected .toml, .hcl, or .json".to_string(),
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading locale file");
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_locale_with_format(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        locale = config.locale_id(),
        periods = config.periods().len(),
        "loaded locale"
    );
    Ok(config)
}

/// Locale file format for a path, by extension.
pub fn format_for_path(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("hcl") => Some(Format::Hcl),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
