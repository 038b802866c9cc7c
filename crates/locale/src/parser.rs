// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale file parsing (TOML, HCL, and JSON)

use ago_core::{parse_duration, Config, ConfigError, PeriodDef, PluralRules};
use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Date layout used when a locale file sets `max` without `layout`.
pub const DEFAULT_LAYOUT: &str = "%Y-%m-%d";

/// Locale file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

/// Errors that can occur while loading a locale
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },

    #[error("unknown locale '{name}'; built-in locales: {}", ago_core::BUILTIN_IDS.join(", "))]
    UnknownLocale { name: String },

    #[error("invalid locale: {0}")]
    Config(#[from] ConfigError),
}

/// Prefix and suffix placed around a phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AffixDef {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

/// One period as written in a locale file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeriodFile {
    /// Block label in HCL; optional elsewhere
    #[serde(default)]
    pub name: String,
    /// Duration string, e.g. `"1m"` or `"30d"`
    pub unit: String,
    pub one: String,
    #[serde(default)]
    pub few: Option<String>,
    #[serde(default)]
    pub many: Option<String>,
    pub other: String,
}

/// A locale file before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleDef {
    pub id: String,
    #[serde(default)]
    pub zero: String,
    #[serde(default)]
    pub past: AffixDef,
    #[serde(default)]
    pub future: AffixDef,
    /// Cutoff as a duration string; absent means no cutoff
    #[serde(default)]
    pub max: Option<String>,
    /// Date layout for the cutoff; ignored without `max`
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default, alias = "period", deserialize_with = "deserialize_periods")]
    pub periods: Vec<PeriodFile>,
}

/// Deserialize periods from either a sequence (TOML/JSON) or a map (HCL labeled blocks).
///
/// - TOML `[[period]]` produces a `Vec<PeriodFile>`
/// - HCL `period "name" { }` produces an `IndexMap<String, PeriodFile>` (preserves insertion order)
fn deserialize_periods<'de, D>(deserializer: D) -> Result<Vec<PeriodFile>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PeriodsVisitor;

    impl<'de> Visitor<'de> for PeriodsVisitor {
        type Value = Vec<PeriodFile>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sequence of periods or a map of labeled period blocks")
        }

        fn visit_seq<S>(self, seq: S) -> Result<Vec<PeriodFile>, S::Error>
        where
            S: SeqAccess<'de>,
        {
            Vec::deserialize(de::value::SeqAccessDeserializer::new(seq))
        }

        fn visit_map<M>(self, map: M) -> Result<Vec<PeriodFile>, M::Error>
        where
            M: MapAccess<'de>,
        {
            let index_map: IndexMap<String, PeriodFile> =
                IndexMap::deserialize(de::value::MapAccessDeserializer::new(map))?;
            Ok(index_map
                .into_iter()
                .map(|(key, mut period)| {
                    if period.name.is_empty() {
                        period.name = key;
                    }
                    period
                })
                .collect())
        }
    }

    deserializer.deserialize_any(PeriodsVisitor)
}

impl LocaleDef {
    /// Validate against the built-in plural rules.
    pub fn into_config(self) -> Result<Config, ParseError> {
        self.into_config_with(PluralRules::builtin())
    }

    /// Validate against a caller-supplied plural registry.
    pub fn into_config_with(self, rules: &PluralRules) -> Result<Config, ParseError> {
        let mut builder = Config::builder(self.id)
            .zero(self.zero)
            .past(self.past.prefix, self.past.suffix)
            .future(self.future.prefix, self.future.suffix);

        for (i, period) in self.periods.into_iter().enumerate() {
            let location = if period.name.is_empty() {
                format!("period[{i}].unit")
            } else {
                format!("period[{i}]({}).unit", period.name)
            };
            let unit = duration_field(&period.unit, location)?;
            let mut def = PeriodDef::new(unit, period.one, period.other);
            def.few = period.few;
            def.many = period.many;
            builder = builder.period(def);
        }

        if let Some(max) = self.max {
            let max = duration_field(&max, "max".to_string())?;
            let layout = self.layout.unwrap_or_else(|| DEFAULT_LAYOUT.to_string());
            builder = builder.max(max, layout);
        }

        Ok(builder.build_with(rules)?)
    }
}

fn duration_field(value: &str, location: String) -> Result<Duration, ParseError> {
    parse_duration(value).map_err(|message| ParseError::InvalidFormat { location, message })
}

/// Parse a locale from TOML content (convenience wrapper)
pub fn parse_locale(content: &str) -> Result<Config, ParseError> {
    parse_locale_with_format(content, Format::Toml)
}

/// Parse and validate a locale from content in the specified format
pub fn parse_locale_with_format(content: &str, format: Format) -> Result<Config, ParseError> {
    let def: LocaleDef = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    def.into_config()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
