// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periods of the duration scale and their phrase templates.
//!
//! Templates are parsed once, when a configuration is built, into either a
//! fixed phrase or a phrase with a single `{count}` slot.

use crate::error::ConfigError;
use crate::plural::PluralCategory;
use std::fmt;
use std::time::Duration;

/// Placeholder replaced by the rounded count in a template.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// A parsed phrase template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// Phrase used verbatim, e.g. "about a minute".
    Fixed(String),
    /// Phrase with one count slot between `before` and `after`.
    Count { before: String, after: String },
}

impl Template {
    /// Parse a raw template, rejecting more than one placeholder.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.matches(COUNT_PLACEHOLDER).count() {
            0 => Ok(Self::Fixed(raw.to_string())),
            1 => {
                let (before, after) = raw.split_once(COUNT_PLACEHOLDER).unwrap_or((raw, ""));
                Ok(Self::Count {
                    before: before.to_string(),
                    after: after.to_string(),
                })
            }
            _ => Err(ConfigError::TooManyPlaceholders {
                template: raw.to_string(),
            }),
        }
    }

    /// Render the template for a rounded count.
    pub fn render(&self, count: u128) -> String {
        match self {
            Self::Fixed(phrase) => phrase.clone(),
            Self::Count { before, after } => format!("{before}{count}{after}"),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(phrase) => f.write_str(phrase),
            Self::Count { before, after } => write!(f, "{before}{COUNT_PLACEHOLDER}{after}"),
        }
    }
}

/// Templates keyed by plural category.
///
/// Two-category locales leave `few` and `many` unset; an unset slot falls
/// back to `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    pub one: Template,
    pub few: Option<Template>,
    pub many: Option<Template>,
    pub other: Template,
}

impl PluralForms {
    /// Select the template for a category, falling back to `other`.
    pub fn select(&self, category: PluralCategory) -> &Template {
        match category {
            PluralCategory::One => &self.one,
            PluralCategory::Few => self.few.as_ref().unwrap_or(&self.other),
            PluralCategory::Many => self.many.as_ref().unwrap_or(&self.other),
            PluralCategory::Other => &self.other,
        }
    }
}

/// Unparsed period definition, as written in code or in a locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodDef {
    pub unit: Duration,
    pub one: String,
    pub few: Option<String>,
    pub many: Option<String>,
    pub other: String,
}

impl PeriodDef {
    pub fn new(unit: Duration, one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            unit,
            one: one.into(),
            few: None,
            many: None,
            other: other.into(),
        }
    }

    pub fn few(mut self, few: impl Into<String>) -> Self {
        self.few = Some(few.into());
        self
    }

    pub fn many(mut self, many: impl Into<String>) -> Self {
        self.many = Some(many.into());
        self
    }
}

/// One bucket of the duration scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    unit: Duration,
    forms: PluralForms,
}

impl Period {
    /// Parse the templates of a definition.
    pub fn parse(def: &PeriodDef) -> Result<Self, ConfigError> {
        let optional = |raw: &Option<String>| raw.as_deref().map(Template::parse).transpose();
        Ok(Self {
            unit: def.unit,
            forms: PluralForms {
                one: Template::parse(&def.one)?,
                few: optional(&def.few)?,
                many: optional(&def.many)?,
                other: Template::parse(&def.other)?,
            },
        })
    }

    /// Minimum duration at which this period applies; also its rounding unit.
    pub fn unit(&self) -> Duration {
        self.unit
    }

    pub fn forms(&self) -> &PluralForms {
        &self.forms
    }
}

#[cfg(test)]
#[path = "period_tests.rs"]
mod tests;
