// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locale configuration: phrases, period scale and absolute-date cutoff.
//!
//! A [`Config`] is validated once by [`ConfigBuilder::build`] and is
//! immutable afterwards. [`with_max`] and [`without_max`] derive copies with a
//! different cutoff; the base value is never touched.

use crate::error::ConfigError;
use crate::period::{Period, PeriodDef};
use crate::plural::{PluralCategory, PluralRules};
use std::time::Duration;

/// Layout used when no cutoff is configured: RFC 3339 with nanoseconds.
pub const PRECISE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.9f%:z";

/// Rendering rules for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    locale_id: String,
    past_prefix: String,
    past_suffix: String,
    future_prefix: String,
    future_suffix: String,
    zero: String,
    periods: Vec<Period>,
    max: Duration,
    default_layout: String,
}

impl Config {
    /// Start building a configuration for a locale identifier.
    pub fn builder(locale_id: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(locale_id)
    }

    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    pub fn past_prefix(&self) -> &str {
        &self.past_prefix
    }

    pub fn past_suffix(&self) -> &str {
        &self.past_suffix
    }

    pub fn future_prefix(&self) -> &str {
        &self.future_prefix
    }

    pub fn future_suffix(&self) -> &str {
        &self.future_suffix
    }

    /// Phrase for durations below the first period's unit.
    pub fn zero(&self) -> &str {
        &self.zero
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Durations at or beyond this are rendered as absolute dates.
    pub fn max(&self) -> Duration {
        self.max
    }

    /// strftime-style layout for absolute dates.
    pub fn default_layout(&self) -> &str {
        &self.default_layout
    }

    /// Copy of this configuration with a different cutoff and layout.
    pub fn with_max(&self, max: Duration, layout: impl Into<String>) -> Config {
        Config {
            max,
            default_layout: layout.into(),
            ..self.clone()
        }
    }

    /// Copy of this configuration that never falls back to absolute dates.
    pub fn without_max(&self) -> Config {
        self.with_max(Duration::MAX, PRECISE_LAYOUT)
    }

    /// Wrap a phrase with the past or future prefix and suffix.
    pub fn wrap(&self, phrase: &str, is_past: bool) -> String {
        let (prefix, suffix) = if is_past {
            (&self.past_prefix, &self.past_suffix)
        } else {
            (&self.future_prefix, &self.future_suffix)
        };
        format!("{prefix}{phrase}{suffix}")
    }
}

/// Copy of `config` limited to durations below `max`.
pub fn with_max(config: &Config, max: Duration, layout: impl Into<String>) -> Config {
    config.with_max(max, layout)
}

/// Copy of `config` with the cutoff disabled.
pub fn without_max(config: &Config) -> Config {
    config.without_max()
}

/// Builder for [`Config`].
///
/// Defaults: empty prefixes and suffixes, empty zero phrase, no cutoff.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    locale_id: String,
    past_prefix: String,
    past_suffix: String,
    future_prefix: String,
    future_suffix: String,
    zero: String,
    periods: Vec<PeriodDef>,
    max: Duration,
    default_layout: String,
}

impl ConfigBuilder {
    pub fn new(locale_id: impl Into<String>) -> Self {
        Self {
            locale_id: locale_id.into(),
            past_prefix: String::new(),
            past_suffix: String::new(),
            future_prefix: String::new(),
            future_suffix: String::new(),
            zero: String::new(),
            periods: Vec::new(),
            max: Duration::MAX,
            default_layout: PRECISE_LAYOUT.to_string(),
        }
    }

    pub fn past(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.past_prefix = prefix.into();
        self.past_suffix = suffix.into();
        self
    }

    pub fn future(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.future_prefix = prefix.into();
        self.future_suffix = suffix.into();
        self
    }

    pub fn zero(mut self, zero: impl Into<String>) -> Self {
        self.zero = zero.into();
        self
    }

    pub fn period(mut self, period: PeriodDef) -> Self {
        self.periods.push(period);
        self
    }

    pub fn periods(mut self, periods: impl IntoIterator<Item = PeriodDef>) -> Self {
        self.periods.extend(periods);
        self
    }

    pub fn max(mut self, max: Duration, layout: impl Into<String>) -> Self {
        self.max = max;
        self.default_layout = layout.into();
        self
    }

    /// Validate against the built-in plural rules.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.build_with(PluralRules::builtin())
    }

    /// Validate against a caller-supplied plural registry.
    ///
    /// 1. The locale id is non-empty and at least one period exists
    /// 2. Units are non-zero and strictly increasing
    /// 3. Every template has at most one placeholder
    /// 4. `few`/`many` forms only appear when the locale's rule can select them
    pub fn build_with(self, rules: &PluralRules) -> Result<Config, ConfigError> {
        if self.locale_id.trim().is_empty() {
            return Err(ConfigError::EmptyLocaleId);
        }
        if self.periods.is_empty() {
            return Err(ConfigError::NoPeriods {
                locale: self.locale_id,
            });
        }

        let extended = rules.rule_for(&self.locale_id).uses_extended_forms();
        let mut previous: Option<Duration> = None;
        let mut periods = Vec::with_capacity(self.periods.len());
        for (index, def) in self.periods.iter().enumerate() {
            if def.unit.is_zero() {
                return Err(ConfigError::ZeroUnit {
                    locale: self.locale_id,
                    index,
                });
            }
            if previous.is_some_and(|prev| def.unit <= prev) {
                return Err(ConfigError::UnorderedPeriods {
                    locale: self.locale_id,
                    index,
                });
            }
            if !extended {
                let unused = [
                    (PluralCategory::Few, &def.few),
                    (PluralCategory::Many, &def.many),
                ]
                .into_iter()
                .find_map(|(category, form)| form.is_some().then_some(category));
                if let Some(category) = unused {
                    return Err(ConfigError::UnusedPluralForm {
                        locale: self.locale_id,
                        index,
                        category,
                    });
                }
            }
            periods.push(Period::parse(def)?);
            previous = Some(def.unit);
        }

        Ok(Config {
            locale_id: self.locale_id,
            past_prefix: self.past_prefix,
            past_suffix: self.past_suffix,
            future_prefix: self.future_prefix,
            future_suffix: self.future_suffix,
            zero: self.zero,
            periods,
            max: self.max,
            default_layout: self.default_layout,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
