// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plural categories and the per-locale rule registry.
//!
//! A [`PluralRule`] maps an integer count to a [`PluralCategory`]. Rules are
//! looked up by locale identifier in a [`PluralRules`] registry; locales
//! without an entry use the two-category English-style rule.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// CLDR-style plural categories supported by period templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A pure function from count to plural category.
#[derive(Clone, Copy, Default)]
pub enum PluralRule {
    /// `one` for 1, `other` for everything else.
    #[default]
    OneOther,
    /// Russian/Ukrainian/Belarusian: `one`, `few` and `many` chosen from the
    /// last one and two digits.
    Slavic,
    /// Caller-supplied rule.
    Custom(fn(u64) -> PluralCategory),
}

impl PluralRule {
    /// Determine the plural category for `count`.
    pub fn categorize(&self, count: u64) -> PluralCategory {
        match self {
            Self::OneOther => one_other_rule(count),
            Self::Slavic => slavic_rule(count),
            Self::Custom(f) => f(count),
        }
    }

    /// Whether this rule can ever produce `few` or `many`.
    ///
    /// Custom rules are opaque, so they are assumed to use every category.
    pub fn uses_extended_forms(&self) -> bool {
        !matches!(self, Self::OneOther)
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneOther => write!(f, "PluralRule::OneOther"),
            Self::Slavic => write!(f, "PluralRule::Slavic"),
            Self::Custom(_) => write!(f, "PluralRule::Custom(...)"),
        }
    }
}

fn one_other_rule(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn slavic_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;
    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else if mod10 == 0 || (5..=9).contains(&mod10) || (11..=14).contains(&mod100) {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

static BUILTIN: LazyLock<PluralRules> = LazyLock::new(|| {
    let mut rules = PluralRules::new();
    for id in ["ru", "uk", "be"] {
        rules.register(id, PluralRule::Slavic);
    }
    rules
});

/// Registry mapping locale identifiers to plural rules.
///
/// Lookup tries the exact identifier, then its primary language subtag
/// (`"ru-RU"` → `"ru"`), then falls back to [`PluralRule::OneOther`].
#[derive(Debug, Clone, Default)]
pub struct PluralRules {
    rules: HashMap<String, PluralRule>,
}

impl PluralRules {
    /// Create an empty registry; every lookup resolves to the default rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// The immutable registry of rules shipped with the crate.
    pub fn builtin() -> &'static PluralRules {
        &BUILTIN
    }

    /// Register (or replace) the rule for a locale identifier.
    pub fn register(&mut self, locale_id: impl Into<String>, rule: PluralRule) -> &mut Self {
        self.rules
            .insert(locale_id.into().to_ascii_lowercase(), rule);
        self
    }

    /// Look up the rule for a locale identifier.
    pub fn rule_for(&self, locale_id: &str) -> PluralRule {
        let id = locale_id.to_ascii_lowercase();
        if let Some(rule) = self.rules.get(&id) {
            return *rule;
        }
        let primary = id.split(['-', '_']).next().unwrap_or(&id);
        self.rules.get(primary).copied().unwrap_or_default()
    }

    /// Plural category of `count` in the given locale.
    pub fn category(&self, locale_id: &str, count: u64) -> PluralCategory {
        self.rule_for(locale_id).categorize(count)
    }

    /// Number of explicitly registered locales.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "plural_tests.rs"]
mod tests;
