// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for locale configuration

use crate::plural::PluralCategory;
use thiserror::Error;

/// Reasons a locale configuration is rejected at build time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("locale id must not be empty")]
    EmptyLocaleId,
    #[error("locale {locale} has no periods")]
    NoPeriods { locale: String },
    #[error("locale {locale}: period[{index}] has a zero unit")]
    ZeroUnit { locale: String, index: usize },
    #[error("locale {locale}: period[{index}] unit must be greater than the previous period's")]
    UnorderedPeriods { locale: String, index: usize },
    #[error("template {template:?} has more than one {{count}} placeholder")]
    TooManyPlaceholders { template: String },
    #[error(
        "locale {locale}: period[{index}] defines a '{category}' form but the locale's plural rule never selects it"
    )]
    UnusedPluralForm {
        locale: String,
        index: usize,
        category: PluralCategory,
    },
}
