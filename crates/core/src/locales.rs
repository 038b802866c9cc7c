// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in locale configurations.
//!
//! Every built-in locale uses the six-step scale second, minute, hour, day,
//! month (30 days), year (365 days) and a 73-hour cutoff.

use crate::config::{Config, ConfigBuilder};
use crate::period::PeriodDef;
use crate::units::{DAY, HOUR, MINUTE, MONTH, SECOND, YEAR};
use std::sync::LazyLock;
use std::time::Duration;

/// Cutoff shared by the built-in locales.
pub const DEFAULT_MAX: Duration = Duration::from_secs(73 * 60 * 60);

// Built-in tables are covered by tests; a failure here is a programming error.
#[allow(clippy::expect_used)]
fn finish(builder: ConfigBuilder) -> Config {
    builder.build().expect("built-in locale is valid")
}

fn english(id: &str, layout: &str) -> Config {
    finish(
        Config::builder(id)
            .past("", " ago")
            .future("in ", "")
            .zero("about a second")
            .periods([
                PeriodDef::new(SECOND, "about a second", "{count} seconds"),
                PeriodDef::new(MINUTE, "about a minute", "{count} minutes"),
                PeriodDef::new(HOUR, "about an hour", "{count} hours"),
                PeriodDef::new(DAY, "one day", "{count} days"),
                PeriodDef::new(MONTH, "one month", "{count} months"),
                PeriodDef::new(YEAR, "one year", "{count} years"),
            ])
            .max(DEFAULT_MAX, layout),
    )
}

pub static ENGLISH: LazyLock<Config> = LazyLock::new(|| english("en", "%Y-%m-%d"));

pub static ENGLISH_US: LazyLock<Config> = LazyLock::new(|| english("en-US", "%Y-%m-%d"));

pub static ENGLISH_UK: LazyLock<Config> = LazyLock::new(|| english("en-GB", "%d/%m/%Y"));

pub static CHINESE: LazyLock<Config> = LazyLock::new(|| {
    finish(
        Config::builder("zh")
            .past("", "前")
            .future("于 ", "")
            .zero("1 秒")
            .periods([
                PeriodDef::new(SECOND, "1 秒", "{count} 秒"),
                PeriodDef::new(MINUTE, "1 分钟", "{count} 分钟"),
                PeriodDef::new(HOUR, "1 小时", "{count} 小时"),
                PeriodDef::new(DAY, "1 天", "{count} 天"),
                PeriodDef::new(MONTH, "1 月", "{count} 月"),
                PeriodDef::new(YEAR, "1 年", "{count} 年"),
            ])
            .max(DEFAULT_MAX, "%Y-%m-%d"),
    )
});

pub static FRENCH: LazyLock<Config> = LazyLock::new(|| {
    finish(
        Config::builder("fr")
            .past("il y a ", "")
            .future("dans ", "")
            .zero("environ une seconde")
            .periods([
                PeriodDef::new(SECOND, "environ une seconde", "moins d'une minute"),
                PeriodDef::new(MINUTE, "environ une minute", "{count} minutes"),
                PeriodDef::new(HOUR, "environ une heure", "{count} heures"),
                PeriodDef::new(DAY, "un jour", "{count} jours"),
                PeriodDef::new(MONTH, "un mois", "{count} mois"),
                PeriodDef::new(YEAR, "un an", "{count} ans"),
            ])
            .max(DEFAULT_MAX, "%d/%m/%Y"),
    )
});

pub static RUSSIAN: LazyLock<Config> = LazyLock::new(|| {
    finish(
        Config::builder("ru")
            .past("", " назад")
            .future("через ", "")
            .zero("около секунды")
            .periods([
                PeriodDef::new(SECOND, "секунду", "{count} секунды")
                    .few("{count} секунды")
                    .many("{count} секунд"),
                PeriodDef::new(MINUTE, "около минуты", "{count} минуты")
                    .few("{count} минуты")
                    .many("{count} минут"),
                PeriodDef::new(HOUR, "около часа", "{count} часа")
                    .few("{count} часа")
                    .many("{count} часов"),
                PeriodDef::new(DAY, "день", "{count} дня")
                    .few("{count} дня")
                    .many("{count} дней"),
                PeriodDef::new(MONTH, "месяц", "{count} месяца")
                    .few("{count} месяца")
                    .many("{count} месяцев"),
                PeriodDef::new(YEAR, "год", "{count} года")
                    .few("{count} года")
                    .many("{count} лет"),
            ])
            .max(DEFAULT_MAX, "%Y-%m-%d"),
    )
});

pub static PORTUGUESE: LazyLock<Config> = LazyLock::new(|| {
    finish(
        Config::builder("pt")
            .past("há ", "")
            .future("daqui a ", "")
            .zero("menos de um segundo")
            .periods([
                PeriodDef::new(SECOND, "um segundo", "{count} segundos"),
                PeriodDef::new(MINUTE, "um minuto", "{count} minutos"),
                PeriodDef::new(HOUR, "uma hora", "{count} horas"),
                PeriodDef::new(DAY, "um dia", "{count} dias"),
                PeriodDef::new(MONTH, "um mês", "{count} meses"),
                PeriodDef::new(YEAR, "um ano", "{count} anos"),
            ])
            .max(DEFAULT_MAX, "%d-%m-%Y"),
    )
});

pub static GERMAN: LazyLock<Config> = LazyLock::new(|| {
    finish(
        Config::builder("de")
            .past("vor ", "")
            .future("in ", "")
            .zero("einer Sekunde")
            .periods([
                PeriodDef::new(SECOND, "einer Sekunde", "{count} Sekunden"),
                PeriodDef::new(MINUTE, "einer Minute", "{count} Minuten"),
                PeriodDef::new(HOUR, "einer Stunde", "{count} Stunden"),
                PeriodDef::new(DAY, "einem Tag", "{count} Tagen"),
                PeriodDef::new(MONTH, "einem Monat", "{count} Monaten"),
                PeriodDef::new(YEAR, "einem Jahr", "{count} Jahren"),
            ])
            .max(DEFAULT_MAX, "%d.%m.%Y"),
    )
});

pub static TURKISH: LazyLock<Config> = LazyLock::new(|| {
    finish(
        Config::builder("tr")
            .past("", " önce")
            .future("", " içinde")
            .zero("yaklaşık bir saniye")
            .periods([
                PeriodDef::new(SECOND, "yaklaşık bir saniye", "{count} saniye"),
                PeriodDef::new(MINUTE, "yaklaşık bir dakika", "{count} dakika"),
                PeriodDef::new(HOUR, "yaklaşık bir saat", "{count} saat"),
                PeriodDef::new(DAY, "bir gün", "{count} gün"),
                PeriodDef::new(MONTH, "bir ay", "{count} ay"),
                PeriodDef::new(YEAR, "bir yıl", "{count} yıl"),
            ])
            .max(DEFAULT_MAX, "%d/%m/%Y"),
    )
});

/// Identifiers of the built-in locales, in [`builtin`] lookup order.
pub const BUILTIN_IDS: &[&str] = &["en", "en-US", "en-GB", "zh", "fr", "ru", "pt", "de", "tr"];

/// Look up a built-in locale by identifier (case-insensitive).
///
/// `en-UK` is accepted as an alias of `en-GB`.
pub fn builtin(id: &str) -> Option<&'static Config> {
    let config: &LazyLock<Config> = match id.to_ascii_lowercase().as_str() {
        "en" => &ENGLISH,
        "en-us" => &ENGLISH_US,
        "en-gb" | "en-uk" => &ENGLISH_UK,
        "zh" => &CHINESE,
        "fr" => &FRENCH,
        "ru" => &RUSSIAN,
        "pt" => &PORTUGUESE,
        "de" => &GERMAN,
        "tr" => &TURKISH,
        _ => return None,
    };
    Some(LazyLock::force(config))
}

#[cfg(test)]
#[path = "locales_tests.rs"]
mod tests;
