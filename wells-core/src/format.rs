//! Locale-aware number formatting for tooltips and the summary subtitle.

use crate::metric::Metric;
use num_format::{Locale, ToFormattedString};

/// Map a locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Anything else falls back to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Thousands grouping plus fixed one-decimal precision for a single locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFormat {
    locale: &'static Locale,
    decimal: char,
}

impl NumberFormat {
    pub fn for_tag(tag: &str) -> Self {
        let (locale, decimal) = map_locale(tag);
        Self { locale, decimal }
    }

    /// `1234567` → `1,234,567` (en).
    pub fn integer(&self, n: u64) -> String {
        n.to_formatted_string(self.locale)
    }

    /// `1234.56` → `1,234.6` (en) or `1.234,6` (de).
    pub fn one_decimal(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.1}", value.abs());
        let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
        let grouped = whole
            .parse::<u64>()
            .map(|n| self.integer(n))
            .unwrap_or_else(|_| whole.to_string());
        let sign = if value < 0.0 && fixed != "0.0" { "-" } else { "" };
        format!("{sign}{grouped}{}{frac}", self.decimal)
    }

    /// A value in the metric's unit, as shown in tooltips.
    pub fn metric_value(&self, value: f64, metric: Metric) -> String {
        match metric {
            Metric::Days => format!("{} days per 1000m", self.one_decimal(value)),
            Metric::Cost => format!("${} per 1000m", self.one_decimal(value)),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::for_tag("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_rounds_and_groups() {
        let en = NumberFormat::default();
        assert_eq!(en.one_decimal(5.67), "5.7");
        assert_eq!(en.one_decimal(1234.56), "1,234.6");
        assert_eq!(en.one_decimal(0.0), "0.0");
        assert_eq!(en.one_decimal(-1500.04), "-1,500.0");
    }

    #[test]
    fn german_swaps_separators() {
        let de = NumberFormat::for_tag("de-DE");
        assert_eq!(de.one_decimal(1234.56), "1.234,6");
        assert_eq!(de.integer(1_000_000), "1.000.000");
    }

    #[test]
    fn unknown_tag_falls_back_to_english() {
        assert_eq!(NumberFormat::for_tag("xx"), NumberFormat::default());
    }

    #[test]
    fn metric_value_carries_unit() {
        let en = NumberFormat::default();
        assert_eq!(en.metric_value(12.34, Metric::Days), "12.3 days per 1000m");
        assert_eq!(en.metric_value(98765.4, Metric::Cost), "$98,765.4 per 1000m");
    }
}
