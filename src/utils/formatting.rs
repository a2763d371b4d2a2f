//! Rounding and currency rendering.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SUFFIX: &str = "PLN";

/// Rounds to the nearest cent, ties away from zero.
///
/// Values too large to scale by 100 have no cent fraction and are returned as is.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    #[default]
    Dot,
    Comma,
}

/// How monetary amounts are rendered. Independent of the process locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub suffix: String,
    pub decimal_separator: DecimalSeparator,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            decimal_separator: DecimalSeparator::Dot,
        }
    }
}

impl CurrencyFormat {
    pub fn new(suffix: impl Into<String>, decimal_separator: DecimalSeparator) -> Self {
        Self {
            suffix: suffix.into(),
            decimal_separator,
        }
    }

    /// Renders `amount` with at most two decimals, trailing zeros trimmed,
    /// no digit grouping, followed by a space and the suffix.
    pub fn format(&self, amount: f64) -> String {
        format!("{} {}", format_decimal(amount, self.decimal_separator), self.suffix)
    }
}

/// Renders a number with at most two decimals, trailing zeros trimmed.
pub fn format_decimal(value: f64, separator: DecimalSeparator) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut number = format!("{:.2}", value);
    if number.contains('.') {
        let trimmed_len = number.trim_end_matches('0').trim_end_matches('.').len();
        number.truncate(trimmed_len);
    }

    match separator {
        DecimalSeparator::Dot => number,
        DecimalSeparator::Comma => number.replace('.', ","),
    }
}

/// Formats with the default `CurrencyFormat` (dot separator, `PLN` suffix).
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::default().format(amount)
}
