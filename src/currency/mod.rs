//! Display formatting for budgets stored in minor currency units.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separators used when rendering amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Picks separators for a BCP 47 tag, falling back to `en-US` conventions.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" => (',', '.'),
            "fr" | "sv" | "nb" | "fi" | "pl" | "cs" => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" | "CAD" | "AUD" | "NZD" | "MXN" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "BRL" => "R$".into(),
        "INR" => "₹".into(),
        other => format!("{} ", other),
    }
}

/// Number of minor-unit digits for a currency.
pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" | "CLP" | "ISK" => 0,
        _ => 2,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders an amount held in minor units, e.g. `123456` USD → `$1,234.56`.
pub fn format_cents(amount: u64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let scale = 10u64.pow(precision);
    let whole = group_digits(&(amount / scale).to_string(), locale.grouping_separator);
    let body = if precision == 0 {
        whole
    } else {
        format!(
            "{}{}{:0width$}",
            whole,
            locale.decimal_separator,
            amount % scale,
            width = precision as usize
        )
    };
    format!("{}{}", symbol_for(code.as_str()), body)
}
