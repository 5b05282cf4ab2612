//! Amount and date formatting taken from the user settings

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use super::settings::Settings;
use crate::models::money::EURO;
use crate::models::Money;

const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Currency symbol and date format shared by the CLI and the views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    currency_symbol: String,
    date_format: String,
}

impl DisplayFormat {
    /// An unparseable date format falls back to `%d.%m.%Y`.
    pub fn new(currency_symbol: impl Into<String>, date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        let date_format = if is_valid_date_format(&date_format) {
            date_format
        } else {
            DEFAULT_DATE_FORMAT.to_string()
        };
        Self {
            currency_symbol: currency_symbol.into(),
            date_format,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.currency_symbol.as_str(), settings.date_format.as_str())
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// `€1,250.00`
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// `€5,000`
    pub fn whole(&self, amount: Money) -> String {
        amount.format_whole(&self.currency_symbol)
    }

    /// `+€12.00`
    pub fn signed(&self, amount: Money) -> String {
        amount.format_signed(&self.currency_symbol)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::new(EURO, DEFAULT_DATE_FORMAT)
    }
}

fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_defaults() {
        assert_eq!(DisplayFormat::from_settings(&Settings::default()), DisplayFormat::default());
    }

    #[test]
    fn test_custom_symbol_and_date() {
        let format = DisplayFormat::new("$", "%Y-%m-%d");
        assert_eq!(format.money(Money::from_cents(-125_050)), "-$1,250.50");
        assert_eq!(format.whole(Money::from_euros(5000)), "$5,000");
        assert_eq!(format.signed(Money::from_euros(12)), "+$12.00");
        let date = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        assert_eq!(format.date(date), "2024-01-16");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let format = DisplayFormat::new("€", "%Q-%");
        let date = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        assert_eq!(format.date(date), "16.01.2024");
    }
}
