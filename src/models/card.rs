//! Card model
//!
//! Corporate cards as shown in the card list and the card drawer.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CardId;
use super::money::Money;

/// Virtual or physical card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Virtual,
    Physical,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Virtual => write!(f, "Virtual"),
            Self::Physical => write!(f, "Physical"),
        }
    }
}

/// Card face colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    #[default]
    Grey,
    Lime,
    Fawn,
    Blue,
    Orange,
    Red,
    Charcoal,
}

impl CardColor {
    /// Colours offered when creating a card, in display order
    pub const SELECTABLE: [CardColor; 6] = [
        CardColor::Grey,
        CardColor::Lime,
        CardColor::Fawn,
        CardColor::Blue,
        CardColor::Orange,
        CardColor::Red,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Lime => "lime",
            Self::Fawn => "fawn",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Charcoal => "charcoal",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grey => "Grey",
            Self::Lime => "Lime",
            Self::Fawn => "Fawn",
            Self::Blue => "Blue",
            Self::Orange => "Orange",
            Self::Red => "Red",
            Self::Charcoal => "Charcoal",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lifecycle status of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Active,
    Requested,
    Pending,
    Terminated,
    Expired,
}

impl CardStatus {
    /// Glyph shown next to the status badge
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Active => "✓",
            Self::Requested | Self::Pending => "◷",
            Self::Terminated => "✗",
            Self::Expired => "⚠",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Requested => write!(f, "Requested"),
            Self::Pending => write!(f, "Pending"),
            Self::Terminated => write!(f, "Terminated"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Reset cadence of a spending or transaction-count limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// The period a limit covers ("day", "week", "month")
    pub fn period_noun(&self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }

    /// Date on which a limit with this cadence resets next.
    ///
    /// Daily limits reset tomorrow, weekly limits on the coming Sunday
    /// (a full week ahead when `today` is a Sunday), monthly limits on the
    /// first day of the next month.
    pub fn next_reset(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => today + Duration::days(1),
            Self::Weekly => {
                let from_sunday = today.weekday().num_days_from_sunday() as i64;
                today + Duration::days(7 - from_sunday)
            }
            Self::Monthly => {
                let (year, month) = if today.month() == 12 {
                    (today.year() + 1, 1)
                } else {
                    (today.year(), today.month() + 1)
                };
                NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
            }
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// A corporate card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub color: CardColor,
    /// Short label, usually the team or purpose
    pub label: String,
    pub last_four: String,
    pub holder: String,
    pub status: CardStatus,
    pub issued: NaiveDate,
    pub valid_until: NaiveDate,
    /// Funding account
    pub account: String,
    pub spending_limit: Money,
    pub available: Money,
    pub limit_frequency: Frequency,
    pub single_transaction_limit: Money,
    pub transaction_count: u32,
    pub max_transaction_count: u32,
    pub transaction_frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl Card {
    /// Amount spent in the current limit period (`limit - available`)
    pub fn used(&self) -> Money {
        self.spending_limit - self.available
    }

    /// Share of the limit already spent, in percent
    pub fn usage_percent(&self) -> f64 {
        self.used().percent_of(self.spending_limit)
    }

    /// "Marketing ••1234"
    pub fn display_name(&self) -> String {
        format!("{} ••{}", self.label, self.last_four)
    }

    /// Team shown in the drawer chips
    pub fn team_or_default(&self) -> &str {
        self.team.as_deref().unwrap_or("Marketing Team")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_used_and_usage() {
        let card = sample::cards().into_iter().next().unwrap();
        assert_eq!(card.used(), Money::from_euros(1750));
        assert!((card.usage_percent() - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_usage_with_zero_limit() {
        let mut card = sample::cards().into_iter().next().unwrap();
        card.spending_limit = Money::zero();
        card.available = Money::zero();
        assert_eq!(card.usage_percent(), 0.0);
    }

    #[test]
    fn test_next_reset_daily() {
        assert_eq!(Frequency::Daily.next_reset(date(2024, 2, 29)), date(2024, 3, 1));
    }

    #[test]
    fn test_next_reset_weekly() {
        // 2024-01-17 is a Wednesday
        assert_eq!(Frequency::Weekly.next_reset(date(2024, 1, 17)), date(2024, 1, 21));
        // A Sunday rolls over a full week
        assert_eq!(Frequency::Weekly.next_reset(date(2024, 1, 21)), date(2024, 1, 28));
    }

    #[test]
    fn test_next_reset_monthly() {
        assert_eq!(Frequency::Monthly.next_reset(date(2024, 1, 17)), date(2024, 2, 1));
        assert_eq!(Frequency::Monthly.next_reset(date(2024, 12, 5)), date(2025, 1, 1));
    }

    #[test]
    fn test_display_name() {
        let card = sample::cards().into_iter().next().unwrap();
        assert_eq!(card.display_name(), "Marketing ••1234");
        assert_eq!(card.kind.to_string(), "Virtual");
    }
}
