//! Option catalogues offered by the card wizard

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of card being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardTypeId {
    Virtual,
    Travel,
    SingleUse,
    StandardPhysical,
    PremiumPhysical,
    Lodge,
}

impl CardTypeId {
    /// All card types in display order
    pub const ALL: [CardTypeId; 6] = [
        CardTypeId::Virtual,
        CardTypeId::Travel,
        CardTypeId::SingleUse,
        CardTypeId::StandardPhysical,
        CardTypeId::PremiumPhysical,
        CardTypeId::Lodge,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Virtual => "virtual",
            Self::Travel => "travel",
            Self::SingleUse => "single-use",
            Self::StandardPhysical => "standard-physical",
            Self::PremiumPhysical => "premium-physical",
            Self::Lodge => "lodge",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Virtual => "Virtual Card",
            Self::Travel => "Travel Purchasing Card",
            Self::SingleUse => "Single-Use Card",
            Self::StandardPhysical => "Standard Physical",
            Self::PremiumPhysical => "Premium Physical",
            Self::Lodge => "Lodge Card",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Virtual => "Digital card for online purchases",
            Self::Travel => "For business travel expenses",
            Self::SingleUse => "One-time payment card",
            Self::StandardPhysical => "Regular plastic card",
            Self::PremiumPhysical => "Metal card with premium features",
            Self::Lodge => "Specialized accommodation card",
        }
    }

    /// Look up a card type by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for CardTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A select option: stored identifier plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub id: &'static str,
    pub label: &'static str,
}

const fn choice(id: &'static str, label: &'static str) -> Choice {
    Choice { id, label }
}

pub const VALID_PERIODS: &[Choice] = &[
    choice("1-month", "1 Month"),
    choice("3-months", "3 Months"),
    choice("6-months", "6 Months"),
    choice("1-year", "1 Year"),
    choice("unlimited", "Unlimited"),
];

pub const LIMIT_PERIODS: &[Choice] = &[
    choice("daily", "Daily"),
    choice("weekly", "Weekly"),
    choice("monthly", "Monthly"),
    choice("yearly", "Yearly"),
];

pub const TEAMS: &[Choice] = &[
    choice("engineering", "Engineering"),
    choice("marketing", "Marketing"),
    choice("sales", "Sales"),
    choice("operations", "Operations"),
    choice("finance", "Finance"),
];

pub const PROJECTS: &[Choice] = &[
    choice("product-development", "Product Development"),
    choice("marketing-campaign", "Marketing Campaign"),
    choice("office-expansion", "Office Expansion"),
    choice("conference-travel", "Conference Travel"),
    choice("general", "General"),
];

pub const SPENDING_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Office Equipment",
    "Software",
    "Travel",
    "Entertainment",
    "Fuel",
    "Hotels",
    "Marketing",
    "Professional Services",
    "Utilities",
];

pub const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Display label for a stored option id
pub fn label_for(choices: &[Choice], id: &str) -> Option<&'static str> {
    choices.iter().find(|c| c.id == id).map(|c| c.label)
}

/// Step through a select list. An empty value moves to the first option;
/// moving back from the first option clears the selection.
pub fn cycle_choice(choices: &[Choice], current: &str, forward: bool) -> String {
    let pos = choices.iter().position(|c| c.id == current);
    let next = match (pos, forward) {
        (None, true) => Some(0),
        (None, false) => Some(choices.len().saturating_sub(1)),
        (Some(i), true) if i + 1 < choices.len() => Some(i + 1),
        (Some(_), true) => None,
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    };
    next.and_then(|i| choices.get(i))
        .map(|c| c.id.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_lookup() {
        assert_eq!(CardTypeId::from_id("single-use"), Some(CardTypeId::SingleUse));
        assert_eq!(CardTypeId::from_id("gold"), None);
        assert_eq!(CardTypeId::Virtual.name(), "Virtual Card");
    }

    #[test]
    fn test_card_type_serde() {
        let json = serde_json::to_string(&CardTypeId::PremiumPhysical).unwrap();
        assert_eq!(json, "\"premium-physical\"");
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(TEAMS, "finance"), Some("Finance"));
        assert_eq!(label_for(TEAMS, ""), None);
    }

    #[test]
    fn test_cycle_choice() {
        assert_eq!(cycle_choice(LIMIT_PERIODS, "", true), "daily");
        assert_eq!(cycle_choice(LIMIT_PERIODS, "daily", true), "weekly");
        assert_eq!(cycle_choice(LIMIT_PERIODS, "yearly", true), "");
        assert_eq!(cycle_choice(LIMIT_PERIODS, "daily", false), "");
        assert_eq!(cycle_choice(LIMIT_PERIODS, "", false), "yearly");
    }
}
