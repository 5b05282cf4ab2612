//! Static activity shown in the card drawer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date;
use crate::models::Money;

/// A recent purchase on a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardActivity {
    pub merchant: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub completed: bool,
}

/// An entry in a card's change history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub action: String,
    pub actor: String,
    pub details: String,
}

fn purchase(merchant: &str, cents: i64, category: &str, day: u32, completed: bool) -> CardActivity {
    CardActivity {
        merchant: merchant.to_string(),
        amount: Money::from_cents(cents),
        category: category.to_string(),
        date: date(2024, 1, day),
        completed,
    }
}

fn event(day: u32, action: &str, actor: &str, details: &str) -> HistoryEntry {
    HistoryEntry {
        date: date(2024, 1, day),
        action: action.to_string(),
        actor: actor.to_string(),
        details: details.to_string(),
    }
}

/// Recent transactions listed in the card drawer
pub fn card_activity() -> Vec<CardActivity> {
    vec![
        purchase("Amazon", 29_999, "Office Equipment", 15, true),
        purchase("Starbucks", 1250, "Food & Beverage", 14, true),
        purchase("Adobe", 5299, "Software", 13, false),
        purchase("Uber", 2580, "Travel", 12, true),
        purchase("Office Depot", 8745, "Office Supplies", 11, true),
    ]
}

/// Change history listed in the card drawer, newest first
pub fn card_history() -> Vec<HistoryEntry> {
    vec![
        event(
            10,
            "Limit Updated",
            "Alex Miller",
            "Monthly limit increased from €3,000 to €5,000",
        ),
        event(5, "Card Activated", "System", "Card was activated and ready for use"),
        event(
            1,
            "Card Created",
            "Sarah Johnson",
            "Card was created and assigned to Marketing team",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_newest_first() {
        let history = card_history();
        assert!(history.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_one_pending_purchase() {
        let pending: Vec<_> = card_activity().into_iter().filter(|a| !a.completed).collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].merchant, "Adobe");
    }
}
