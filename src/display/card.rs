//! Card display formatting

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::config::DisplayFormat;
use crate::models::Card;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Card")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Holder")]
    holder: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Used")]
    usage: String,
}

impl CardRow {
    fn new(card: &Card, format: &DisplayFormat) -> Self {
        Self {
            name: card.display_name(),
            kind: card.kind.to_string(),
            holder: card.holder.clone(),
            status: format!("{} {}", card.status.icon(), card.status),
            limit: format!(
                "{}/{}",
                format.whole(card.spending_limit),
                card.limit_frequency.period_noun()
            ),
            available: format.money(card.available),
            usage: format!("{:.0}%", card.usage_percent()),
        }
    }
}

/// Format cards as a table
pub fn format_card_table(cards: &[&Card], format: &DisplayFormat) -> String {
    if cards.is_empty() {
        return "No cards found.".to_string();
    }
    let rows: Vec<CardRow> = cards.iter().map(|c| CardRow::new(c, format)).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the detail view of one card
pub fn format_card_details(card: &Card, today: NaiveDate, format: &DisplayFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Card:         {}\n", card.display_name()));
    output.push_str(&format!("Type:         {}\n", card.kind));
    output.push_str(&format!("Holder:       {}\n", card.holder));
    output.push_str(&format!("Status:       {}\n", card.status));
    output.push_str(&format!("Account:      {}\n", card.account));
    output.push_str(&format!(
        "Valid:        {} to {}\n",
        format.date(card.issued),
        format.date(card.valid_until)
    ));
    output.push_str(&format!(
        "Limit:        {} per {}\n",
        format.whole(card.spending_limit),
        card.limit_frequency.period_noun()
    ));
    output.push_str(&format!(
        "Used:         {} ({:.1}%)\n",
        format.money(card.used()),
        card.usage_percent()
    ));
    output.push_str(&format!("Available:    {}\n", format.money(card.available)));
    output.push_str(&format!(
        "Resets:       {}\n",
        format.date(card.limit_frequency.next_reset(today))
    ));
    output.push_str(&format!(
        "Transactions: {}/{} per {}\n",
        card.transaction_count,
        card.max_transaction_count,
        card.transaction_frequency.period_noun()
    ));
    output.push_str(&format!(
        "Per purchase: {}\n",
        format.whole(card.single_transaction_limit)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_table_contains_rows() {
        let cards = sample::cards();
        let refs: Vec<&Card> = cards.iter().collect();
        let table = format_card_table(&refs, &DisplayFormat::default());
        assert!(table.contains("Marketing ••1234"));
        assert!(table.contains("€5,000/month"));
        assert!(table.contains("35%"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_card_table(&[], &DisplayFormat::default()),
            "No cards found."
        );
    }

    #[test]
    fn test_details() {
        let card = sample::cards().into_iter().next().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let details = format_card_details(&card, today, &DisplayFormat::default());
        assert!(details.contains("Used:         €1,750.00 (35.0%)"));
        assert!(details.contains("Resets:       01.02.2024"));
    }

    #[test]
    fn test_details_follow_display_format() {
        let card = sample::cards().into_iter().next().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let details = format_card_details(&card, today, &DisplayFormat::new("$", "%Y-%m-%d"));
        assert!(details.contains("Used:         $1,750.00 (35.0%)"));
        assert!(details.contains("Resets:       2024-02-01"));
        assert!(!details.contains('€'));
    }
}
