//! Transaction display formatting

use tabled::{settings::Style, Table, Tabled};

use super::truncate;
use crate::config::DisplayFormat;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Merchant")]
    merchant: String,
    #[tabled(rename = "Card")]
    card: String,
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Review")]
    review: String,
}

fn review_label(txn: &Transaction) -> &'static str {
    match (txn.review.needs_review, txn.review.is_flagged) {
        (_, true) => "Flagged",
        (true, false) => "Needs review",
        (false, false) => "",
    }
}

impl TransactionRow {
    fn new(txn: &Transaction, format: &DisplayFormat) -> Self {
        Self {
            date: format.date(txn.date),
            merchant: truncate(&txn.merchant.name, 24),
            card: format!("{} ••{}", txn.card.label, txn.card.last_four),
            member: txn.member.clone(),
            amount: format.money(txn.amount),
            status: txn.status.to_string(),
            review: review_label(txn).to_string(),
        }
    }
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[&Transaction], format: &DisplayFormat) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }
    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, format))
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the detail view of one transaction
pub fn format_transaction_details(txn: &Transaction, format: &DisplayFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Merchant:    {} ({})\n", txn.merchant.name, txn.merchant.category));
    output.push_str(&format!("Date:        {}\n", format.date(txn.date)));
    output.push_str(&format!("Amount:      {}\n", format.money(txn.amount)));
    output.push_str(&format!(
        "VAT:         {} ({}%)\n",
        format.money(txn.vat()),
        txn.accounting.vat_rate
    ));
    output.push_str(&format!("Status:      {}\n", txn.status));
    output.push_str(&format!(
        "Card:        {} ••{} ({})\n",
        txn.card.label, txn.card.last_four, txn.card.kind
    ));
    output.push_str(&format!("Member:      {}\n", txn.member));
    output.push_str(&format!("Category:    {}\n", txn.accounting.category));
    output.push_str(&format!("Project:     {}\n", txn.project_or_default()));
    output.push_str(&format!("Team:        {}\n", txn.team_or_default()));
    output.push_str(&format!("CO₂:         {} kg\n", txn.co2_kg));

    if let Some(receipt) = &txn.receipt_number {
        output.push_str(&format!("Receipt:     {}\n", receipt));
    }

    match txn.export.export_date {
        Some(date) if txn.export.is_exported => {
            output.push_str(&format!("Exported:    {}\n", format.date(date)))
        }
        _ => output.push_str("Exported:    no\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_table() {
        let txns = sample::transactions();
        let refs: Vec<&Transaction> = txns.iter().collect();
        let table = format_transaction_table(&refs, &DisplayFormat::default());
        assert!(table.contains("Amazon Business"));
        assert!(table.contains("Flagged"));
        assert!(table.contains("Needs review"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], &DisplayFormat::default()),
            "No transactions found."
        );
    }

    #[test]
    fn test_details_show_vat() {
        let txn = sample::transactions().into_iter().next().unwrap();
        let details = format_transaction_details(&txn, &DisplayFormat::default());
        assert!(details.contains("VAT:         €47.90 (19%)"));
        assert!(details.contains("Exported:    16.01.2024"));
    }

    #[test]
    fn test_details_follow_display_format() {
        let txn = sample::transactions().into_iter().next().unwrap();
        let details = format_transaction_details(&txn, &DisplayFormat::new("$", "%Y-%m-%d"));
        assert!(details.contains("VAT:         $47.90 (19%)"));
        assert!(details.contains("Exported:    2024-01-16"));
    }
}
