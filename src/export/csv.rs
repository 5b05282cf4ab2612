//! CSV export

use std::io::Write;

use serde::Serialize;

use crate::error::{SpendError, SpendResult};
use crate::models::Transaction;

/// One flat CSV row per transaction
#[derive(Serialize)]
struct TransactionRecord<'a> {
    id: String,
    date: String,
    merchant: &'a str,
    merchant_category: &'a str,
    card: &'a str,
    last_four: &'a str,
    member: &'a str,
    amount: String,
    vat: String,
    vat_rate: u32,
    status: String,
    needs_review: bool,
    flagged: bool,
    exported: bool,
    category: &'a str,
    project: &'a str,
    team: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionRecord<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.to_string(),
            merchant: &txn.merchant.name,
            merchant_category: &txn.merchant.category,
            card: &txn.card.label,
            last_four: &txn.card.last_four,
            member: &txn.member,
            amount: format!("{:.2}", txn.amount.cents() as f64 / 100.0),
            vat: format!("{:.2}", txn.vat().cents() as f64 / 100.0),
            vat_rate: txn.accounting.vat_rate,
            status: txn.status.to_string(),
            needs_review: txn.review.needs_review,
            flagged: txn.review.is_flagged,
            exported: txn.export.is_exported,
            category: &txn.accounting.category,
            project: txn.project_or_default(),
            team: txn.team_or_default(),
        }
    }
}

/// Export transactions to CSV with a header row
pub fn export_transactions_csv<W: Write>(
    transactions: &[&Transaction],
    writer: W,
) -> SpendResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for txn in transactions {
        csv_writer.serialize(TransactionRecord::from(*txn))?;
    }
    csv_writer
        .flush()
        .map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_export_transactions() {
        let txns = sample::transactions();
        let refs: Vec<&Transaction> = txns.iter().collect();
        let mut out = Vec::new();
        export_transactions_csv(&refs, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("id,date,merchant,"));
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("txn-1,2024-01-15,Amazon Business"));
        assert!(text.contains("299.99,47.90,19,Successful"));
    }

    #[test]
    fn test_quotes_fields_with_commas() {
        let mut txn = sample::transactions().into_iter().next().unwrap();
        txn.merchant.name = "Smith, Jones & Co".to_string();
        let mut out = Vec::new();
        export_transactions_csv(&[&txn], &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\"Smith, Jones & Co\""));
    }
}
