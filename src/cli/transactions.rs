//! Transaction CLI commands

use std::io::Write;

use clap::Args;
use tracing::debug;

use crate::config::DisplayFormat;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{SpendError, SpendResult};
use crate::export::{export_json, export_transactions_csv, export_yaml, OutputFormat};
use crate::listing::{search, TransactionFilter};
use crate::models::Transaction;

/// Arguments of `spendcard transactions`
#[derive(Args, Debug, Default)]
pub struct TransactionArgs {
    /// Match against merchant, member, card label or last four digits
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Status filter
    #[arg(long, value_enum, default_value = "all")]
    pub filter: TransactionFilter,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print the full detail view of each matching transaction
    #[arg(short, long)]
    pub details: bool,
}

/// Handle the transactions command
pub fn handle_transactions_command<W: Write>(
    transactions: &[Transaction],
    args: &TransactionArgs,
    display: &DisplayFormat,
    out: &mut W,
) -> SpendResult<()> {
    let matches = search(transactions, &args.search, &args.filter);
    debug!(
        query = %args.search,
        filter = %args.filter,
        matches = matches.len(),
        "transaction search"
    );

    match args.format {
        OutputFormat::Table if args.details => {
            if matches.is_empty() {
                return Err(SpendError::transaction_not_found(&args.search));
            }
            for (i, txn) in matches.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", format_transaction_details(txn, display))?;
            }
        }
        OutputFormat::Table => writeln!(out, "{}", format_transaction_table(&matches, display))?,
        OutputFormat::Json => export_json(&matches, out)?,
        OutputFormat::Yaml => export_yaml(&matches, out)?,
        OutputFormat::Csv => export_transactions_csv(&matches, out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn run(args: TransactionArgs) -> String {
        let mut out = Vec::new();
        let display = DisplayFormat::default();
        handle_transactions_command(&sample::transactions(), &args, &display, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_needs_review_csv() {
        let output = run(TransactionArgs {
            filter: TransactionFilter::NeedsReview,
            format: OutputFormat::Csv,
            ..TransactionArgs::default()
        });
        let expected = sample::transactions()
            .iter()
            .filter(|t| t.review.needs_review)
            .count();
        // Header plus one line per match
        assert_eq!(output.lines().count(), expected + 1);
    }

    #[test]
    fn test_no_matches() {
        let output = run(TransactionArgs {
            search: "no-such-merchant".into(),
            ..TransactionArgs::default()
        });
        assert!(output.contains("No transactions found."));
    }

    #[test]
    fn test_details_without_match() {
        let mut out = Vec::new();
        let args = TransactionArgs {
            search: "no-such-merchant".into(),
            details: true,
            ..TransactionArgs::default()
        };
        let display = DisplayFormat::default();
        let err = handle_transactions_command(&sample::transactions(), &args, &display, &mut out)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
