//! Card CLI commands
//!
//! Lists the company cards, optionally narrowed by a search query.

use std::io::Write;

use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use crate::config::DisplayFormat;
use crate::display::{format_card_details, format_card_table};
use crate::error::{SpendError, SpendResult};
use crate::export::{export_json, export_yaml, OutputFormat};
use crate::listing::search;
use crate::models::Card;

/// Arguments of `spendcard cards`
#[derive(Args, Debug, Default)]
pub struct CardArgs {
    /// Match against label, holder or the last four digits
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print the full detail view of each matching card
    #[arg(short, long)]
    pub details: bool,
}

/// Handle the cards command
pub fn handle_cards_command<W: Write>(
    cards: &[Card],
    args: &CardArgs,
    today: NaiveDate,
    display: &DisplayFormat,
    out: &mut W,
) -> SpendResult<()> {
    let matches = search(cards, &args.search, &());
    debug!(query = %args.search, matches = matches.len(), "card search");

    match args.format {
        OutputFormat::Table if args.details => {
            if matches.is_empty() {
                return Err(SpendError::card_not_found(&args.search));
            }
            for (i, card) in matches.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", format_card_details(card, today, display))?;
            }
        }
        OutputFormat::Table => writeln!(out, "{}", format_card_table(&matches, display))?,
        OutputFormat::Json => export_json(&matches, out)?,
        OutputFormat::Yaml => export_yaml(&matches, out)?,
        OutputFormat::Csv => {
            return Err(SpendError::Validation(
                "CSV output is only available for transactions".into(),
            ))
        }
    }
    Ok(())
}
