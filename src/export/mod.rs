//! Export module for spendcard
//!
//! Writes card and transaction lists in several formats:
//! - CSV: transactions, spreadsheet-compatible
//! - JSON: machine-readable, with schema version and timestamp
//! - YAML: human-readable, same structure as JSON

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;

pub use self::csv::export_transactions_csv;
pub use json::{export_json, ListExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Output format of list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}
