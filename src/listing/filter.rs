//! Transaction filter modes

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ListFilter;
use crate::models::{Transaction, TransactionStatus};

/// Status filter of the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionFilter {
    #[default]
    All,
    Pending,
    NeedsReview,
    Flagged,
}

impl TransactionFilter {
    /// Filters in tab order
    pub const ALL: [TransactionFilter; 4] = [
        TransactionFilter::All,
        TransactionFilter::Pending,
        TransactionFilter::NeedsReview,
        TransactionFilter::Flagged,
    ];

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::NeedsReview => "Needs Review",
            Self::Flagged => "Flagged",
        }
    }

    /// Next filter tab, wrapping around
    pub fn next(&self) -> Self {
        let pos = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous filter tab, wrapping around
    pub fn prev(&self) -> Self {
        let pos = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::NeedsReview => write!(f, "needs-review"),
            Self::Flagged => write!(f, "flagged"),
        }
    }
}

impl ListFilter<Transaction> for TransactionFilter {
    fn admits(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Pending => txn.status == TransactionStatus::Pending,
            Self::NeedsReview => txn.review.needs_review,
            Self::Flagged => txn.review.is_flagged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert_eq!(TransactionFilter::All.next(), TransactionFilter::Pending);
        assert_eq!(TransactionFilter::Flagged.next(), TransactionFilter::All);
        assert_eq!(TransactionFilter::All.prev(), TransactionFilter::Flagged);
    }

    #[test]
    fn test_value_names() {
        let parsed = TransactionFilter::from_str("needs-review", true).unwrap();
        assert_eq!(parsed, TransactionFilter::NeedsReview);
        assert_eq!(parsed.to_string(), "needs-review");
    }
}
