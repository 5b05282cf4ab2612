//! Transaction model
//!
//! Card transactions as listed on the transactions page and shown in the
//! transaction drawer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::CardKind;
use super::ids::TransactionId;
use super::money::Money;

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Successful,
    Pending,
    Declined,
    Refunded,
}

impl TransactionStatus {
    /// Badge glyph; successful transactions carry no badge
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Successful => None,
            Self::Pending => Some("◷"),
            Self::Declined => Some("✗"),
            Self::Refunded => Some("↺"),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => write!(f, "Successful"),
            Self::Pending => write!(f, "Pending"),
            Self::Declined => write!(f, "Declined"),
            Self::Refunded => write!(f, "Refunded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub name: String,
    pub category: String,
}

/// The card a transaction was made with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRef {
    pub kind: CardKind,
    pub label: String,
    pub last_four: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Review {
    pub needs_review: bool,
    pub is_flagged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportState {
    pub is_exported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingDetails {
    pub category: String,
    /// VAT rate in percent
    pub vat_rate: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub cardholder: String,
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A card transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub merchant: Merchant,
    pub date: NaiveDate,
    pub card: CardRef,
    /// Team member who made the purchase
    pub member: String,
    /// CO₂ emission in kilograms
    pub co2_kg: f64,
    /// Gross amount
    pub amount: Money,
    pub status: TransactionStatus,
    pub review: Review,
    pub export: ExportState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,
    pub accounting: AccountingDetails,
    pub details: TransactionDetails,
}

impl Transaction {
    /// VAT contained in the gross amount
    pub fn vat(&self) -> Money {
        self.amount.included_tax(self.accounting.vat_rate)
    }

    /// Project shown in the drawer
    pub fn project_or_default(&self) -> &str {
        self.accounting.project.as_deref().unwrap_or("HR Costs")
    }

    /// Team shown in the drawer
    pub fn team_or_default(&self) -> &str {
        self.accounting
            .team
            .as_deref()
            .unwrap_or("Payment Ops & Programs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_vat() {
        let txn = sample::transactions().into_iter().next().unwrap();
        assert_eq!(txn.amount, Money::from_cents(29_999));
        assert_eq!(txn.vat(), Money::from_cents(4790));
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(TransactionStatus::Successful.icon(), None);
        assert_eq!(TransactionStatus::Refunded.icon(), Some("↺"));
        assert_eq!(TransactionStatus::Declined.to_string(), "Declined");
    }

    #[test]
    fn test_defaults_for_missing_accounting_fields() {
        let mut txn = sample::transactions().into_iter().next().unwrap();
        txn.accounting.project = None;
        txn.accounting.team = None;
        assert_eq!(txn.project_or_default(), "HR Costs");
        assert_eq!(txn.team_or_default(), "Payment Ops & Programs");
    }
}
