//! Core data models for spendcard
//!
//! This module contains the data structures behind the dashboard: cards,
//! card transactions, money amounts and the dashboard figures.

pub mod card;
pub mod dashboard;
pub mod ids;
pub mod money;
pub mod transaction;

pub use card::{Card, CardColor, CardKind, CardStatus, Frequency};
pub use dashboard::{
    AccountExport, ActivityRow, BankAccount, BillPay, Cashback, ChartPoint, Co2Summary,
    Counterparty, CreditCardSummary, DashboardData, InvoiceBucket, Invoicing, MoneyMovement,
};
pub use ids::{CardId, RequestId, TransactionId};
pub use money::Money;
pub use transaction::{
    AccountingDetails, CardRef, ExportState, Merchant, Review, Transaction, TransactionDetails,
    TransactionStatus,
};
