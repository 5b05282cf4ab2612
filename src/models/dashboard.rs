//! Dashboard data
//!
//! Read-only figures behind the dashboard widgets.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A bank account with its balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub name: String,
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Summary {
    /// Compensated emissions in tonnes
    pub compensated: f64,
    pub total: f64,
    pub travel: f64,
    /// Compensation share in percent
    pub compensation_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cashback {
    pub total: Money,
    pub this_month: Money,
    pub last_month: Money,
    pub available: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountExport {
    pub missing_receipts: u32,
    pub days_left: u32,
    /// Export progress in percent
    pub progress: u8,
    pub ready_transactions: u32,
    pub ready_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardSummary {
    pub balance: Money,
    pub available: Money,
    /// Utilization in percent
    pub utilization: f64,
    pub autopay: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillPay {
    pub outstanding: u32,
    pub overdue: u32,
    pub inbox: u32,
}

/// Count and amount of invoices in one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceBucket {
    pub count: u32,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoicing {
    pub overdue: InvoiceBucket,
    pub paid: InvoiceBucket,
    pub open: InvoiceBucket,
}

/// One point of the balance chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub value: Money,
}

/// A counterparty in the money movement breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub name: String,
    pub amount: Money,
    /// Short avatar initials
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyMovement {
    pub period: String,
    pub money_in: Money,
    pub money_out: Money,
    pub top_sources: Vec<Counterparty>,
    pub top_spend: Vec<Counterparty>,
    pub average_in: Money,
    pub average_out: Money,
}

impl MoneyMovement {
    /// Net movement over the period
    pub fn net(&self) -> Money {
        self.money_in + self.money_out
    }

    /// Bar length of a counterparty relative to the largest in its list, in percent
    pub fn share_of_largest(list: &[Counterparty], item: &Counterparty) -> f64 {
        let largest = list.iter().map(|c| c.amount.abs()).max().unwrap_or_default();
        item.amount.abs().percent_of(largest)
    }
}

/// A row in the dashboard's recent transactions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub date: String,
    pub description: String,
    pub amount: Money,
    pub account: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub greeting: String,
    pub credit_limit: Money,
    pub available: Money,
    pub monthly_change: Money,
    pub monthly_change_percent: f64,
    pub accounts: Vec<BankAccount>,
    pub co2: Co2Summary,
    pub cashback: Cashback,
    pub account_export: AccountExport,
    pub credit_card: CreditCardSummary,
    pub bill_pay: BillPay,
    pub invoicing: Invoicing,
    pub chart: Vec<ChartPoint>,
    pub money_movement: MoneyMovement,
    pub recent: Vec<ActivityRow>,
}

impl DashboardData {
    /// Spent part of the credit limit
    pub fn credit_used(&self) -> Money {
        self.credit_limit - self.available
    }

    /// Credit utilization in percent
    pub fn credit_utilization(&self) -> f64 {
        self.credit_used().percent_of(self.credit_limit)
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> Money {
        self.accounts.iter().map(|a| a.balance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_credit_figures() {
        let data = sample::dashboard();
        assert_eq!(data.credit_used(), Money::from_euros(46_925));
        assert!((data.credit_utilization() - 31.283_333_333).abs() < 1e-6);
    }

    #[test]
    fn test_total_balance() {
        let data = sample::dashboard();
        assert_eq!(data.total_balance(), Money::from_euros(103_075));
    }

    #[test]
    fn test_money_movement_net() {
        let mm = sample::dashboard().money_movement;
        assert_eq!(mm.net(), Money::from_cents(129_567_106));
    }

    #[test]
    fn test_share_of_largest() {
        let mm = sample::dashboard().money_movement;
        let first = &mm.top_sources[0];
        assert!((MoneyMovement::share_of_largest(&mm.top_sources, first) - 100.0).abs() < 1e-9);
        assert_eq!(
            MoneyMovement::share_of_largest(&[], first),
            0.0
        );
    }
}
