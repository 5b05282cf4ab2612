//! Built-in sample data
//!
//! The dashboard works on a fixed in-memory data set. Every call returns a
//! fresh copy, so views can own their lists without sharing state.

mod activity;

pub use activity::{card_activity, card_history, CardActivity, HistoryEntry};

use chrono::NaiveDate;

use crate::models::{
    AccountExport, AccountingDetails, ActivityRow, BankAccount, BillPay, Card, CardColor, CardId,
    CardKind, CardRef, CardStatus, Cashback, ChartPoint, Co2Summary, Counterparty,
    CreditCardSummary, DashboardData, ExportState, Frequency, InvoiceBucket, Invoicing, Merchant,
    Money, MoneyMovement, Review, Transaction, TransactionDetails, TransactionId,
    TransactionStatus,
};

/// Build a date from literal sample values
pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Card limits and usage counters, in whole euros
struct Limits {
    limit: i64,
    available: i64,
    frequency: Frequency,
    single: i64,
    count: u32,
    max_count: u32,
    count_frequency: Frequency,
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: u32,
    kind: CardKind,
    color: CardColor,
    label: &str,
    last_four: &str,
    holder: &str,
    status: CardStatus,
    issued: NaiveDate,
    valid_until: NaiveDate,
    account: &str,
    limits: Limits,
) -> Card {
    Card {
        id: CardId::new(id),
        kind,
        color,
        label: label.to_string(),
        last_four: last_four.to_string(),
        holder: holder.to_string(),
        status,
        issued,
        valid_until,
        account: account.to_string(),
        spending_limit: Money::from_euros(limits.limit),
        available: Money::from_euros(limits.available),
        limit_frequency: limits.frequency,
        single_transaction_limit: Money::from_euros(limits.single),
        transaction_count: limits.count,
        max_transaction_count: limits.max_count,
        transaction_frequency: limits.count_frequency,
        team: None,
        project: None,
    }
}

/// The company's cards
pub fn cards() -> Vec<Card> {
    use CardColor::*;
    use CardKind::*;
    use Frequency::*;

    let mut marketing = card(
        1,
        Virtual,
        Blue,
        "Marketing",
        "1234",
        "Jane Smith",
        CardStatus::Active,
        date(2024, 1, 15),
        date(2027, 1, 15),
        "Main Account",
        Limits {
            limit: 5000,
            available: 3250,
            frequency: Monthly,
            single: 2500,
            count: 8,
            max_count: 15,
            count_frequency: Monthly,
        },
    );
    marketing.team = Some("Marketing Team".to_string());
    marketing.project = Some("Marketing Campaign".to_string());

    vec![
        marketing,
        card(
            2,
            Physical,
            Charcoal,
            "Operations",
            "5678",
            "Alex Miller",
            CardStatus::Active,
            date(2024, 2, 10),
            date(2027, 2, 10),
            "Ops / Payroll",
            Limits {
                limit: 10_000,
                available: 8900,
                frequency: Monthly,
                single: 5000,
                count: 3,
                max_count: 10,
                count_frequency: Monthly,
            },
        ),
        card(
            3,
            Virtual,
            Red,
            "Travel",
            "9012",
            "John Doe",
            CardStatus::Pending,
            date(2024, 3, 5),
            date(2027, 3, 5),
            "Treasury",
            Limits {
                limit: 7500,
                available: 7500,
                frequency: Weekly,
                single: 3000,
                count: 2,
                max_count: 6,
                count_frequency: Weekly,
            },
        ),
        card(
            4,
            Virtual,
            Orange,
            "Development",
            "3456",
            "Sarah Johnson",
            CardStatus::Expired,
            date(2023, 12, 1),
            date(2024, 12, 1),
            "Main Account",
            Limits {
                limit: 3000,
                available: 0,
                frequency: Daily,
                single: 1500,
                count: 0,
                max_count: 20,
                count_frequency: Daily,
            },
        ),
        card(
            5,
            Virtual,
            Lime,
            "Sales",
            "7890",
            "Mike Wilson",
            CardStatus::Requested,
            date(2024, 6, 1),
            date(2027, 6, 1),
            "Treasury",
            Limits {
                limit: 8000,
                available: 8000,
                frequency: Monthly,
                single: 2000,
                count: 12,
                max_count: 25,
                count_frequency: Monthly,
            },
        ),
    ]
}

struct Accounting<'a> {
    category: &'a str,
    project: &'a str,
    reference: &'a str,
    team: &'a str,
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: u32,
    merchant: (&str, &str),
    date: NaiveDate,
    card: (CardKind, &str, &str),
    member: &str,
    co2_kg: f64,
    amount: Money,
    status: TransactionStatus,
    review: Review,
    export: ExportState,
    accounting: Accounting<'_>,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        merchant: Merchant {
            name: merchant.0.to_string(),
            category: merchant.1.to_string(),
        },
        date,
        card: CardRef {
            kind: card.0,
            label: card.1.to_string(),
            last_four: card.2.to_string(),
        },
        member: member.to_string(),
        co2_kg,
        amount,
        status,
        review,
        export,
        receipt_number: Some(format!("RCP-2024-{:04}", id)),
        accounting: AccountingDetails {
            category: accounting.category.to_string(),
            vat_rate: 19,
            project: Some(accounting.project.to_string()),
            consumer_reference: Some(accounting.reference.to_string()),
            team: Some(accounting.team.to_string()),
        },
        details: TransactionDetails {
            cardholder: member.to_string(),
            account: "Main Account".to_string(),
            note: None,
        },
    }
}

fn exported(on: NaiveDate) -> ExportState {
    ExportState {
        is_exported: true,
        export_date: Some(on),
    }
}

/// Card transactions shown on the transactions page
pub fn transactions() -> Vec<Transaction> {
    use CardKind::*;
    use TransactionStatus::*;

    vec![
        transaction(
            1,
            ("Amazon Business", "Electronics & IT Equipment"),
            date(2024, 1, 15),
            (Virtual, "Marketing Team", "4532"),
            "Sarah Johnson",
            2.4,
            Money::from_cents(29_999),
            Successful,
            Review::default(),
            exported(date(2024, 1, 16)),
            Accounting {
                category: "Office Equipment",
                project: "Marketing Campaign",
                reference: "MKT-2024-001",
                team: "Marketing Team",
            },
        ),
        transaction(
            2,
            ("Starbucks", "Food & Beverage"),
            date(2024, 1, 14),
            (Physical, "Executive Card", "1234"),
            "Alex Miller",
            0.8,
            Money::from_cents(1250),
            Pending,
            Review {
                needs_review: true,
                is_flagged: false,
            },
            ExportState::default(),
            Accounting {
                category: "Food & Dining",
                project: "HR Costs",
                reference: "OPS-2024-014",
                team: "Operations Team",
            },
        ),
        transaction(
            3,
            ("Adobe Creative Cloud", "Software & Tools"),
            date(2024, 1, 13),
            (Virtual, "Design Team", "7890"),
            "Emma Davis",
            0.1,
            Money::from_cents(5299),
            Declined,
            Review {
                needs_review: true,
                is_flagged: true,
            },
            ExportState::default(),
            Accounting {
                category: "Software",
                project: "Design Operations",
                reference: "DSN-2024-003",
                team: "Design Team",
            },
        ),
        transaction(
            4,
            ("Coursera", "Education & Training"),
            date(2024, 1, 12),
            (Virtual, "HR Team", "5678"),
            "Michael Chen",
            0.05,
            Money::from_euros(89),
            Refunded,
            Review::default(),
            exported(date(2024, 1, 13)),
            Accounting {
                category: "Professional Services",
                project: "HR Development",
                reference: "HR-2024-007",
                team: "HR Team",
            },
        ),
        transaction(
            5,
            ("Google Ads", "Advertising & Marketing"),
            date(2024, 1, 11),
            (Virtual, "Marketing Team", "4532"),
            "Sarah Johnson",
            0.02,
            Money::from_euros(150),
            Successful,
            Review::default(),
            ExportState::default(),
            Accounting {
                category: "Marketing",
                project: "Digital Marketing",
                reference: "MKT-2024-002",
                team: "Marketing Team",
            },
        ),
    ]
}

fn bank_account(name: &str, balance: Money) -> BankAccount {
    BankAccount {
        name: name.to_string(),
        balance,
    }
}

fn counterparty(name: &str, amount: Money, initials: &str) -> Counterparty {
    Counterparty {
        name: name.to_string(),
        amount,
        initials: initials.to_string(),
    }
}

fn activity(
    description: &str,
    amount: Money,
    account: &str,
    method: &str,
    status: Option<&str>,
) -> ActivityRow {
    ActivityRow {
        date: "Jun 23".to_string(),
        description: description.to_string(),
        amount,
        account: account.to_string(),
        method: method.to_string(),
        status: status.map(str::to_string),
    }
}

fn point(date: &str, value: i64) -> ChartPoint {
    ChartPoint {
        date: date.to_string(),
        value: Money::from_euros(value),
    }
}

/// Figures behind the dashboard widgets
pub fn dashboard() -> DashboardData {
    DashboardData {
        greeting: "Welcome back, Alex".to_string(),
        credit_limit: Money::from_euros(150_000),
        available: Money::from_euros(103_075),
        monthly_change: Money::from_euros(1_700_000),
        monthly_change_percent: 12.4,
        accounts: vec![
            bank_account("Main Account", Money::from_euros(103_025)),
            bank_account("Prefund Account", Money::from_euros(50)),
            bank_account("USD Account", Money::zero()),
            bank_account("CHF Account", Money::zero()),
            bank_account("GBP Account", Money::zero()),
        ],
        co2: Co2Summary {
            compensated: 216.25,
            total: 407.85,
            travel: 407.85,
            compensation_percent: 53,
        },
        cashback: Cashback {
            total: Money::from_euros(35_074),
            this_month: Money::from_euros(2847),
            last_month: Money::from_euros(3156),
            available: Money::from_euros(8290),
        },
        account_export: AccountExport {
            missing_receipts: 17,
            days_left: 8,
            progress: 73,
            ready_transactions: 156,
            ready_amount: Money::from_euros(24_750),
        },
        credit_card: CreditCardSummary {
            balance: Money::from_cents(1_250_587),
            available: Money::from_euros(21_249),
            utilization: 36.6,
            autopay: "Jun 28".to_string(),
        },
        bill_pay: BillPay {
            outstanding: 11,
            overdue: 1,
            inbox: 3,
        },
        invoicing: Invoicing {
            overdue: InvoiceBucket {
                count: 4,
                amount: Money::from_euros(950),
            },
            paid: InvoiceBucket {
                count: 12,
                amount: Money::from_euros(6000),
            },
            open: InvoiceBucket {
                count: 12,
                amount: Money::from_euros(12_300),
            },
        },
        chart: vec![
            point("May 29", 4_800_000),
            point("Jun 3", 4_950_000),
            point("Jun 8", 5_100_000),
            point("Jun 13", 5_050_000),
            point("Jun 18", 5_216_471),
        ],
        money_movement: MoneyMovement {
            period: "Jun 2025".to_string(),
            money_in: Money::from_cents(167_496_476),
            money_out: Money::from_cents(-37_929_370),
            top_sources: vec![
                counterparty("Venture Debt Loan", Money::from_euros(1_000_000), "VDL"),
                counterparty("GenPro", Money::from_cents(41_498_319), "G"),
                counterparty("Google", Money::from_cents(5_957_490), "GO"),
                counterparty("Milgram Brokerage", Money::from_cents(5_369_048), "MB"),
            ],
            top_spend: vec![
                counterparty("Jordi O'Donnell", Money::from_cents(-99_079_716), "JO"),
                counterparty("Gusto (Payroll)", Money::from_cents(-99_012_253), "GP"),
                counterparty("Google", Money::from_cents(-96_179_151), "GO"),
                counterparty("Milgram Brokerage", Money::from_cents(-94_880_272), "MB"),
            ],
            average_in: Money::from_euros(45_000),
            average_out: Money::from_euros(-144_000),
        },
        recent: vec![
            activity(
                "Mercury Working Capital",
                Money::from_euros(-2200),
                "Ops / Payroll",
                "Working Capital Loan",
                None,
            ),
            activity(
                "Payment from NASA",
                Money::from_euros(419),
                "AR",
                "Request or Invoice Payment",
                Some("Failed"),
            ),
            activity(
                "Payment from Acme Corp",
                Money::from_euros(200),
                "AR",
                "Request or Invoice Payment",
                None,
            ),
            activity(
                "To Ops / Payroll",
                Money::from_cents(-5_481_016),
                "AR",
                "Transfer",
                None,
            ),
            activity(
                "From AR",
                Money::from_cents(5_481_016),
                "Ops / Payroll",
                "Transfer",
                None,
            ),
            activity("Lily's Eatery", Money::from_cents(93), "Ops / Payroll", "Jane B. ••1234", None),
            activity("Dell 77", Money::from_cents(691), "Credit account", "Jane B. ••5555", None),
            activity(
                "Dell 77",
                Money::from_cents(2328),
                "Ops / Payroll",
                "London S. ••4929",
                None,
            ),
            activity(
                "Office Stop Co.",
                Money::from_cents(-28_789),
                "Ops / Payroll",
                "Jessica A. ••9914",
                None,
            ),
            activity(
                "Trader John's",
                Money::from_cents(5349),
                "Credit account",
                "London S. ••0331",
                None,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(cards().len(), 5);
        assert_eq!(transactions().len(), 5);
        assert_eq!(dashboard().recent.len(), 10);
        assert_eq!(dashboard().chart.len(), 5);
    }

    #[test]
    fn test_card_ids_unique() {
        let cards = cards();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.last_four, b.last_four);
            }
        }
    }

    #[test]
    fn test_available_never_exceeds_limit() {
        for card in cards() {
            assert!(card.available <= card.spending_limit, "{}", card.label);
        }
    }

    #[test]
    fn test_review_flags() {
        let flagged: Vec<_> = transactions()
            .into_iter()
            .filter(|t| t.review.is_flagged)
            .map(|t| t.merchant.name)
            .collect();
        assert_eq!(flagged, vec!["Adobe Creative Cloud"]);
    }
}
