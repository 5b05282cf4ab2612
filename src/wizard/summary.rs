//! Summary shown on the last wizard step

use super::form::{ListMode, WizardFormState};
use super::options::{label_for, Choice, LIMIT_PERIODS, PROJECTS, TEAMS, VALID_PERIODS};

/// A labelled group of summary rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub rows: Vec<(&'static str, String)>,
}

/// Human-readable digest of a wizard form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSummary {
    pub sections: Vec<SummarySection>,
}

impl WizardSummary {
    /// Amounts are shown with `currency_symbol` in front.
    pub fn from_form(form: &WizardFormState, currency_symbol: &str) -> Self {
        let sections = vec![
            SummarySection {
                title: "Card Details",
                rows: vec![
                    ("Assignee", or_default(&form.assignee, "Not specified")),
                    (
                        "Card Type",
                        form.card_type
                            .map(|t| t.name().to_string())
                            .unwrap_or_else(|| "Not selected".to_string()),
                    ),
                    ("Card Name", or_default(&form.card_name, "Unnamed Card")),
                    ("Color", form.card_color.name().to_string()),
                ],
            },
            SummarySection {
                title: "Limits & Validity",
                rows: vec![
                    (
                        "Valid Period",
                        option_label(VALID_PERIODS, &form.valid_period, "Not set"),
                    ),
                    ("Limit Amount", amount_or_unlimited(&form.limit_amount, currency_symbol)),
                    (
                        "Limit Period",
                        option_label(LIMIT_PERIODS, &form.limit_period, "Not set"),
                    ),
                    ("Transaction Count", or_default(&form.limit_count, "Unlimited")),
                    (
                        "Transaction Limit",
                        amount_or_unlimited(&form.transaction_limit, currency_symbol),
                    ),
                ],
            },
            SummarySection {
                title: "Controls & Restrictions",
                rows: vec![
                    (
                        "Categories",
                        restriction(form.categories_mode, &form.categories, "categories"),
                    ),
                    (
                        "Merchants",
                        restriction(form.merchants_mode, &form.merchants, "merchants"),
                    ),
                    ("Time", time_restriction(form)),
                    (
                        "Regions",
                        restriction(form.regions_mode, &form.regions, "regions"),
                    ),
                    (
                        "ATM Withdrawals",
                        (if form.atm_withdrawal { "Allowed" } else { "Blocked" }).to_string(),
                    ),
                ],
            },
            SummarySection {
                title: "Assignment",
                rows: vec![
                    ("Team", option_label(TEAMS, &form.team, "Not assigned")),
                    ("Project", option_label(PROJECTS, &form.project, "Not assigned")),
                ],
            },
        ];

        Self { sections }
    }

    /// Value of the first row with this label
    pub fn value(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    /// All rows as "Label: value" lines
    pub fn lines(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|(l, v)| format!("{}: {}", l, v))
            .collect()
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn option_label(choices: &[Choice], id: &str, fallback: &str) -> String {
    if id.is_empty() {
        return fallback.to_string();
    }
    label_for(choices, id).unwrap_or(id).to_string()
}

fn amount_or_unlimited(amount: &str, currency_symbol: &str) -> String {
    if amount.is_empty() {
        "Unlimited".to_string()
    } else {
        format!("{}{}", currency_symbol, amount)
    }
}

fn restriction(mode: ListMode, items: &[String], noun: &str) -> String {
    if items.is_empty() {
        format!("All {} allowed", noun)
    } else {
        format!("{}: {}", mode.summary_prefix(), items.join(", "))
    }
}

fn time_restriction(form: &WizardFormState) -> String {
    let window = &form.allowed_times;
    let times = if window.is_empty() {
        None
    } else {
        Some(format!("{}-{}", window.start, window.end))
    };

    match (form.allowed_days.is_empty(), times) {
        (true, None) => "Any time".to_string(),
        (false, None) => format!(
            "{}: {}",
            form.time_mode.summary_prefix(),
            form.allowed_days.join(", ")
        ),
        (true, Some(t)) => format!("{}: {}", form.time_mode.summary_prefix(), t),
        (false, Some(t)) => format!(
            "{}: {} {}",
            form.time_mode.summary_prefix(),
            form.allowed_days.join(", "),
            t
        ),
    }
}
