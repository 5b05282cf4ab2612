//! Advisory checks on a wizard form
//!
//! Issues are shown as warnings on the summary step and recorded with the
//! request. They never block navigation or creation.

use thiserror::Error;

use super::form::WizardFormState;
use crate::models::Money;

/// A problem found in a wizard form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("No assignee specified")]
    MissingAssignee,

    #[error("No card type selected")]
    MissingCardType,

    #[error("{field} is not a valid amount: {value}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("{field} cannot be negative")]
    NegativeAmount { field: &'static str },

    #[error("Transaction count must be a whole number: {0}")]
    InvalidCount(String),

    #[error("Transaction limit {transaction} exceeds the spending limit {limit}")]
    TransactionAboveLimit { transaction: Money, limit: Money },

    #[error("Time window needs both a start and an end")]
    IncompleteTimeWindow,
}

fn check_amount(
    field: &'static str,
    value: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Money> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match Money::parse(value) {
        Ok(amount) if amount.is_negative() => {
            issues.push(ValidationIssue::NegativeAmount { field });
            None
        }
        Ok(amount) => Some(amount),
        Err(_) => {
            issues.push(ValidationIssue::InvalidAmount {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

/// Collect every issue in the form, in field order
pub fn validate(form: &WizardFormState) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if form.assignee.trim().is_empty() {
        issues.push(ValidationIssue::MissingAssignee);
    }
    if form.card_type.is_none() {
        issues.push(ValidationIssue::MissingCardType);
    }

    let limit = check_amount("Limit amount", &form.limit_amount, &mut issues);

    let count = form.limit_count.trim();
    if !count.is_empty() && count.parse::<u32>().is_err() {
        issues.push(ValidationIssue::InvalidCount(count.to_string()));
    }

    let transaction = check_amount("Transaction limit", &form.transaction_limit, &mut issues);
    if let (Some(limit), Some(transaction)) = (limit, transaction) {
        if transaction > limit {
            issues.push(ValidationIssue::TransactionAboveLimit { transaction, limit });
        }
    }

    let window = &form.allowed_times;
    if window.start.is_empty() != window.end.is_empty() {
        issues.push(ValidationIssue::IncompleteTimeWindow);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::{FieldUpdate, TimeWindow};
    use crate::wizard::options::CardTypeId;

    fn complete() -> WizardFormState {
        WizardFormState::new()
            .with(FieldUpdate::Assignee("Jane Smith".into()))
            .with(FieldUpdate::CardType(Some(CardTypeId::Virtual)))
    }

    #[test]
    fn test_empty_form_issues() {
        let issues = validate(&WizardFormState::new());
        assert_eq!(
            issues,
            vec![ValidationIssue::MissingAssignee, ValidationIssue::MissingCardType]
        );
    }

    #[test]
    fn test_complete_form_is_clean() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn test_bad_amounts() {
        let form = complete()
            .with(FieldUpdate::LimitAmount("lots".into()))
            .with(FieldUpdate::TransactionLimit("-5".into()))
            .with(FieldUpdate::LimitCount("2.5".into()));
        let issues = validate(&form);
        assert_eq!(issues.len(), 3);
        assert_eq!(
            issues[0].to_string(),
            "Limit amount is not a valid amount: lots"
        );
        assert!(matches!(issues[1], ValidationIssue::InvalidCount(_)));
        assert_eq!(issues[2].to_string(), "Transaction limit cannot be negative");
    }

    #[test]
    fn test_transaction_above_limit() {
        let form = complete()
            .with(FieldUpdate::LimitAmount("1000".into()))
            .with(FieldUpdate::TransactionLimit("1500".into()));
        assert_eq!(
            validate(&form),
            vec![ValidationIssue::TransactionAboveLimit {
                transaction: Money::from_euros(1500),
                limit: Money::from_euros(1000),
            }]
        );
    }

    #[test]
    fn test_half_time_window() {
        let form = complete().with(FieldUpdate::AllowedTimes(TimeWindow {
            start: "09:00".into(),
            end: String::new(),
        }));
        assert_eq!(validate(&form), vec![ValidationIssue::IncompleteTimeWindow]);
    }
}
