//! Card wizard form record
//!
//! [`WizardFormState`] holds every field of all five steps. It is updated by
//! whole-record replacement: [`WizardFormState::with`] returns a copy with
//! exactly one field changed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::options::CardTypeId;
use crate::models::CardColor;

/// Whether a restriction list allows or blocks its entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    #[default]
    Allow,
    Block,
}

impl ListMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Allow => Self::Block,
            Self::Block => Self::Allow,
        }
    }

    /// Prefix used in the summary
    pub fn summary_prefix(&self) -> &'static str {
        match self {
            Self::Allow => "Allow only",
            Self::Block => "Block",
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "Allow only selected"),
            Self::Block => write!(f, "Block selected"),
        }
    }
}

/// Daily time window, as `HH:MM` strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

/// The string-array fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Categories,
    Merchants,
    AllowedDays,
    Regions,
}

/// Replacement of a single form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Assignee(String),
    UseTemplate(bool),
    CardType(Option<CardTypeId>),
    ValidPeriod(String),
    LimitPeriod(String),
    LimitAmount(String),
    LimitCount(String),
    TransactionLimit(String),
    CategoriesMode(ListMode),
    Categories(Vec<String>),
    MerchantsMode(ListMode),
    Merchants(Vec<String>),
    TimeMode(ListMode),
    AllowedDays(Vec<String>),
    AllowedTimes(TimeWindow),
    RegionsMode(ListMode),
    Regions(Vec<String>),
    AtmWithdrawal(bool),
    CardName(String),
    CardColor(CardColor),
    Team(String),
    Project(String),
}

impl FieldUpdate {
    /// Update replacing the given list field
    pub fn list(field: ListField, values: Vec<String>) -> Self {
        match field {
            ListField::Categories => Self::Categories(values),
            ListField::Merchants => Self::Merchants(values),
            ListField::AllowedDays => Self::AllowedDays(values),
            ListField::Regions => Self::Regions(values),
        }
    }
}

/// Every field of the card wizard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WizardFormState {
    // Card setup
    pub assignee: String,
    pub use_template: bool,
    pub card_type: Option<CardTypeId>,

    // Limits & validity
    pub valid_period: String,
    pub limit_period: String,
    pub limit_amount: String,
    pub limit_count: String,
    pub transaction_limit: String,

    // Card controls
    pub categories_mode: ListMode,
    pub categories: Vec<String>,
    pub merchants_mode: ListMode,
    pub merchants: Vec<String>,
    pub time_mode: ListMode,
    pub allowed_days: Vec<String>,
    pub allowed_times: TimeWindow,
    pub regions_mode: ListMode,
    pub regions: Vec<String>,
    pub atm_withdrawal: bool,

    // Customization
    pub card_name: String,
    pub card_color: CardColor,
    pub team: String,
    pub project: String,
}

impl WizardFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this record with one field replaced
    pub fn with(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::Assignee(v) => next.assignee = v,
            FieldUpdate::UseTemplate(v) => next.use_template = v,
            FieldUpdate::CardType(v) => next.card_type = v,
            FieldUpdate::ValidPeriod(v) => next.valid_period = v,
            FieldUpdate::LimitPeriod(v) => next.limit_period = v,
            FieldUpdate::LimitAmount(v) => next.limit_amount = v,
            FieldUpdate::LimitCount(v) => next.limit_count = v,
            FieldUpdate::TransactionLimit(v) => next.transaction_limit = v,
            FieldUpdate::CategoriesMode(v) => next.categories_mode = v,
            FieldUpdate::Categories(v) => next.categories = v,
            FieldUpdate::MerchantsMode(v) => next.merchants_mode = v,
            FieldUpdate::Merchants(v) => next.merchants = v,
            FieldUpdate::TimeMode(v) => next.time_mode = v,
            FieldUpdate::AllowedDays(v) => next.allowed_days = v,
            FieldUpdate::AllowedTimes(v) => next.allowed_times = v,
            FieldUpdate::RegionsMode(v) => next.regions_mode = v,
            FieldUpdate::Regions(v) => next.regions = v,
            FieldUpdate::AtmWithdrawal(v) => next.atm_withdrawal = v,
            FieldUpdate::CardName(v) => next.card_name = v,
            FieldUpdate::CardColor(v) => next.card_color = v,
            FieldUpdate::Team(v) => next.team = v,
            FieldUpdate::Project(v) => next.project = v,
        }
        next
    }

    /// Current contents of a list field
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Categories => &self.categories,
            ListField::Merchants => &self.merchants,
            ListField::AllowedDays => &self.allowed_days,
            ListField::Regions => &self.regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = WizardFormState::new();
        assert_eq!(form.card_color, CardColor::Grey);
        assert_eq!(form.categories_mode, ListMode::Allow);
        assert!(form.card_type.is_none());
        assert!(form.allowed_times.is_empty());
        assert!(!form.atm_withdrawal);
    }

    #[test]
    fn test_with_replaces_one_field() {
        let form = WizardFormState::new().with(FieldUpdate::Assignee("Jane".into()));
        let changed = form.with(FieldUpdate::CardName("Ops Card".into()));
        assert_eq!(changed.card_name, "Ops Card");
        assert_eq!(changed.assignee, "Jane");
        assert_eq!(form.card_name, "");

        let mut expected = form.clone();
        expected.card_name = "Ops Card".into();
        assert_eq!(changed, expected);
    }

    #[test]
    fn test_list_update_targets_field() {
        let form = WizardFormState::new()
            .with(FieldUpdate::list(ListField::Regions, vec!["EU".into()]));
        assert_eq!(form.list(ListField::Regions), ["EU".to_string()]);
        assert!(form.list(ListField::Merchants).is_empty());
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ListMode::Allow.toggled(), ListMode::Block);
        assert_eq!(ListMode::Block.summary_prefix(), "Block");
    }
}
