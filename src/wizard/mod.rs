//! Card creation wizard
//!
//! A five-step flow collecting everything needed to request a new card.
//! [`CardWizard`] pairs the current [`Step`] with a [`WizardFormState`].
//! Steps move with [`CardWizard::advance`] and [`CardWizard::retreat`], which
//! saturate at both ends. The form only changes through
//! [`CardWizard::set_field`]; the list helpers compute a new list and hand
//! it to `set_field`.
//!
//! Nothing gates the steps: the summary is reachable with an empty form and
//! [`CardWizard::submit`] always succeeds. Problems are reported by
//! [`CardWizard::validate`] as advisory warnings.

pub mod form;
pub mod options;
pub mod steps;
pub mod summary;
pub mod validate;

pub use form::{FieldUpdate, ListField, ListMode, TimeWindow, WizardFormState};
pub use options::CardTypeId;
pub use steps::Step;
pub use summary::{SummarySection, WizardSummary};
pub use validate::ValidationIssue;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::RequestId;

/// Outcome of adding an entry to a merchant or region list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEdit {
    Added,
    /// The input was empty after trimming
    Blank,
    /// The trimmed input is already listed
    Duplicate,
}

/// A submitted card request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRequest {
    pub id: RequestId,
    pub form: WizardFormState,
    /// Advisory issues present at submission
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CardRequest {
    /// Name shown in messages
    pub fn display_name(&self) -> &str {
        if self.form.card_name.is_empty() {
            "Unnamed Card"
        } else {
            &self.form.card_name
        }
    }
}

/// Wizard state: current step plus the form record
#[derive(Debug, Clone, Default)]
pub struct CardWizard {
    step: Step,
    form: WizardFormState,
}

impl CardWizard {
    /// Start at step 1 with an empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &WizardFormState {
        &self.form
    }

    /// Move to the next step; no-op on the last step
    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Move to the previous step; no-op on the first step
    pub fn retreat(&mut self) {
        self.step = self.step.prev();
    }

    /// Replace exactly one field of the form
    pub fn set_field(&mut self, update: FieldUpdate) {
        debug!(?update, "wizard field updated");
        self.form = self.form.with(update);
    }

    /// Add `item` to a list field if absent, remove it if present
    pub fn toggle_in_array(&mut self, field: ListField, item: &str) {
        let current = self.form.list(field);
        let updated: Vec<String> = if current.iter().any(|v| v == item) {
            current.iter().filter(|v| *v != item).cloned().collect()
        } else {
            current.iter().cloned().chain([item.to_string()]).collect()
        };
        self.set_field(FieldUpdate::list(field, updated));
    }

    fn add_unique(&mut self, field: ListField, input: &str) -> ListEdit {
        let value = input.trim();
        if value.is_empty() {
            return ListEdit::Blank;
        }
        let current = self.form.list(field);
        if current.iter().any(|v| v == value) {
            return ListEdit::Duplicate;
        }
        let updated = current.iter().cloned().chain([value.to_string()]).collect();
        self.set_field(FieldUpdate::list(field, updated));
        ListEdit::Added
    }

    fn remove_exact(&mut self, field: ListField, value: &str) {
        let updated = self
            .form
            .list(field)
            .iter()
            .filter(|v| *v != value)
            .cloned()
            .collect();
        self.set_field(FieldUpdate::list(field, updated));
    }

    /// Add a merchant, rejecting blank and duplicate names
    pub fn add_merchant(&mut self, name: &str) -> ListEdit {
        self.add_unique(ListField::Merchants, name)
    }

    pub fn remove_merchant(&mut self, name: &str) {
        self.remove_exact(ListField::Merchants, name);
    }

    /// Add a region, rejecting blank and duplicate names
    pub fn add_region(&mut self, name: &str) -> ListEdit {
        self.add_unique(ListField::Regions, name)
    }

    pub fn remove_region(&mut self, name: &str) {
        self.remove_exact(ListField::Regions, name);
    }

    pub fn summary(&self, currency_symbol: &str) -> WizardSummary {
        WizardSummary::from_form(&self.form, currency_symbol)
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate::validate(&self.form)
    }

    /// Finish the wizard, producing the request for the final form
    pub fn submit(self) -> CardRequest {
        let warnings = self.validate().iter().map(ToString::to_string).collect();
        CardRequest {
            id: RequestId::new(),
            form: self.form,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::CardList;
    use crate::sample;

    #[test]
    fn test_advance_saturates_at_summary() {
        let mut wizard = CardWizard::new();
        for _ in 0..10 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), Step::Summary);
        assert_eq!(wizard.step().number(), 5);
    }

    #[test]
    fn test_retreat_saturates_at_setup() {
        let mut wizard = CardWizard::new();
        wizard.retreat();
        assert_eq!(wizard.step(), Step::CardSetup);
        wizard.advance();
        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.step().number(), 1);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut wizard = CardWizard::new();
        wizard.toggle_in_array(ListField::Categories, "Travel");
        assert_eq!(wizard.form().categories, vec!["Travel".to_string()]);
        wizard.toggle_in_array(ListField::Categories, "Travel");
        assert!(wizard.form().categories.is_empty());
    }

    #[test]
    fn test_toggle_keeps_order() {
        let mut wizard = CardWizard::new();
        for day in ["Monday", "Friday", "Sunday"] {
            wizard.toggle_in_array(ListField::AllowedDays, day);
        }
        wizard.toggle_in_array(ListField::AllowedDays, "Friday");
        assert_eq!(wizard.form().allowed_days, vec!["Monday", "Sunday"]);
    }

    #[test]
    fn test_add_merchant_rejects_duplicates() {
        let mut wizard = CardWizard::new();
        assert_eq!(wizard.add_merchant("Amazon"), ListEdit::Added);
        assert_eq!(wizard.add_merchant("Amazon"), ListEdit::Duplicate);
        assert_eq!(wizard.add_merchant("  Amazon "), ListEdit::Duplicate);
        assert_eq!(wizard.form().merchants, vec!["Amazon".to_string()]);
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut wizard = CardWizard::new();
        let before = wizard.form().clone();
        assert_eq!(wizard.add_region("   "), ListEdit::Blank);
        assert_eq!(wizard.form(), &before);
    }

    #[test]
    fn test_add_trims_input() {
        let mut wizard = CardWizard::new();
        wizard.add_region("  EU ");
        assert_eq!(wizard.form().regions, vec!["EU".to_string()]);
    }

    #[test]
    fn test_remove_by_exact_value() {
        let mut wizard = CardWizard::new();
        wizard.add_merchant("Amazon");
        wizard.add_merchant("Uber");
        wizard.remove_merchant("amazon");
        assert_eq!(wizard.form().merchants.len(), 2);
        wizard.remove_merchant("Amazon");
        assert_eq!(wizard.form().merchants, vec!["Uber".to_string()]);
        wizard.remove_region("nowhere");
        assert!(wizard.form().regions.is_empty());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut wizard = CardWizard::new();
        wizard.set_field(FieldUpdate::Assignee("Jane".into()));
        let before = wizard.form().clone();
        wizard.set_field(FieldUpdate::AtmWithdrawal(true));
        let mut expected = before;
        expected.atm_withdrawal = true;
        assert_eq!(wizard.form(), &expected);
    }

    #[test]
    fn test_summary_reachable_with_empty_form() {
        let mut wizard = CardWizard::new();
        for _ in 0..4 {
            wizard.advance();
        }
        assert!(wizard.step().is_last());
        assert_eq!(wizard.summary("€").value("Card Name"), Some("Unnamed Card"));
        assert!(!wizard.validate().is_empty());
    }

    #[test]
    fn test_end_to_end_create() {
        let cards = CardList::new(sample::cards());
        let before = cards.items().to_vec();

        let mut wizard = CardWizard::new();
        wizard.set_field(FieldUpdate::CardType(Some(CardTypeId::Virtual)));
        wizard.set_field(FieldUpdate::CardName("Ops Card".into()));
        for _ in 0..4 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), Step::Summary);

        let lines = wizard.summary("€").lines();
        assert!(lines.iter().any(|l| l.contains("Ops Card")));
        assert!(lines.iter().any(|l| l.contains("Virtual Card")));

        let request = wizard.submit();
        assert_eq!(request.display_name(), "Ops Card");
        assert_eq!(request.warnings, vec!["No assignee specified".to_string()]);
        assert_eq!(cards.items(), before.as_slice());
    }
}
