//! Request log entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RequestId;
use crate::wizard::{CardRequest, WizardFormState};

/// A single submitted card request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEntry {
    /// When the request was submitted (UTC)
    pub timestamp: DateTime<Utc>,

    pub request_id: RequestId,

    /// Card name, or "Unnamed Card"
    pub card_name: String,

    /// Card type name, if one was chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Advisory validation warnings at submission
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// The complete form as submitted
    pub form: WizardFormState,
}

impl RequestEntry {
    /// Entry for a request submitted now
    pub fn submitted(request: &CardRequest) -> Self {
        let form = &request.form;
        Self {
            timestamp: Utc::now(),
            request_id: request.id,
            card_name: request.display_name().to_string(),
            card_type: form.card_type.map(|t| t.name().to_string()),
            assignee: Some(form.assignee.clone()).filter(|a| !a.is_empty()),
            warnings: request.warnings.clone(),
            form: form.clone(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.request_id,
            self.card_name
        );

        if let Some(card_type) = &self.card_type {
            output.push_str(&format!(" ({})", card_type));
        }
        if let Some(assignee) = &self.assignee {
            output.push_str(&format!(" for {}", assignee));
        }
        for warning in &self.warnings {
            output.push_str(&format!("\n  Warning: {}", warning));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{CardTypeId, CardWizard, FieldUpdate};

    fn request() -> CardRequest {
        let mut wizard = CardWizard::new();
        wizard.set_field(FieldUpdate::CardName("Ops Card".into()));
        wizard.set_field(FieldUpdate::CardType(Some(CardTypeId::Lodge)));
        wizard.submit()
    }

    #[test]
    fn test_submitted_entry() {
        let request = request();
        let entry = RequestEntry::submitted(&request);
        assert_eq!(entry.request_id, request.id);
        assert_eq!(entry.card_name, "Ops Card");
        assert_eq!(entry.card_type.as_deref(), Some("Lodge Card"));
        assert!(entry.assignee.is_none());
        assert_eq!(entry.warnings, vec!["No assignee specified".to_string()]);
    }

    #[test]
    fn test_serialization() {
        let entry = RequestEntry::submitted(&request());
        let json = serde_json::to_string(&entry).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("assignee").is_none());
        assert!(value.get("card_type").is_some());
        // The nested form always carries every field
        assert_eq!(value["form"]["assignee"], "");

        let back: RequestEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.form, entry.form);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = RequestEntry::submitted(&request());
        let text = entry.format_human_readable();
        assert!(text.contains("Ops Card (Lodge Card)"));
        assert!(text.contains("req-"));
        assert!(text.contains("Warning: No assignee specified"));
    }
}
