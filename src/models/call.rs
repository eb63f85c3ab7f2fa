//! Call placement requests and campaign outcomes.

use crate::domain::NormalizedPhone;
use crate::models::ContactRecord;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Variable carrying the contact's name into the agent script.
pub const CLIENT_NAME_VARIABLE: &str = "clientName";

/// Value of [`CLIENT_NAME_VARIABLE`] when the contact has no name.
pub const CLIENT_NAME_FALLBACK: &str = "there";

/// Everything the call placement layer needs for one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    pub phone: NormalizedPhone,
    pub display_name: Option<String>,
    /// Template variables for the agent script
    pub variables: BTreeMap<String, String>,
}

impl CallRequest {
    /// Build the request for a contact whose phone has been normalized.
    pub fn for_contact(contact: &ContactRecord, phone: NormalizedPhone) -> Self {
        let display_name = contact.display_name().map(str::to_string);

        let mut variables: BTreeMap<String, String> = contact
            .extra_fields()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        variables.insert(
            CLIENT_NAME_VARIABLE.to_string(),
            display_name
                .clone()
                .unwrap_or_else(|| CLIENT_NAME_FALLBACK.to_string()),
        );

        Self {
            phone,
            display_name,
            variables,
        }
    }
}

/// Opaque identifier of a call the voice-agent API accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallHandle {
    pub id: String,

    #[serde(default)]
    pub status: Option<String>,
}

/// Why a contact was not dialed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingPhone,
    InvalidPhone(String),
}

/// What happened to one contact during a campaign run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Skipped {
        name: Option<String>,
        reason: SkipReason,
    },
    Placed {
        phone: NormalizedPhone,
        call_id: String,
    },
    Failed {
        phone: NormalizedPhone,
        message: String,
    },
}

/// Per-contact outcomes of one campaign run, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignSummary {
    pub outcomes: Vec<ContactOutcome>,
}

impl CampaignSummary {
    pub fn placed(&self) -> usize {
        self.count(|o| matches!(o, ContactOutcome::Placed { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ContactOutcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ContactOutcome::Skipped { .. }))
    }

    fn count(&self, predicate: impl Fn(&ContactOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNormalizer;

    fn phone(raw: &str) -> NormalizedPhone {
        PhoneNormalizer::default().normalize(raw).unwrap()
    }

    #[test]
    fn test_request_threads_name_and_fields() {
        let contact = ContactRecord::from_pairs([
            ("name", "Ada"),
            ("phone_number", "5551234567"),
            ("company_name", "Engines Ltd"),
        ]);

        let request = CallRequest::for_contact(&contact, phone("5551234567"));
        assert_eq!(request.display_name.as_deref(), Some("Ada"));
        assert_eq!(request.variables.get("clientName").map(String::as_str), Some("Ada"));
        assert_eq!(
            request.variables.get("company_name").map(String::as_str),
            Some("Engines Ltd")
        );
        assert!(!request.variables.contains_key("phone_number"));
    }

    #[test]
    fn test_request_name_fallback() {
        let contact = ContactRecord::from_pairs([("phone_number", "5551234567")]);

        let request = CallRequest::for_contact(&contact, phone("5551234567"));
        assert_eq!(request.display_name, None);
        assert_eq!(
            request.variables.get(CLIENT_NAME_VARIABLE).map(String::as_str),
            Some(CLIENT_NAME_FALLBACK)
        );
    }

    #[test]
    fn test_call_handle_ignores_unknown_fields() {
        let handle: CallHandle =
            serde_json::from_str(r#"{"id": "call-1", "status": "queued", "cost": 0}"#).unwrap();
        assert_eq!(handle.id, "call-1");
        assert_eq!(handle.status.as_deref(), Some("queued"));
    }

    #[test]
    fn test_summary_counts() {
        let summary = CampaignSummary {
            outcomes: vec![
                ContactOutcome::Placed {
                    phone: phone("5551234567"),
                    call_id: "c1".to_string(),
                },
                ContactOutcome::Failed {
                    phone: phone("5551234568"),
                    message: "boom".to_string(),
                },
                ContactOutcome::Skipped {
                    name: None,
                    reason: SkipReason::MissingPhone,
                },
                ContactOutcome::Placed {
                    phone: phone("5551234569"),
                    call_id: "c2".to_string(),
                },
            ],
        };

        assert_eq!(summary.placed(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.skipped(), 1);
    }
}
