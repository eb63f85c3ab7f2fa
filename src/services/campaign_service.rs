//! Campaign execution.
//!
//! Dials every contact of a source one at a time, pausing after each
//! accepted call, and never lets a single contact's failure end the run.

use crate::domain::{PhoneNormalizer, ValidationError};
use crate::metrics::Metrics;
use crate::models::{CallRequest, CampaignSummary, ContactOutcome, ContactRecord, SkipReason};
use crate::repositories::{CallPlacement, ContactSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Default delay after each successfully placed call.
pub const DEFAULT_PACING: Duration = Duration::from_millis(5000);

/// Drives one campaign at a time over a contact source.
///
/// At most one placement is in flight: each call is awaited before the
/// loop moves on.
pub struct CampaignRunner {
    source: Arc<dyn ContactSource>,
    placement: Arc<dyn CallPlacement>,
    normalizer: PhoneNormalizer,
    pacing: Duration,
    metrics: Metrics,
}

impl CampaignRunner {
    pub fn new(
        source: Arc<dyn ContactSource>,
        placement: Arc<dyn CallPlacement>,
        normalizer: PhoneNormalizer,
        pacing: Duration,
    ) -> Self {
        Self {
            source,
            placement,
            normalizer,
            pacing,
            metrics: Metrics::new(),
        }
    }

    /// Report outcomes into a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Run the campaign to completion over the full contact list.
    ///
    /// Contacts are processed in source order. A successful placement is
    /// followed by the pacing delay unless it was the last contact; skipped
    /// and failed contacts move on immediately.
    pub async fn run(&self) -> CampaignSummary {
        self.metrics.record_campaign_started();
        info!("Starting outbound calling campaign");

        let contacts = self.source.fetch_contacts().await;
        if contacts.is_empty() {
            info!("No contacts found to call");
            return CampaignSummary::default();
        }

        info!("Found {} contacts. Starting calls...", contacts.len());
        let last = contacts.len() - 1;
        let mut summary = CampaignSummary {
            outcomes: Vec::with_capacity(contacts.len()),
        };

        for (index, contact) in contacts.iter().enumerate() {
            let outcome = self.process_contact(contact).await;
            let placed = matches!(outcome, ContactOutcome::Placed { .. });
            summary.outcomes.push(outcome);

            if placed && index < last {
                tokio::time::sleep(self.pacing).await;
            }
        }

        info!(
            placed = summary.placed(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            "Calling campaign finished"
        );
        summary
    }

    async fn process_contact(&self, contact: &ContactRecord) -> ContactOutcome {
        let name = contact.display_name();

        let phone = match self.normalizer.normalize(contact.raw_phone()) {
            Ok(phone) => phone,
            Err(e) => {
                let reason = match e {
                    ValidationError::EmptyPhone => {
                        info!(
                            "Skipping contact {} due to missing phone number",
                            name.unwrap_or("N/A")
                        );
                        SkipReason::MissingPhone
                    }
                    other => {
                        info!(
                            "Skipping contact {}: {}",
                            name.unwrap_or("N/A"),
                            other
                        );
                        SkipReason::InvalidPhone(contact.raw_phone().to_string())
                    }
                };
                self.metrics.record_contact_skipped();
                return ContactOutcome::Skipped {
                    name: name.map(str::to_string),
                    reason,
                };
            }
        };

        info!(
            "Initiating outbound call to {} at {}",
            name.unwrap_or("client"),
            phone
        );
        let request = CallRequest::for_contact(contact, phone.clone());

        match self.placement.place_call(&request).await {
            Ok(handle) => {
                info!("Call to {} initiated (ID: {})", phone, handle.id);
                self.metrics.record_call_placed();
                ContactOutcome::Placed {
                    phone,
                    call_id: handle.id,
                }
            }
            Err(e) => {
                warn!("Failed to initiate call to {}: {}", phone, e);
                self.metrics.record_call_failed();
                ContactOutcome::Failed {
                    phone,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{VendorError, VendorResult};
    use crate::models::CallHandle;
    use async_trait::async_trait;

    struct FixedSource(Vec<ContactRecord>);

    #[async_trait]
    impl ContactSource for FixedSource {
        async fn fetch_contacts(&self) -> Vec<ContactRecord> {
            self.0.clone()
        }
    }

    /// Accepts every number except those ending in `0000`.
    struct PickyPlacement;

    #[async_trait]
    impl CallPlacement for PickyPlacement {
        async fn place_call(&self, request: &CallRequest) -> VendorResult<CallHandle> {
            if request.phone.as_str().ends_with("0000") {
                return Err(VendorError::ApiError {
                    status: 400,
                    message: "rejected".to_string(),
                });
            }
            Ok(CallHandle {
                id: format!("call-{}", request.phone.digits()),
                status: None,
            })
        }
    }

    fn runner(contacts: Vec<ContactRecord>, metrics: Metrics) -> CampaignRunner {
        CampaignRunner::new(
            Arc::new(FixedSource(contacts)),
            Arc::new(PickyPlacement),
            PhoneNormalizer::default(),
            Duration::from_millis(1),
        )
        .with_metrics(metrics)
    }

    #[tokio::test]
    async fn test_outcomes_follow_source_order() {
        let metrics = Metrics::new();
        let runner = runner(
            vec![
                ContactRecord::from_pairs([("name", "Ada"), ("phone_number", "(555) 123-4567")]),
                ContactRecord::from_pairs([("name", "Bob"), ("phone_number", "")]),
                ContactRecord::from_pairs([("name", "Cy"), ("phone_number", "123")]),
                ContactRecord::from_pairs([("name", "Di"), ("phone_number", "555-555-0000")]),
            ],
            metrics.clone(),
        );

        let summary = runner.run().await;

        assert_eq!(summary.outcomes.len(), 4);
        assert!(matches!(
            &summary.outcomes[0],
            ContactOutcome::Placed { call_id, .. } if call_id == "call-15551234567"
        ));
        assert!(matches!(
            &summary.outcomes[1],
            ContactOutcome::Skipped { reason: SkipReason::MissingPhone, .. }
        ));
        assert!(matches!(
            &summary.outcomes[2],
            ContactOutcome::Skipped { reason: SkipReason::InvalidPhone(raw), .. } if raw == "123"
        ));
        assert!(matches!(&summary.outcomes[3], ContactOutcome::Failed { .. }));

        let snapshot = metrics.summary();
        assert_eq!(snapshot.campaigns_started_total, 1);
        assert_eq!(snapshot.calls_placed_total, 1);
        assert_eq!(snapshot.calls_failed_total, 1);
        assert_eq!(snapshot.contacts_skipped_total, 2);
    }

    #[tokio::test]
    async fn test_empty_source_completes() {
        let summary = runner(Vec::new(), Metrics::new()).run().await;
        assert_eq!(summary, CampaignSummary::default());
    }

    #[test]
    fn test_default_pacing() {
        assert_eq!(DEFAULT_PACING, Duration::from_secs(5));
    }
}
