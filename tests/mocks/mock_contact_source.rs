use async_trait::async_trait;
use outbound_dialer::models::ContactRecord;
use outbound_dialer::repositories::ContactSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock contact source for testing.
///
/// Returns the same fixed list on every fetch and counts fetches.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactSource {
    contacts: Vec<ContactRecord>,
    fetches: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockContactSource {
    pub fn new(contacts: Vec<ContactRecord>) -> Self {
        Self {
            contacts,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Build a source from `(name, phone_number)` pairs.
    pub fn with_people(people: &[(&str, &str)]) -> Self {
        Self::new(
            people
                .iter()
                .map(|(name, phone)| {
                    ContactRecord::from_pairs([("name", *name), ("phone_number", *phone)])
                })
                .collect(),
        )
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactSource for MockContactSource {
    async fn fetch_contacts(&self) -> Vec<ContactRecord> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.contacts.clone()
    }
}
