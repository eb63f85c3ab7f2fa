use crate::client::AsyncSheetsClient;
use crate::models::{records_from_rows, ContactRecord};
use crate::repositories::traits::ContactSource;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact source backed by a spreadsheet range.
///
/// The first row of the range is the header. Without a client (missing
/// configuration) every fetch yields no contacts.
pub struct SheetContactSource {
    client: Option<Arc<dyn AsyncSheetsClient>>,
    range: String,
}

impl SheetContactSource {
    /// Create a source reading `range` (e.g. `Leads!A1:E`) through `client`.
    pub fn new(client: Arc<dyn AsyncSheetsClient>, range: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            range: range.into(),
        }
    }

    /// A source with no spreadsheet behind it.
    pub fn unconfigured() -> Self {
        Self {
            client: None,
            range: String::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl ContactSource for SheetContactSource {
    async fn fetch_contacts(&self) -> Vec<ContactRecord> {
        let Some(client) = &self.client else {
            tracing::warn!("Spreadsheet is not configured; no contacts to fetch");
            return Vec::new();
        };

        tracing::info!("Fetching contacts from range {}", self.range);
        match client.get_values(&self.range).await {
            Ok(rows) => {
                let records = records_from_rows(&rows);
                if records.is_empty() {
                    tracing::info!("No data found in the specified sheet range");
                } else {
                    tracing::info!("Successfully fetched {} contact records", records.len());
                }
                records
            }
            Err(e) => {
                tracing::error!("Error fetching contacts from spreadsheet: {}", e);
                Vec::new()
            }
        }
    }
}
