//! Async wrappers around the synchronous vendor clients.
//!
//! Each wrapper runs the blocking HTTP call on tokio's blocking pool via
//! `tokio::task::spawn_blocking`, so a slow vendor never stalls the runtime
//! that also serves HTTP requests.

use super::{CrmClient, SheetsClient, VapiClient, WebhookClient};
use crate::error::{VendorError, VendorResult};
use crate::models::{CallHandle, CallRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async spreadsheet operations.
#[async_trait]
pub trait AsyncSheetsClient: Send + Sync {
    async fn get_values(&self, range: &str) -> VendorResult<Vec<Vec<String>>>;
    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> VendorResult<u64>;
}

/// Async voice-agent operations.
#[async_trait]
pub trait AsyncVapiClient: Send + Sync {
    async fn create_call(&self, request: &CallRequest) -> VendorResult<CallHandle>;
}

/// A fire-and-forget destination for contact data.
///
/// Implementations swallow and log their own failures.
#[async_trait]
pub trait ForwardingSink: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn forward(&self, data: Value);
}

fn join_error(e: tokio::task::JoinError) -> VendorError {
    VendorError::HttpError(format!("Task join error: {}", e))
}

#[derive(Clone)]
pub struct AsyncSheetsClientImpl {
    client: Arc<SheetsClient>,
}

impl AsyncSheetsClientImpl {
    pub fn new(client: SheetsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncSheetsClient for AsyncSheetsClientImpl {
    async fn get_values(&self, range: &str) -> VendorResult<Vec<Vec<String>>> {
        let client = self.client.clone();
        let range = range.to_string();

        tokio::task::spawn_blocking(move || client.get_values(&range))
            .await
            .map_err(join_error)?
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> VendorResult<u64> {
        let client = self.client.clone();
        let range = range.to_string();

        tokio::task::spawn_blocking(move || client.append_rows(&range, &rows))
            .await
            .map_err(join_error)?
    }
}

#[derive(Clone)]
pub struct AsyncVapiClientImpl {
    client: Arc<VapiClient>,
}

impl AsyncVapiClientImpl {
    pub fn new(client: VapiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncVapiClient for AsyncVapiClientImpl {
    async fn create_call(&self, request: &CallRequest) -> VendorResult<CallHandle> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.create_call(&request))
            .await
            .map_err(join_error)?
    }
}

/// [`ForwardingSink`] backed by the automation webhook.
#[derive(Clone)]
pub struct AsyncWebhookSink {
    client: Arc<WebhookClient>,
}

impl AsyncWebhookSink {
    pub fn new(client: WebhookClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ForwardingSink for AsyncWebhookSink {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn forward(&self, data: Value) {
        let client = self.client.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || client.send(&data)).await {
            tracing::error!("Webhook task failed: {}", e);
        }
    }
}

/// [`ForwardingSink`] that creates CRM contacts.
#[derive(Clone)]
pub struct AsyncCrmSink {
    client: Arc<CrmClient>,
}

impl AsyncCrmSink {
    pub fn new(client: CrmClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ForwardingSink for AsyncCrmSink {
    fn name(&self) -> &'static str {
        "crm"
    }

    async fn forward(&self, data: Value) {
        let client = self.client.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || client.add_contact(&data)).await {
            tracing::error!("CRM task failed: {}", e);
        }
    }
}
