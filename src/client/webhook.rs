//! Generic automation webhook receiver.

use super::VendorHttp;
use crate::error::{VendorError, VendorResult};
use serde_json::Value;

/// Posts JSON payloads to a configured webhook URL.
#[derive(Clone)]
pub struct WebhookClient {
    url: Option<String>,
    http: VendorHttp,
}

impl WebhookClient {
    pub fn new(url: Option<String>, http: VendorHttp) -> Self {
        Self { url, http }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Post `data`, returning the receiver's status code.
    pub fn try_send(&self, data: &Value) -> VendorResult<u16> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| VendorError::NotConfigured("PABBLY_WEBHOOK_URL".to_string()))?;

        let response = self.http.post_json(url, None, data)?;
        Ok(response.status)
    }

    /// Fire-and-forget send; failures are logged and dropped.
    pub fn send(&self, data: &Value) {
        if !self.is_configured() {
            tracing::error!("PABBLY_WEBHOOK_URL is not set. Cannot send data.");
            return;
        }

        tracing::info!("Sending data to webhook: {}", data);
        match self.try_send(data) {
            Ok(status) => tracing::info!("Webhook response status: {}", status),
            Err(e) => tracing::error!("Error sending data to webhook: {}", e),
        }
    }
}
