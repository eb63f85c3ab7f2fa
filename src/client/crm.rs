//! CRM contact-creation endpoint.

use super::{build_url, VendorHttp};
use crate::config::CrmConfig;
use crate::error::{VendorError, VendorResult};
use serde_json::Value;

/// Creates contacts in the marketing CRM.
#[derive(Clone)]
pub struct CrmClient {
    config: Option<CrmConfig>,
    http: VendorHttp,
}

impl CrmClient {
    pub fn new(config: Option<CrmConfig>, http: VendorHttp) -> Self {
        Self { config, http }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Create a contact, returning the API's status code.
    pub fn try_add_contact(&self, data: &Value) -> VendorResult<u16> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| VendorError::NotConfigured("GHL_API_KEY".to_string()))?;

        let url = build_url(&config.api_base_url, "/contacts/");
        let response = self.http.post_json(&url, Some(&config.api_key), data)?;
        Ok(response.status)
    }

    /// Fire-and-forget contact creation; failures are logged and dropped.
    pub fn add_contact(&self, data: &Value) {
        if !self.is_configured() {
            tracing::error!("GHL_API_KEY is not set. Cannot create CRM contact.");
            return;
        }

        tracing::info!("Creating CRM contact: {}", data);
        match self.try_add_contact(data) {
            Ok(status) => tracing::info!("CRM add contact response status: {}", status),
            Err(e) => tracing::error!("Error creating CRM contact: {}", e),
        }
    }
}
