//! Voice-agent API client for outbound calls.

use super::{build_url, VendorHttp};
use crate::config::VapiConfig;
use crate::error::{VendorError, VendorResult};
use crate::models::{AgentProfile, AssistantSpec, CallHandle, CallRequest};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCallBody<'a> {
    assistant: AssistantSpec,
    phone_number_id: &'a str,
    customer: Customer<'a>,
    assistant_overrides: AssistantOverrides<'a>,
}

#[derive(Debug, Serialize)]
struct Customer<'a> {
    number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssistantOverrides<'a> {
    variable_values: &'a BTreeMap<String, String>,
}

/// Places outbound calls with a transient sales assistant.
#[derive(Clone)]
pub struct VapiClient {
    base_url: String,
    api_key: String,
    phone_number_id: Option<String>,
    agent: AgentProfile,
    http: VendorHttp,
}

impl VapiClient {
    pub fn new(config: &VapiConfig, agent: AgentProfile, http: VendorHttp) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            phone_number_id: config.phone_number_id.clone(),
            agent,
            http,
        }
    }

    /// Start an outbound call to `request.phone`.
    ///
    /// # Errors
    ///
    /// - `VendorError::NotConfigured` without an originating phone-number ID
    /// - any transport or API error from the call endpoint
    pub fn create_call(&self, request: &CallRequest) -> VendorResult<CallHandle> {
        let phone_number_id = self
            .phone_number_id
            .as_deref()
            .ok_or_else(|| VendorError::NotConfigured("VAPI_PHONE_NUMBER_ID".to_string()))?;

        let body = CreateCallBody {
            assistant: self.agent.assistant_for(request.display_name.as_deref()),
            phone_number_id,
            customer: Customer {
                number: request.phone.as_str(),
            },
            assistant_overrides: AssistantOverrides {
                variable_values: &request.variables,
            },
        };

        let response = self
            .http
            .post_json(&build_url(&self.base_url, "/call"), Some(&self.api_key), &body)?;

        let handle: CallHandle = serde_json::from_str(&response.body)?;
        if handle.id.is_empty() {
            return Err(VendorError::Other("Call created without an id".to_string()));
        }
        Ok(handle)
    }
}
