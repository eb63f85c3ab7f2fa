//! HTTP clients for the external vendor APIs.
//!
//! Every client is synchronous (`ureq`) and shares one [`VendorHttp`]
//! transport for timeouts, error mapping and metrics. The `async_wrapper`
//! module exposes them to async code via `tokio::task::spawn_blocking`.

mod async_wrapper;
pub mod crm;
pub mod service_account;
pub mod sheets;
pub mod vapi;
pub mod webhook;

pub use async_wrapper::{
    AsyncCrmSink, AsyncSheetsClient, AsyncSheetsClientImpl, AsyncVapiClient, AsyncVapiClientImpl,
    AsyncWebhookSink, ForwardingSink,
};
pub use crm::CrmClient;
pub use service_account::{
    ServiceAccountKey, ServiceAccountTokenProvider, StaticToken, TokenProvider,
};
pub use sheets::SheetsClient;
pub use vapi::VapiClient;
pub use webhook::WebhookClient;

use crate::error::{VendorError, VendorResult};
use crate::metrics::{HttpTimer, Metrics};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Status and body of a completed vendor request.
#[derive(Debug, Clone)]
pub struct VendorResponse {
    pub status: u16,
    pub body: String,
}

/// Shared HTTP transport for vendor clients.
///
/// Cheap to clone; clones share the connection pool and metrics.
#[derive(Clone)]
pub struct VendorHttp {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl VendorHttp {
    pub fn new(timeout: Duration, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Execute a GET request, optionally with a bearer token.
    pub fn get(&self, url: &str, bearer: Option<&str>) -> VendorResult<VendorResponse> {
        let request = self.request("GET", url, bearer);
        self.execute("GET", url, || request.call())
    }

    /// Execute a POST request with a JSON body.
    pub fn post_json<B: Serialize>(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> VendorResult<VendorResponse> {
        let payload = serde_json::to_value(body)?;
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let request = self
            .request("POST", url, bearer)
            .set("Content-Type", "application/json");
        self.execute("POST", url, || request.send_json(&payload))
    }

    /// Execute a POST request with a form-encoded body.
    pub fn post_form(&self, url: &str, form: &[(&str, &str)]) -> VendorResult<VendorResponse> {
        let request = self.request("POST", url, None);
        self.execute("POST", url, || request.send_form(form))
    }

    fn request(&self, method: &str, url: &str, bearer: Option<&str>) -> ureq::Request {
        let request = self.agent.request(method, url);
        match bearer {
            Some(token) => request.set("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    fn execute(
        &self,
        method: &str,
        url: &str,
        send: impl FnOnce() -> Result<ureq::Response, ureq::Error>,
    ) -> VendorResult<VendorResponse> {
        let timer = HttpTimer::new(self.metrics.clone());

        let result = send().map_err(map_error).and_then(|response| {
            let status = response.status();
            let body = response
                .into_string()
                .map_err(|e| VendorError::HttpError(e.to_string()))?;
            Ok(VendorResponse { status, body })
        });

        timer.finish(&result);
        match &result {
            Ok(response) => {
                tracing::debug!("{} {} - Success (status: {})", method, url, response.status)
            }
            Err(e) => tracing::debug!("{} {} - Error: {}", method, url, e),
        }

        result
    }
}

/// Join a base URL and a path with exactly one slash.
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Map a ureq error to a VendorError.
fn map_error(error: ureq::Error) -> VendorError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            match code {
                401 => VendorError::Unauthorized,
                404 => VendorError::NotFound(message),
                429 => VendorError::RateLimitExceeded,
                _ => VendorError::ApiError {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                VendorError::HttpError("Connection failed".to_string())
            } else if transport.kind() == ureq::ErrorKind::Io {
                VendorError::Timeout
            } else {
                VendorError::HttpError(transport.to_string())
            }
        }
    }
}
