use crate::client::AsyncVapiClient;
use crate::error::VendorResult;
use crate::models::{CallHandle, CallRequest};
use crate::repositories::traits::CallPlacement;
use async_trait::async_trait;
use std::sync::Arc;

/// Call placement through the voice-agent API.
pub struct VapiCallPlacement {
    client: Arc<dyn AsyncVapiClient>,
}

impl VapiCallPlacement {
    pub fn new(client: Arc<dyn AsyncVapiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CallPlacement for VapiCallPlacement {
    async fn place_call(&self, request: &CallRequest) -> VendorResult<CallHandle> {
        self.client.create_call(request).await
    }
}
