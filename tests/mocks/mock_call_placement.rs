use async_trait::async_trait;
use outbound_dialer::error::{VendorError, VendorResult};
use outbound_dialer::models::{CallHandle, CallRequest};
use outbound_dialer::repositories::CallPlacement;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::time::Instant;

/// A placement attempt as seen by the mock.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct PlacedCall {
    pub phone: String,
    pub display_name: Option<String>,
    pub at: Instant,
}

/// Mock call placement for testing.
///
/// Accepts every number except those registered with [`fail_for`], and
/// records each attempt with the (possibly paused) tokio clock. With a gate,
/// every attempt blocks until the test releases a permit.
///
/// [`fail_for`]: MockCallPlacement::fail_for
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCallPlacement {
    failing: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<PlacedCall>>>,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
impl MockCallPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// A placement whose attempts wait on the returned semaphore.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let placement = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (placement, gate)
    }

    /// Reject calls to `phone` (in E.164 form).
    pub fn fail_for(&self, phone: &str) {
        self.failing.lock().unwrap().insert(phone.to_string());
    }

    pub fn calls(&self) -> Vec<PlacedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CallPlacement for MockCallPlacement {
    async fn place_call(&self, request: &CallRequest) -> VendorResult<CallHandle> {
        let phone = request.phone.as_str().to_string();
        self.calls.lock().unwrap().push(PlacedCall {
            phone: phone.clone(),
            display_name: request.display_name.clone(),
            at: Instant::now(),
        });

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| VendorError::Other(e.to_string()))?
                .forget();
        }

        if self.failing.lock().unwrap().contains(&phone) {
            return Err(VendorError::ApiError {
                status: 400,
                message: format!("Cannot call {}", phone),
            });
        }

        Ok(CallHandle {
            id: format!("call-{}", self.call_count()),
            status: Some("queued".to_string()),
        })
    }
}
