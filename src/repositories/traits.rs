use crate::error::VendorResult;
use crate::models::{CallHandle, CallRequest, ContactRecord};
use async_trait::async_trait;

/// Supplies the ordered contact list for a campaign run.
///
/// Implementations contain their own failures: a source that cannot be
/// read yields an empty list rather than an error.
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Fetch every contact, in source order.
    async fn fetch_contacts(&self) -> Vec<ContactRecord>;
}

/// Places one outbound call.
///
/// A returned error is a per-contact failure; callers do not retry.
#[async_trait]
pub trait CallPlacement: Send + Sync {
    async fn place_call(&self, request: &CallRequest) -> VendorResult<CallHandle>;
}
