//! Collaborator boundaries consumed by the campaign runner.

mod sheet_contact_source;
mod traits;
mod vapi_call_placement;

pub use sheet_contact_source::SheetContactSource;
pub use traits::{CallPlacement, ContactSource};
pub use vapi_call_placement::VapiCallPlacement;
