//! In-memory collaborators for driving the campaign runner in tests.

mod mock_call_placement;
mod mock_contact_source;

#[allow(unused_imports)]
pub use mock_call_placement::{MockCallPlacement, PlacedCall};
#[allow(unused_imports)]
pub use mock_contact_source::MockContactSource;
