//! Application service layer.
//!
//! Services contain the campaign logic and orchestrate the collaborator
//! boundaries defined in `repositories`.

mod campaign_service;

pub use campaign_service::{CampaignRunner, DEFAULT_PACING};
