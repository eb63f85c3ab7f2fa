//! Data models for the outbound dialer.
//!
//! This module contains all the data structures used to represent contact rows,
//! call requests and outcomes, and the voice agent's assistant definition.

pub mod assistant;
pub mod call;
pub mod contact;

pub use assistant::{AgentProfile, AssistantSpec};
pub use call::{CallHandle, CallRequest, CampaignSummary, ContactOutcome, SkipReason};
pub use contact::{normalize_header, records_from_rows, ContactRecord};
