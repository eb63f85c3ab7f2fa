//! Outbound Dialer - spreadsheet-driven outbound calling campaigns.
//!
//! Reads leads from a spreadsheet, normalizes each phone number, and asks a
//! hosted voice-agent service to place one sales call per contact, pausing
//! between accepted calls. A small HTTP server triggers campaigns and serves
//! the frontend.
//!
//! # Architecture
//!
//! - **models**: Contact records, call requests, outcomes, and the assistant script
//! - **domain**: Phone normalization and the caller-ID pool
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP clients for the spreadsheet, voice-agent, webhook, and CRM APIs
//! - **repositories**: Contact source and call placement boundaries
//! - **services**: The campaign runner
//! - **server**: HTTP routes and application state

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{NormalizedPhone, NumberPool, PhoneNormalizer, ValidationError};
pub use error::{ConfigError, VendorError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{
    AgentProfile, CallHandle, CallRequest, CampaignSummary, ContactOutcome, ContactRecord,
};
pub use server::AppState;
pub use services::CampaignRunner;
