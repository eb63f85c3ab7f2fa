//! Configuration management for the outbound dialer.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Only the voice-agent API key is required at boot; every other
//! collaborator degrades to an empty or no-op mode when its settings are absent.

use crate::error::{ConfigError, ConfigResult};
use crate::models::AgentProfile;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_VAPI_API_URL: &str = "https://api.vapi.ai";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_CRM_API_URL: &str = "https://rest.gohighlevel.com/v1";

/// Number of `TWILIO_PHONE_{n}` slots read into the caller-ID pool.
const CALLER_ID_SLOTS: usize = 10;

/// Configuration for the outbound dialer.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (default: 3000)
    pub port: u16,

    /// HTTP request timeout in seconds for vendor calls (default: 10)
    pub request_timeout: u64,

    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Directory holding the built frontend (default: "frontend/dist")
    pub frontend_dir: PathBuf,

    /// Campaign loop settings
    pub campaign: CampaignConfig,

    /// Spreadsheet contact source; `None` when any sheet setting is missing
    pub sheets: Option<SheetsConfig>,

    /// Voice-agent API settings
    pub vapi: VapiConfig,

    /// Script and voice settings for the calling agent
    pub agent: AgentProfile,

    /// Automation webhook receiver URL
    pub webhook_url: Option<String>,

    /// CRM contact-creation endpoint; `None` without an API key
    pub crm: Option<CrmConfig>,

    /// Outbound caller numbers for rotation
    pub caller_ids: Vec<String>,
}

/// Campaign pacing and normalization policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    /// Delay after each successfully placed call, in milliseconds (default: 5000)
    pub pacing_ms: u64,

    /// Country code prepended to 10-digit national numbers (default: "1")
    pub default_country_code: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 5000,
            default_country_code: "1".to_string(),
        }
    }
}

/// Location of the contact sheet and the credential used to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    /// Cell range within the sheet, e.g. `A1:E`
    pub range: String,
    /// Path to a service-account JSON key file
    pub credentials_path: PathBuf,
    pub api_base_url: String,
}

impl SheetsConfig {
    /// The A1 range qualified with the sheet name, e.g. `Leads!A1:E`.
    pub fn full_range(&self) -> String {
        format!("{}!{}", self.sheet_name, self.range)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VapiConfig {
    pub api_key: String,
    /// Originating phone-number identifier for outbound calls
    pub phone_number_id: Option<String>,
    pub api_base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmConfig {
    pub api_key: String,
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `VAPI_API_KEY`: voice-agent API key
    ///
    /// Optional environment variables:
    /// - `VAPI_PHONE_NUMBER_ID`, `VAPI_API_BASE_URL`
    /// - `GOOGLE_SHEET_ID`, `GOOGLE_SHEET_NAME`, `GOOGLE_SHEET_RANGE`,
    ///   `GOOGLE_APPLICATION_CREDENTIALS`, `GOOGLE_SHEETS_API_BASE_URL`
    /// - `PABBLY_WEBHOOK_URL`
    /// - `GHL_API_KEY`, `GHL_API_BASE_URL`
    /// - `TWILIO_PHONE_1` .. `TWILIO_PHONE_10`
    /// - `PORT` (default: 3000), `REQUEST_TIMEOUT` (default: 10),
    ///   `CALL_PACING_MS` (default: 5000), `DEFAULT_COUNTRY_CODE` (default: "1"),
    ///   `FRONTEND_DIR` (default: "frontend/dist"), `LOG_LEVEL` (default: "info")
    /// - `AGENT_*` script overrides
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_key = env::var("VAPI_API_KEY")
            .map_err(|_| ConfigError::MissingVar("VAPI_API_KEY".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "VAPI_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let phone_number_id = Self::optional_var("VAPI_PHONE_NUMBER_ID");
        if phone_number_id.is_none() {
            tracing::warn!("VAPI_PHONE_NUMBER_ID is not set; outbound calls will fail");
        }

        let vapi = VapiConfig {
            api_key,
            phone_number_id,
            api_base_url: Self::parse_env_url("VAPI_API_BASE_URL", DEFAULT_VAPI_API_URL)?,
        };

        let campaign = CampaignConfig {
            pacing_ms: Self::parse_env_u64("CALL_PACING_MS", 5000)?,
            default_country_code: Self::optional_var("DEFAULT_COUNTRY_CODE")
                .unwrap_or_else(|| "1".to_string()),
        };
        crate::domain::PhoneNormalizer::new(campaign.default_country_code.clone()).map_err(
            |e| ConfigError::InvalidValue {
                var: "DEFAULT_COUNTRY_CODE".to_string(),
                reason: e.to_string(),
            },
        )?;

        let webhook_url = match Self::optional_var("PABBLY_WEBHOOK_URL") {
            Some(url) => Some(Self::validate_url("PABBLY_WEBHOOK_URL", url)?),
            None => None,
        };

        let crm = match Self::optional_var("GHL_API_KEY") {
            Some(api_key) => Some(CrmConfig {
                api_key,
                api_base_url: Self::parse_env_url("GHL_API_BASE_URL", DEFAULT_CRM_API_URL)?,
            }),
            None => None,
        };

        Ok(Config {
            port: Self::parse_env_u16("PORT", 3000)?,
            request_timeout: Self::parse_env_u64("REQUEST_TIMEOUT", 10)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            frontend_dir: Self::optional_var("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend/dist")),
            campaign,
            sheets: Self::load_sheets()?,
            vapi,
            agent: Self::load_agent_profile(),
            webhook_url,
            crm,
            caller_ids: Self::load_caller_ids(),
        })
    }

    /// Sheet settings, or `None` (with a warning) when any piece is missing.
    fn load_sheets() -> ConfigResult<Option<SheetsConfig>> {
        let vars = [
            "GOOGLE_SHEET_ID",
            "GOOGLE_SHEET_NAME",
            "GOOGLE_SHEET_RANGE",
            "GOOGLE_APPLICATION_CREDENTIALS",
        ];
        let values: Vec<Option<String>> = vars.iter().map(|v| Self::optional_var(v)).collect();

        let missing: Vec<&str> = vars
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(var, _)| *var)
            .collect();
        if !missing.is_empty() {
            tracing::warn!(
                "Missing Google Sheets configuration ({}); campaigns will find no contacts",
                missing.join(", ")
            );
            return Ok(None);
        }

        let mut values = values.into_iter().flatten();
        let mut next = || values.next().unwrap_or_default();
        Ok(Some(SheetsConfig {
            spreadsheet_id: next(),
            sheet_name: next(),
            range: next(),
            credentials_path: PathBuf::from(next()),
            api_base_url: Self::parse_env_url("GOOGLE_SHEETS_API_BASE_URL", DEFAULT_SHEETS_API_URL)?,
        }))
    }

    fn load_agent_profile() -> AgentProfile {
        let mut profile = AgentProfile::default();
        let overrides: [(&str, &mut String); 10] = [
            ("AGENT_COMPANY_NAME", &mut profile.company_name),
            ("AGENT_PRODUCT_NAME", &mut profile.product_name),
            ("AGENT_OFFER", &mut profile.offer),
            ("AGENT_CALL_GOAL", &mut profile.call_goal),
            ("AGENT_NAME", &mut profile.agent_name),
            ("AGENT_ASSISTANT_NAME", &mut profile.assistant_name),
            ("AGENT_MODEL_PROVIDER", &mut profile.model_provider),
            ("AGENT_MODEL", &mut profile.model),
            ("AGENT_VOICE_PROVIDER", &mut profile.voice_provider),
            ("AGENT_VOICE_ID", &mut profile.voice_id),
        ];
        for (var, field) in overrides {
            if let Some(value) = Self::optional_var(var) {
                *field = value;
            }
        }

        if let Some(benefits) = Self::optional_var("AGENT_KEY_BENEFITS") {
            profile.key_benefits = benefits
                .split(',')
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty())
                .collect();
        }

        profile
    }

    fn load_caller_ids() -> Vec<String> {
        (1..=CALLER_ID_SLOTS)
            .filter_map(|i| {
                let var = format!("TWILIO_PHONE_{}", i);
                let value = Self::optional_var(&var);
                if value.is_none() {
                    tracing::warn!("Optional environment variable not set: {}", var);
                }
                value
            })
            .collect()
    }

    /// Read a variable, treating blank values as absent.
    fn optional_var(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn validate_url(var_name: &str, url: String) -> ConfigResult<String> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(url)
    }

    /// Parse a URL variable with a default value.
    fn parse_env_url(var_name: &str, default: &str) -> ConfigResult<String> {
        match Self::optional_var(var_name) {
            Some(url) => Self::validate_url(var_name, url),
            None => Ok(default.to_string()),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            request_timeout: 10,
            log_level: "info".to_string(),
            frontend_dir: PathBuf::from("frontend/dist"),
            campaign: CampaignConfig::default(),
            sheets: None,
            vapi: VapiConfig {
                api_key: String::new(),
                phone_number_id: None,
                api_base_url: DEFAULT_VAPI_API_URL.to_string(),
            },
            agent: AgentProfile::default(),
            webhook_url: None,
            crm: None,
            caller_ids: Vec::new(),
        }
    }
}
