//! Application state shared across handlers.

use crate::client::{
    AsyncCrmSink, AsyncSheetsClient, AsyncSheetsClientImpl, AsyncVapiClient, AsyncVapiClientImpl,
    AsyncWebhookSink, CrmClient, ForwardingSink, SheetsClient, VapiClient, VendorHttp,
    WebhookClient,
};
use crate::config::Config;
use crate::domain::{NumberPool, PhoneNormalizer};
use crate::error::ConfigError;
use crate::metrics::Metrics;
use crate::repositories::{CallPlacement, ContactSource, SheetContactSource, VapiCallPlacement};
use crate::services::CampaignRunner;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Campaign runner started by the trigger endpoint.
    pub runner: Arc<CampaignRunner>,

    /// Counters reported by `/api/metrics`.
    pub metrics: Metrics,

    /// Caller IDs available for rotation.
    pub caller_ids: Arc<NumberPool>,

    /// Automation webhook receiver.
    pub webhook: Option<Arc<dyn ForwardingSink>>,

    /// CRM contact sink.
    pub crm: Option<Arc<dyn ForwardingSink>>,

    /// Built frontend served for every non-API path.
    pub frontend_dir: PathBuf,
}

impl AppState {
    pub fn new(runner: CampaignRunner, metrics: Metrics, frontend_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner: Arc::new(runner),
            metrics,
            caller_ids: Arc::new(NumberPool::default()),
            webhook: None,
            crm: None,
            frontend_dir: frontend_dir.into(),
        }
    }

    pub fn with_caller_ids(mut self, pool: NumberPool) -> Self {
        self.caller_ids = Arc::new(pool);
        self
    }

    pub fn with_sinks(
        mut self,
        webhook: Arc<dyn ForwardingSink>,
        crm: Arc<dyn ForwardingSink>,
    ) -> Self {
        self.webhook = Some(webhook);
        self.crm = Some(crm);
        self
    }

    /// Wire every collaborator from configuration.
    ///
    /// A spreadsheet that cannot be authenticated degrades to an empty
    /// contact source instead of failing startup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unusable default country code.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let metrics = Metrics::new();
        let http = VendorHttp::new(Duration::from_secs(config.request_timeout), metrics.clone());

        let normalizer = PhoneNormalizer::new(config.campaign.default_country_code.clone())
            .map_err(|e| ConfigError::InvalidValue {
                var: "DEFAULT_COUNTRY_CODE".to_string(),
                reason: e.to_string(),
            })?;

        let source: Arc<dyn ContactSource> = match &config.sheets {
            Some(sheets) => match SheetsClient::new(sheets, http.clone()) {
                Ok(client) => {
                    let client =
                        Arc::new(AsyncSheetsClientImpl::new(client)) as Arc<dyn AsyncSheetsClient>;
                    Arc::new(SheetContactSource::new(client, sheets.full_range()))
                }
                Err(e) => {
                    warn!("Spreadsheet client unavailable: {}", e);
                    Arc::new(SheetContactSource::unconfigured())
                }
            },
            None => Arc::new(SheetContactSource::unconfigured()),
        };

        let vapi = VapiClient::new(&config.vapi, config.agent.clone(), http.clone());
        let vapi = Arc::new(AsyncVapiClientImpl::new(vapi)) as Arc<dyn AsyncVapiClient>;
        let placement = Arc::new(VapiCallPlacement::new(vapi)) as Arc<dyn CallPlacement>;

        let runner = CampaignRunner::new(
            source,
            placement,
            normalizer,
            Duration::from_millis(config.campaign.pacing_ms),
        )
        .with_metrics(metrics.clone());

        let webhook =
            AsyncWebhookSink::new(WebhookClient::new(config.webhook_url.clone(), http.clone()));
        let crm = AsyncCrmSink::new(CrmClient::new(config.crm.clone(), http));

        let caller_ids = NumberPool::new(config.caller_ids.clone());
        info!("Loaded {} caller IDs", caller_ids.len());

        Ok(Self::new(runner, metrics, config.frontend_dir.clone())
            .with_caller_ids(caller_ids)
            .with_sinks(Arc::new(webhook), Arc::new(crm)))
    }
}
