//! Spreadsheet values API client.

use super::{build_url, ServiceAccountKey, ServiceAccountTokenProvider, TokenProvider, VendorHttp};
use crate::config::SheetsConfig;
use crate::error::VendorResult;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// OAuth scope for reading and appending sheet values.
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Absent when the range holds no data
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    #[serde(default)]
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_rows: u64,
}

/// Client for one spreadsheet.
#[derive(Clone)]
pub struct SheetsClient {
    base_url: String,
    spreadsheet_id: String,
    http: VendorHttp,
    tokens: Arc<dyn TokenProvider>,
}

impl SheetsClient {
    /// Create a client authenticated with the configured service-account key.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Auth` if the key file cannot be read or parsed.
    pub fn new(config: &SheetsConfig, http: VendorHttp) -> VendorResult<Self> {
        let key = ServiceAccountKey::from_file(&config.credentials_path)?;
        let tokens = ServiceAccountTokenProvider::new(key, SHEETS_SCOPE, http.clone())?;

        Ok(Self::with_token_provider(
            config.api_base_url.clone(),
            config.spreadsheet_id.clone(),
            http,
            Arc::new(tokens),
        ))
    }

    /// Create a client with an explicit token source (useful for testing).
    pub fn with_token_provider(
        base_url: String,
        spreadsheet_id: String,
        http: VendorHttp,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            base_url,
            spreadsheet_id,
            http,
            tokens,
        }
    }

    fn values_url(&self, range: &str) -> String {
        build_url(
            &self.base_url,
            &format!(
                "spreadsheets/{}/values/{}",
                urlencoding::encode(&self.spreadsheet_id),
                urlencoding::encode(range)
            ),
        )
    }

    /// Read a range as rows of display strings.
    ///
    /// Non-string cells are rendered with their JSON text; empty ranges yield no rows.
    pub fn get_values(&self, range: &str) -> VendorResult<Vec<Vec<String>>> {
        let token = self.tokens.access_token()?;
        let response = self.http.get(&self.values_url(range), Some(&token))?;

        let value_range: ValueRange = serde_json::from_str(&response.body)?;
        Ok(value_range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    /// Append rows after the last row of the table in `range`.
    ///
    /// Returns the number of rows the API reports as written.
    pub fn append_rows(&self, range: &str, rows: &[Vec<String>]) -> VendorResult<u64> {
        let token = self.tokens.access_token()?;
        let url = format!(
            "{}:append?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS",
            self.values_url(range)
        );

        let response = self
            .http
            .post_json(&url, Some(&token), &json!({ "values": rows }))?;

        let append: AppendResponse = serde_json::from_str(&response.body)?;
        let updated = append.updates.map(|u| u.updated_rows).unwrap_or(0);
        tracing::info!("Appended {} rows to {}", updated, range);
        Ok(updated)
    }
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
