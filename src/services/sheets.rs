//! Google Sheets response sink
//!
//! Appends completed survey responses to a spreadsheet through the Sheets
//! API `values:append` endpoint.

use std::path::Path;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};
use crate::config::GoogleConfig;
use crate::models::ResponseRow;
use crate::utils::errors::{SurveyBotError, SheetsError, Result};
use super::google_auth::{ServiceAccountAuth, ServiceAccountKey};
use super::ResponseSink;

/// Google Sheets service appending one row per completed survey
#[derive(Debug, Clone)]
pub struct GoogleSheetsService {
    client: Client,
    auth: ServiceAccountAuth,
    api_base_url: String,
    spreadsheet_id: String,
    range: String,
}

impl GoogleSheetsService {
    /// Create the service from configuration, reading the credentials file
    pub async fn new(config: &GoogleConfig) -> Result<Self> {
        let key = ServiceAccountKey::from_file(Path::new(&config.credentials_path)).await?;
        Self::with_key(config, key)
    }

    /// Create the service from an already loaded service account key
    pub fn with_key(config: &GoogleConfig, key: ServiceAccountKey) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("SurveyBot/1.0")
            .build()
            .map_err(SurveyBotError::Http)?;

        let auth = ServiceAccountAuth::new(key, client.clone())?;
        info!(
            client_email = %auth.client_email(),
            spreadsheet_id = %config.spreadsheet_id,
            "Google Sheets service initialized"
        );

        Ok(Self {
            client,
            auth,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            range: config.range.clone(),
        })
    }

    fn append_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.api_base_url,
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(&self.range)
        )
    }

    /// Append a single row of raw string values
    pub async fn append_values(&self, values: Vec<String>) -> Result<()> {
        let token = self.auth.access_token().await?;
        let url = self.append_url();

        debug!(url = %url, cells = values.len(), "Appending row to spreadsheet");

        let response = self.client
            .post(&url)
            .query(&[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")])
            .bearer_auth(token)
            .json(&json!({ "values": [values] }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Ok(())
    }
}

#[async_trait]
impl ResponseSink for GoogleSheetsService {
    async fn append_row(&self, row: &ResponseRow) -> Result<()> {
        self.append_values(row.to_values()).await?;
        info!(respondent_id = row.respondent_id, answers = row.answers.len(), "Response row appended");
        Ok(())
    }
}
