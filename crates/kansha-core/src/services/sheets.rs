/// Google Sheets values.append client
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::error::KanshaError;
use crate::services::auth::AccessToken;

/// Request body for the values.append endpoint
#[derive(Debug, Serialize)]
struct AppendRequest {
    values: Vec<Vec<String>>,
}

/// Update metadata returned by a successful append
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendResult {
    pub spreadsheet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_range: Option<String>,
    pub updates: UpdateSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub spreadsheet_id: String,
    pub updated_range: String,
    pub updated_rows: u32,
    pub updated_columns: u32,
    pub updated_cells: u32,
}

/// Appends rows to a spreadsheet using a bearer token
#[derive(Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SheetsClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, KanshaError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| KanshaError::Config(format!("Invalid Sheets base URL: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Appends one row after the given A1-notation range with
    /// `valueInputOption=USER_ENTERED`, so dates and numbers are interpreted
    /// as if typed by a user. Failures are terminal; the call is never
    /// retried.
    pub async fn append_row(
        &self,
        token: &AccessToken,
        spreadsheet_id: &str,
        range: &str,
        row: Vec<String>,
    ) -> Result<AppendResult, KanshaError> {
        let url = self.append_url(spreadsheet_id, range)?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&token.value)
            .json(&AppendRequest { values: vec![row] })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(KanshaError::SheetsApi { status, body });
        }

        let result: AppendResult = response.json().await?;

        info!(
            spreadsheet_id = %result.spreadsheet_id,
            updated_range = %result.updates.updated_range,
            updated_cells = result.updates.updated_cells,
            "Appended row to sheet"
        );

        Ok(result)
    }

    /// Builds the values.append URL; the range segment is percent-encoded
    /// since sheet names may contain spaces or non-ASCII characters
    fn append_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, KanshaError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| KanshaError::Config("Sheets base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values"])
            .push(&format!("{}:append", range));
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");
        Ok(url)
    }
}
