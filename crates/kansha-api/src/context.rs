/// API Context - shared state for all API handlers
use std::sync::Arc;

use kansha_core::KanshaError;
use kansha_core::models::GoogleConfig;
use kansha_core::services::{SheetsClient, TokenExchanger};

/// API Context contains the configuration and Google API clients shared by
/// all handlers. One reqwest client backs both downstream calls.
#[derive(Clone)]
pub struct ApiContext {
    /// Spreadsheet configuration and credentials
    pub config: GoogleConfig,

    /// OAuth2 token exchanger
    pub token_exchanger: TokenExchanger,

    /// Sheets append client
    pub sheets_client: SheetsClient,
}

impl ApiContext {
    /// Create a new API context from environment variables
    pub fn new() -> Result<Arc<Self>, KanshaError> {
        let config = GoogleConfig::from_env()?;
        Self::from_config(config)
    }

    /// Create a context from an explicit configuration (used by tests to
    /// point the clients at mock endpoints)
    pub fn from_config(config: GoogleConfig) -> Result<Arc<Self>, KanshaError> {
        let http_client = reqwest::Client::new();

        let token_exchanger =
            TokenExchanger::new(http_client.clone(), config.credentials.clone());
        let sheets_client = SheetsClient::new(http_client, &config.sheets_base_url)?;

        Ok(Arc::new(Self {
            config,
            token_exchanger,
            sheets_client,
        }))
    }
}
