/// Error types for the Kansha service
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanshaError {
    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("Token endpoint error ({status}): {body}")]
    TokenEndpoint { status: u16, body: String },

    #[error("Sheets API error ({status}): {body}")]
    SheetsApi { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Implement conversions for common error types
impl From<serde_json::Error> for KanshaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::env::VarError> for KanshaError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}
