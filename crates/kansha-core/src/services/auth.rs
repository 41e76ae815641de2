/// Service-account OAuth2 token exchange (JWT-bearer grant)
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{JWT_BEARER_GRANT_TYPE, SPREADSHEETS_SCOPE, TOKEN_TTL_SECONDS};
use crate::error::KanshaError;
use crate::models::config::ServiceAccountKey;

/// Claims of the signed assertion sent to the token endpoint
#[derive(Debug, Serialize)]
struct AssertionClaims {
    /// Issuer (service account email)
    iss: String,

    /// Subject; Google expects the service account email here as well
    sub: String,

    /// Requested API scope
    scope: String,

    /// Audience (token endpoint URL)
    aud: String,

    /// Issued at (Unix timestamp)
    iat: u64,

    /// Expiration (Unix timestamp, max one hour after iat)
    exp: u64,
}

/// Response from the token endpoint
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_ttl")]
    expires_in: u64,
}

fn default_ttl() -> u64 {
    TOKEN_TTL_SECONDS
}

/// A bearer token. Obtained fresh per request and used immediately;
/// never cached across requests.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub value: String,
    pub expires_in: u64,
}

/// Exchanges service-account credentials for a bearer access token
#[derive(Clone)]
pub struct TokenExchanger {
    client: reqwest::Client,
    key: ServiceAccountKey,
}

impl TokenExchanger {
    pub fn new(client: reqwest::Client, key: ServiceAccountKey) -> Self {
        Self { client, key }
    }

    /// Parses the configured private key without performing any network I/O
    pub fn verify_key(&self) -> Result<(), KanshaError> {
        self.encoding_key().map(|_| ())
    }

    /// Builds an RS256-signed assertion and exchanges it for an access token.
    /// Failures are terminal; the exchange is never retried.
    pub async fn exchange(&self) -> Result<AccessToken, KanshaError> {
        let signing_key = self.encoding_key()?;

        let now = Utc::now().timestamp() as u64;
        let claims = AssertionClaims {
            iss: self.key.client_email.clone(),
            sub: self.key.client_email.clone(),
            scope: SPREADSHEETS_SCOPE.to_string(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
            .map_err(|e| KanshaError::Credentials(format!("Failed to sign assertion: {}", e)))?;

        debug!(
            issuer = %self.key.client_email,
            "Exchanging signed assertion for access token"
        );

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", &assertion),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(KanshaError::TokenEndpoint { status, body });
        }

        let token: TokenResponse = response.json().await?;

        Ok(AccessToken {
            value: token.access_token,
            expires_in: token.expires_in,
        })
    }

    fn encoding_key(&self) -> Result<EncodingKey, KanshaError> {
        EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| KanshaError::Credentials(format!("Invalid private key: {}", e)))
    }
}
