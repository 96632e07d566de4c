//! Google service account authentication
//!
//! Implements the OAuth2 JWT bearer flow used by service accounts: a JWT
//! signed with the account's private key is exchanged at the token endpoint
//! for a short-lived access token, which is cached until shortly before it
//! expires.

use std::path::Path;
use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};
use crate::utils::errors::{SheetsError, Result};

/// OAuth scope for reading and writing spreadsheets
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;
const REFRESH_MARGIN_SECS: i64 = 60;

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// Fields of a service account key file used for authentication
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Read a key file downloaded from the Google Cloud console
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            SheetsError::InvalidCredentials(format!("cannot read {}: {}", path.display(), e))
        })?;

        let key: ServiceAccountKey = serde_json::from_str(&content)
            .map_err(|e| SheetsError::InvalidCredentials(format!("malformed key file: {}", e)))?;
        Ok(key)
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    TOKEN_LIFETIME_SECS
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Access token provider for a single service account
#[derive(Clone)]
pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    client: Client,
    cached: Arc<Mutex<Option<CachedToken>>>,
}

impl std::fmt::Debug for ServiceAccountAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountAuth")
            .field("client_email", &self.key.client_email)
            .field("token_uri", &self.key.token_uri)
            .finish()
    }
}

impl ServiceAccountAuth {
    /// Create a provider, validating the private key up front
    pub fn new(key: ServiceAccountKey, client: Client) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| SheetsError::InvalidCredentials(format!("invalid private key: {}", e)))?;

        Ok(Self {
            key,
            encoding_key,
            client,
            cached: Arc::new(Mutex::new(None)),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// Return a valid access token, requesting a new one when needed
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > Utc::now() {
                return Ok(token.access_token.clone());
            }
            debug!(client_email = %self.key.client_email, "Cached access token expired");
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    fn signed_assertion(&self, now: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            iss: &self.key.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.key.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + TOKEN_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    async fn request_token(&self) -> Result<CachedToken> {
        let now = Utc::now();
        let assertion = self.signed_assertion(now)?;

        debug!(token_uri = %self.key.token_uri, "Requesting Google access token");

        let response = self.client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SheetsError::AuthenticationFailed {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let token: TokenResponse = response.json().await?;
        info!(client_email = %self.key.client_email, expires_in = token.expires_in, "Obtained Google access token");

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}
