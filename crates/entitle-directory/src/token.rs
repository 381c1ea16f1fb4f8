//! Admin bearer tokens via the OAuth2 password grant, with expiry-based caching.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{DirectoryConfig, DirectoryError};

/// Tokens are refreshed this long before the provider says they expire.
const EXPIRY_SKEW: Duration = Duration::from_secs(30);

/// Lifetime assumed when the token response carries no `expires_in`.
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60);

/// The token endpoint's response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

/// Cached token with its refresh deadline.
struct CachedToken {
    access_token: String,
    refresh_at: Instant,
}

/// Password-grant token source shared by concurrent directory requests.
///
/// At most one token request is in flight at a time; callers arriving while
/// it runs wait for it and reuse its token.
pub struct TokenCache {
    cached: RwLock<Option<CachedToken>>,
    refresh_lock: Mutex<()>,
    token_url: String,
    client_id: String,
    username: String,
    password: String,
    http_client: reqwest::Client,
}

impl TokenCache {
    /// Create a cache that requests tokens for the configured admin account.
    pub fn new(config: &DirectoryConfig, http_client: reqwest::Client) -> Self {
        Self {
            cached: RwLock::new(None),
            refresh_lock: Mutex::new(()),
            token_url: config.token_url(),
            client_id: config.client_id.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            http_client,
        }
    }

    /// Return a valid access token, requesting a new one when needed.
    pub async fn access_token(&self) -> Result<String, DirectoryError> {
        if let Some(token) = self.lookup_cached() {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;
        if let Some(token) = self.lookup_cached() {
            return Ok(token);
        }
        self.refresh().await
    }

    /// Drop the cached token so the next call requests a fresh one.
    pub fn invalidate(&self) {
        if let Ok(mut cache) = self.cached.write() {
            *cache = None;
        }
    }

    fn lookup_cached(&self) -> Option<String> {
        let cache = self.cached.read().ok()?;
        let cached = cache.as_ref()?;

        if Instant::now() >= cached.refresh_at {
            return None;
        }

        Some(cached.access_token.clone())
    }

    async fn refresh(&self) -> Result<String, DirectoryError> {
        log::debug!("Requesting directory access token from {}", self.token_url);

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "password"),
                ("client_id", self.client_id.as_str()),
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DirectoryError::Token(format!(
                "token endpoint answered HTTP {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::Token(format!("token response parse failed: {e}")))?;

        let ttl = token
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_TTL);

        if let Ok(mut cache) = self.cached.write() {
            *cache = Some(CachedToken {
                access_token: token.access_token.clone(),
                refresh_at: Instant::now() + ttl.saturating_sub(EXPIRY_SKEW),
            });
        }

        Ok(token.access_token)
    }
}
