//! Authenticated HTTP transport toward the identity provider.

use std::future::Future;
use std::pin::Pin;

use http::StatusCode;

use crate::{DirectoryConfig, DirectoryError, TokenCache};

/// Status and body of a transport-level GET.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status returned by the provider.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Boxed future returned by [`DirectoryTransport::get`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, DirectoryError>> + Send + 'a>>;

/// A client that performs authenticated GETs against the identity provider.
///
/// Implementations must be safe to share between concurrent requests
/// without external locking.
pub trait DirectoryTransport: Send + Sync + 'static {
    /// Issue one GET to `url`. No retries.
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a>;
}

/// `reqwest` transport that attaches a password-grant bearer token.
pub struct BearerTransport {
    http_client: reqwest::Client,
    tokens: TokenCache,
}

impl BearerTransport {
    /// Create a transport for the configured admin account.
    pub fn new(config: &DirectoryConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a transport sharing an existing `reqwest` client.
    pub fn with_client(config: &DirectoryConfig, http_client: reqwest::Client) -> Self {
        Self {
            tokens: TokenCache::new(config, http_client.clone()),
            http_client,
        }
    }

    async fn send(&self, url: &str) -> Result<TransportResponse, DirectoryError> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Directory rejected the cached access token; it will be renewed");
            self.tokens.invalidate();
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DirectoryError::Transport(format!("reading response body: {e}")))?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl DirectoryTransport for BearerTransport {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        Box::pin(self.send(url))
    }
}
