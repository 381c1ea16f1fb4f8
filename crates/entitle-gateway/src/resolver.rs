//! Caller resolution: identity header to directory user.

use std::time::Duration;

use entitle_auth::{ResolveFuture, UserResolver};
use entitle_core::{NormalizedUser, normalize};
use entitle_directory::{DirectoryClient, DirectoryError, DirectoryTransport};

use crate::error::{ResolveError, Result};

/// Resolves callers against a freshly fetched directory on every request.
///
/// Holds no mutable state; concurrent resolutions are fully independent and
/// share only the transport.
pub struct DirectoryResolver<T: DirectoryTransport> {
    client: DirectoryClient<T>,
    deadline: Duration,
}

impl<T: DirectoryTransport> DirectoryResolver<T> {
    /// Create a resolver whose directory fetches are bounded by `deadline`.
    pub fn new(client: DirectoryClient<T>, deadline: Duration) -> Self {
        Self { client, deadline }
    }

    /// Decode the header, fetch and normalize the directory, and pick the caller.
    ///
    /// The header is rejected before any directory traffic. Dropping the
    /// returned future cancels an in-flight fetch.
    pub async fn resolve(&self, header_value: &str) -> Result<NormalizedUser> {
        let assertion = entitle_auth::decode(header_value)?;

        let entries = tokio::time::timeout(self.deadline, self.client.fetch_all())
            .await
            .map_err(|_| DirectoryError::Timeout(self.deadline))??;

        normalize(&entries)
            .into_iter()
            .find(|user| user.username == assertion.username)
            .ok_or(ResolveError::UserNotFound {
                username: assertion.username,
            })
    }
}

impl<T: DirectoryTransport> UserResolver for DirectoryResolver<T> {
    type Error = ResolveError;

    fn resolve(&self, header_value: &str) -> ResolveFuture<'_, Self::Error> {
        let header_value = header_value.to_string();
        Box::pin(async move { DirectoryResolver::resolve(self, &header_value).await })
    }

    fn is_upstream_failure(&self, error: &Self::Error) -> bool {
        !error.is_client_error()
    }
}
