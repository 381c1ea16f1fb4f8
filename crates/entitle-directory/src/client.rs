//! Directory listing client.

use entitle_core::RawDirectoryEntry;

use crate::{DIRECTORY_PAGE_LIMIT, DirectoryConfig, DirectoryError, DirectoryTransport};

/// Fetches the full user directory over an authenticated transport.
///
/// Every call is a fresh roundtrip; nothing is cached.
pub struct DirectoryClient<T: DirectoryTransport> {
    transport: T,
    users_url: String,
}

impl<T: DirectoryTransport> DirectoryClient<T> {
    /// Create a client for the configured realm.
    pub fn new(config: &DirectoryConfig, transport: T) -> Self {
        Self {
            transport,
            users_url: config.users_url(),
        }
    }

    /// List every user, up to [`DIRECTORY_PAGE_LIMIT`] entries.
    pub async fn fetch_all(&self) -> Result<Vec<RawDirectoryEntry>, DirectoryError> {
        let response = self.transport.get(&self.users_url).await?;

        if !response.status.is_success() {
            return Err(DirectoryError::Status(response.status));
        }

        let entries: Vec<RawDirectoryEntry> = serde_json::from_slice(&response.body)?;
        log::debug!("Fetched {} directory entries", entries.len());

        if entries.len() >= DIRECTORY_PAGE_LIMIT {
            log::warn!(
                "Directory listing reached the {DIRECTORY_PAGE_LIMIT} entry cap; users beyond it are not visible"
            );
        }

        Ok(entries)
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }
}
