//! Error types for user resolution.

use entitle_auth::IdentityError;
use entitle_directory::DirectoryError;
use thiserror::Error;

/// Result type alias for resolution
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving a caller to a directory user.
///
/// Every variant is answered with the same 403 so that status codes never
/// reveal directory membership.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The identity header could not be decoded or validated.
    #[error("couldn't find user: {0}")]
    Authentication(#[from] IdentityError),

    /// The directory could not be listed.
    #[error("couldn't find user: {0}")]
    Directory(#[from] DirectoryError),

    /// No usable directory entry carries the username.
    ///
    /// Also returned when the entry exists but was dropped for missing attributes.
    #[error("couldn't find user: user '{username}' is not known")]
    UserNotFound {
        /// Username taken from the identity header
        username: String,
    },
}

impl ResolveError {
    /// Whether the failure is the caller's, as opposed to an upstream outage.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ResolveError::Directory(_))
    }
}
