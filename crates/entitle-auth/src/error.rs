//! Identity-header error types.

/// Errors that can occur while decoding an `x-rh-identity` header.
///
/// All variants are caller errors and never worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The header is absent or empty.
    #[error("no x-rh-identity header")]
    MissingHeader,

    /// The header is not valid base64.
    #[error("x-rh-identity is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded payload lacks `identity.type` or `identity.user.username`.
    #[error("x-rh-identity is malformed: {0}")]
    MalformedAssertion(#[from] serde_json::Error),

    /// The assertion is not for a user, or names no user.
    #[error("x-rh-identity does not contain a usable username (type '{subject_type}', username '{username}')")]
    InvalidSubject {
        /// `identity.type` as asserted.
        subject_type: String,
        /// `identity.user.username` as asserted.
        username: String,
    },
}
