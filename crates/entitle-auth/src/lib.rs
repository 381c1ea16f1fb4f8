//! Identity primitives for the entitlements gateway.
//!
//! Provides:
//! - [`decode`] / [`IdentityAssertion`] — `x-rh-identity` header decoding
//! - [`UserResolver`] — Trait turning a header value into a directory user
//! - [`IdentityLayer`] / [`IdentityService`] — Tower middleware parameterised over `UserResolver`
//! - [`IdentityError`] — Header decoding errors

mod error;
mod identity;
mod middleware;

use std::future::Future;
use std::pin::Pin;

use entitle_core::NormalizedUser;

pub use error::IdentityError;
pub use identity::{IDENTITY_HEADER, IdentityAssertion, USER_SUBJECT_TYPE, decode};
pub use middleware::{IdentityLayer, IdentityService};

/// Boxed future returned by [`UserResolver::resolve`].
pub type ResolveFuture<'a, E> = Pin<Box<dyn Future<Output = Result<NormalizedUser, E>> + Send + 'a>>;

/// Trait for resolving an identity header into a full user record.
///
/// The middleware calls `resolve()` with the raw header value (empty when the
/// header is absent) and forwards the request only on success.
pub trait UserResolver: Send + Sync + 'static {
    /// Resolution failure; its `Display` text is sent back to the caller.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve a header value to a user.
    fn resolve(&self, header_value: &str) -> ResolveFuture<'_, Self::Error>;

    /// Whether a failure was caused by an upstream outage rather than the caller.
    ///
    /// Only affects log severity; the response is 403 either way.
    fn is_upstream_failure(&self, _error: &Self::Error) -> bool {
        false
    }
}
