//! Keycloak user directory access.
//!
//! Provides:
//! - [`DirectoryClient`] — Lists every user of a realm in one capped request
//! - [`DirectoryTransport`] — Trait for authenticated GETs (implement per transport)
//! - [`BearerTransport`] — `reqwest` transport with a cached password-grant token
//! - [`DirectoryConfig`] — Connection settings
//! - [`DirectoryError`] — Directory-side error types

mod client;
mod config;
mod error;
mod token;
mod transport;

pub use client::DirectoryClient;
pub use config::{DIRECTORY_PAGE_LIMIT, DirectoryConfig};
pub use error::DirectoryError;
pub use token::TokenCache;
pub use transport::{BearerTransport, DirectoryTransport, TransportFuture, TransportResponse};
