//! # entitle-gateway
//!
//! HTTP gateway answering entitlement and compliance queries.
//!
//! Each request:
//! - decodes the `x-rh-identity` header
//! - lists the Keycloak user directory
//! - normalizes every entry and picks the caller
//! - projects the caller's record into the response

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod resolver;
pub mod routes;
pub mod server;

pub use config::GatewayConfig;
pub use error::{ResolveError, Result};
pub use resolver::DirectoryResolver;
pub use server::Server;
