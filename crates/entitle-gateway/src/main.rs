//! Entitlements gateway server
//!
//! Resolves `x-rh-identity` callers against Keycloak and serves their
//! entitlements and compliance status.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use entitle_gateway::{GatewayConfig, Server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::parse();

    // Initialize tracing; `log` records from the library crates are bridged in
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(realm = %config.keycloak_realm, "starting entitle-gateway");

    Server::new(config).run().await?;

    Ok(())
}
