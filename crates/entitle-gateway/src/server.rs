//! Gateway server wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use entitle_directory::{BearerTransport, DirectoryClient};

use crate::config::GatewayConfig;
use crate::resolver::DirectoryResolver;
use crate::routes;

/// Entitlements gateway server
pub struct Server {
    config: GatewayConfig,
}

impl Server {
    /// Create a server from startup configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Build the router backed by the configured Keycloak directory.
    pub fn router(&self) -> Router {
        let directory = self.config.directory_config();
        let transport = BearerTransport::new(&directory);
        let client = DirectoryClient::new(&directory, transport);
        let resolver = DirectoryResolver::new(client, self.config.directory_timeout());
        routes::router(Arc::new(resolver))
    }

    /// Listen until Ctrl-C.
    pub async fn run(self) -> std::io::Result<()> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(self.config.listen).await?;
        log::info!(
            "Listening on {} (directory {})",
            listener.local_addr()?,
            self.config.keycloak_server
        );

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Could not install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
