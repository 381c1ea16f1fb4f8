//! HTTP routes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Json, Router};
use entitle_auth::{IdentityLayer, UserResolver};
use entitle_core::NormalizedUser;

/// Liveness probe; no identity required.
pub const STATUS_PATH: &str = "/";
/// Returns the caller's entitlements payload verbatim.
pub const SERVICES_PATH: &str = "/api/entitlements/v1/services";
/// Returns the caller's compliance status.
pub const COMPLIANCE_PATH: &str = "/api/entitlements/v1/compliance";

/// Build the gateway router around a caller resolver.
///
/// Unmatched paths answer 200 with an empty body.
pub fn router<R: UserResolver>(resolver: Arc<R>) -> Router {
    let protected = Router::new()
        .route(SERVICES_PATH, get(services))
        .route(COMPLIANCE_PATH, get(compliance))
        .layer(IdentityLayer::new(resolver));

    Router::new()
        .route(STATUS_PATH, get(status))
        .merge(protected)
        .fallback(status)
        .layer(middleware::from_fn(log_request))
}

async fn status() {}

async fn services(Extension(user): Extension<NormalizedUser>) -> String {
    user.entitlements
}

async fn compliance(Extension(_user): Extension<NormalizedUser>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "result": "OK",
        "description": "",
    }))
}

async fn log_request(req: Request, next: Next) -> Response {
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    log::info!("{remote} {} {}", req.method(), req.uri());
    next.run(req).await
}
