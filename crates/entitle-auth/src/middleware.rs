//! Tower identity middleware.
//!
//! `IdentityLayer` and `IdentityService` wrap any inner service with user
//! resolution. Generic over `UserResolver`.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::{Request, StatusCode};
use tower::{Layer, Service};

use crate::{IDENTITY_HEADER, UserResolver};

/// Tower `Layer` that resolves the caller before forwarding requests.
pub struct IdentityLayer<R: UserResolver> {
    resolver: Arc<R>,
}

impl<R: UserResolver> IdentityLayer<R> {
    /// Create a new identity layer around the given resolver.
    pub fn new(resolver: Arc<R>) -> Self {
        Self { resolver }
    }
}

impl<R: UserResolver> Clone for IdentityLayer<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
        }
    }
}

impl<R: UserResolver, S> Layer<S> for IdentityLayer<R> {
    type Service = IdentityService<R, S>;

    fn layer(&self, inner: S) -> Self::Service {
        IdentityService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Tower `Service` that resolves the caller before forwarding requests.
///
/// On success, inserts the resolved `NormalizedUser` into request
/// extensions. On any failure, answers 403 without calling the inner service.
pub struct IdentityService<R: UserResolver, S> {
    inner: S,
    resolver: Arc<R>,
}

impl<R: UserResolver, S: Clone> Clone for IdentityService<R, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            resolver: self.resolver.clone(),
        }
    }
}

impl<R, S> Service<Request<Body>> for IdentityService<R, S>
where
    R: UserResolver,
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let resolver = self.resolver.clone();
        let header_value = identity_header(&req);

        Box::pin(async move {
            match resolver.resolve(&header_value).await {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    let resp = inner
                        .call(req)
                        .await
                        .unwrap_or_else(|infallible| match infallible {});
                    Ok(resp.into_response())
                }
                Err(err) => {
                    if resolver.is_upstream_failure(&err) {
                        log::error!("User resolution failed upstream: {err}");
                    } else {
                        log::warn!("User resolution failed: {err}");
                    }
                    Ok(forbidden_response(&err.to_string()))
                }
            }
        })
    }
}

/// Read the identity header; absent yields an empty string.
fn identity_header(req: &Request<Body>) -> String {
    req.headers()
        .get(IDENTITY_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

/// Build a plain-text 403 Forbidden response.
fn forbidden_response(reason: &str) -> axum::response::Response {
    (
        StatusCode::FORBIDDEN,
        [
            (http::header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (http::header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("couldn't auth user: {reason}\n"),
    )
        .into_response()
}
