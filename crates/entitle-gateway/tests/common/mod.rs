//! Common test utilities for gateway integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use entitle_auth::{IDENTITY_HEADER, IdentityAssertion};
use entitle_directory::{
    DirectoryClient, DirectoryConfig, DirectoryError, DirectoryTransport, TransportFuture,
    TransportResponse,
};
use entitle_gateway::DirectoryResolver;
use entitle_gateway::routes;
use http::{Request, StatusCode};

/// A directory with one complete user (bob), one using list entitlements
/// (alice) and one missing `account_number` (dave).
pub const DIRECTORY: &str = r#"[
    {"username": "bob", "enabled": true, "firstName": "Bob", "lastName": "Builder",
     "email": "bob@example.com",
     "attributes": {"is_active": ["true"], "is_org_admin": ["false"], "is_internal": ["false"],
                    "account_id": ["42"], "org_id": ["7"], "entitlements": ["{\"svc\":1}"],
                    "account_number": ["AC1"]}},
    {"username": "alice", "enabled": true, "firstName": "Alice",
     "attributes": {"is_active": ["true"], "is_org_admin": ["true"], "is_internal": ["true"],
                    "account_id": ["5"], "org_id": ["7"], "entitlements": ["ignored"],
                    "newEntitlements": ["x", "y"], "account_number": ["AC5"]}},
    {"username": "dave", "enabled": true, "firstName": "Dave",
     "attributes": {"is_active": ["true"], "is_org_admin": ["false"], "is_internal": ["false"],
                    "account_id": ["8"], "org_id": ["7"], "entitlements": ["{}"]}}
]"#;

/// In-memory directory transport.
pub struct MemoryTransport {
    outcome: Result<&'static str, &'static str>,
    /// Number of directory listings requested so far.
    pub calls: Arc<AtomicUsize>,
}

impl DirectoryTransport for MemoryTransport {
    fn get<'a>(&'a self, _url: &'a str) -> TransportFuture<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcome;
        Box::pin(async move {
            match outcome {
                Ok(body) => Ok(TransportResponse {
                    status: StatusCode::OK,
                    body: body.as_bytes().to_vec(),
                }),
                Err(reason) => Err(DirectoryError::Transport(reason.to_string())),
            }
        })
    }
}

/// Test harness holding a router and the transport's call counter.
pub struct TestHarness {
    /// Router under test.
    pub app: Router,
    /// Directory listings requested through the router.
    pub calls: Arc<AtomicUsize>,
}

impl TestHarness {
    /// Serve [`DIRECTORY`].
    pub fn new() -> Self {
        Self::with_outcome(Ok(DIRECTORY))
    }

    /// Every directory listing fails with a transport error.
    pub fn unreachable() -> Self {
        Self::with_outcome(Err("connection refused"))
    }

    fn with_outcome(outcome: Result<&'static str, &'static str>) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let transport = MemoryTransport {
            outcome,
            calls: calls.clone(),
        };
        let config = DirectoryConfig {
            base_url: "http://keycloak.test".to_string(),
            ..Default::default()
        };
        let resolver = DirectoryResolver::new(
            DirectoryClient::new(&config, transport),
            Duration::from_secs(5),
        );
        Self {
            app: routes::router(Arc::new(resolver)),
            calls,
        }
    }

    /// Directory listings requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// GET `path` as `username`.
pub fn get_as(path: &str, username: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(
            IDENTITY_HEADER,
            IdentityAssertion::user(username).to_header_value(),
        )
        .body(Body::empty())
        .unwrap()
}

/// GET `path` without an identity header.
pub fn get_anonymous(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

/// Collect a response body as text.
pub async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
