//! Entitlements endpoint, liveness and routing behavior.

use crate::common::{TestHarness, body_text, get_anonymous, get_as};
use entitle_gateway::routes::{SERVICES_PATH, STATUS_PATH};
use http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_liveness_needs_no_identity() {
    let harness = TestHarness::new();
    let resp = harness
        .app
        .clone()
        .oneshot(get_anonymous(STATUS_PATH))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "");
    assert_eq!(harness.calls(), 0);
}

#[tokio::test]
async fn test_unknown_path_is_empty_ok() {
    let harness = TestHarness::new();
    let resp = harness
        .app
        .clone()
        .oneshot(get_anonymous("/api/something/else"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "");
}

#[tokio::test]
async fn test_services_returns_entitlements_verbatim() {
    let harness = TestHarness::new();
    let resp = harness
        .app
        .clone()
        .oneshot(get_as(SERVICES_PATH, "bob"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, r#"{"svc":1}"#);
}

#[tokio::test]
async fn test_services_synthesizes_list_entitlements() {
    let harness = TestHarness::new();
    let resp = harness
        .app
        .clone()
        .oneshot(get_as(SERVICES_PATH, "alice"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "{x,y}");
}

#[tokio::test]
async fn test_services_without_identity_is_forbidden() {
    let harness = TestHarness::new();
    let resp = harness
        .app
        .clone()
        .oneshot(get_anonymous(SERVICES_PATH))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_text(resp).await,
        "couldn't auth user: couldn't find user: no x-rh-identity header\n"
    );
    assert_eq!(harness.calls(), 0);
}

#[tokio::test]
async fn test_unknown_and_filtered_users_are_both_forbidden() {
    let harness = TestHarness::new();
    for username in ["nobody", "dave"] {
        let resp = harness
            .app
            .clone()
            .oneshot(get_as(SERVICES_PATH, username))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(body_text(resp).await.contains("is not known"));
    }
}

#[tokio::test]
async fn test_directory_outage_is_forbidden() {
    let harness = TestHarness::unreachable();
    let resp = harness
        .app
        .clone()
        .oneshot(get_as(SERVICES_PATH, "bob"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(body_text(resp).await.contains("connection refused"));
    assert_eq!(harness.calls(), 1);
}

#[tokio::test]
async fn test_each_request_fetches_directory() {
    let harness = TestHarness::new();
    for _ in 0..3 {
        harness
            .app
            .clone()
            .oneshot(get_as(SERVICES_PATH, "bob"))
            .await
            .unwrap();
    }
    assert_eq!(harness.calls(), 3);
}
