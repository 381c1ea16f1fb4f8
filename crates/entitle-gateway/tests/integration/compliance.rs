//! Compliance endpoint behavior.

use crate::common::{TestHarness, body_text, get_anonymous, get_as};
use entitle_gateway::routes::COMPLIANCE_PATH;
use http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_compliance_ok_is_json() {
    let harness = TestHarness::new();
    let resp = harness
        .app
        .clone()
        .oneshot(get_as(COMPLIANCE_PATH, "bob"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"result": "OK", "description": ""})
    );
}

#[tokio::test]
async fn test_compliance_rejects_bad_identity() {
    let harness = TestHarness::new();
    let mut req = get_anonymous(COMPLIANCE_PATH);
    req.headers_mut().insert(
        entitle_auth::IDENTITY_HEADER,
        http::HeaderValue::from_static("not-base64!"),
    );
    let resp = harness.app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(
        body_text(resp)
            .await
            .starts_with("couldn't auth user: couldn't find user: x-rh-identity is not valid base64")
    );
    assert_eq!(harness.calls(), 0);
}

#[tokio::test]
async fn test_compliance_for_filtered_user_is_forbidden() {
    let harness = TestHarness::new();
    let resp = harness
        .app
        .clone()
        .oneshot(get_as(COMPLIANCE_PATH, "dave"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
