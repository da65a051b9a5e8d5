//! Authentication enforcement on `/api/v1` routes.
//!
//! Every request here is rejected before storage is touched, so the app
//! runs on a lazily-connected pool.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{expect_status, get, get_auth, token_for};
use tower::ServiceExt;
use vigil_api::auth::jwt::{generate_access_token, JwtConfig};

#[tokio::test]
async fn missing_token_is_401() {
    let app = common::build_test_app(common::lazy_pool());
    let json = expect_status(get(app, "/api/v1/dashboards").await, StatusCode::UNAUTHORIZED).await;

    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[tokio::test]
async fn token_signed_with_other_secret_is_401() {
    let foreign = JwtConfig {
        secret: "some-other-deployment-secret".to_string(),
        access_token_expiry_mins: 15,
    };
    let token = generate_access_token(1, "super_admin", &foreign).unwrap();

    let app = common::build_test_app(common::lazy_pool());
    let json = expect_status(
        get_auth(app, "/api/v1/popups/action-condition?type=0&source=0", &token).await,
        StatusCode::UNAUTHORIZED,
    )
    .await;
    assert_eq!(json["error"], "Invalid or expired token");
}

#[tokio::test]
async fn unknown_role_is_401() {
    let token = token_for(1, "operator");
    let app = common::build_test_app(common::lazy_pool());
    let json = expect_status(
        get_auth(app, "/api/v1/dashboards", &token).await,
        StatusCode::UNAUTHORIZED,
    )
    .await;
    assert_eq!(json["error"], "Unknown role 'operator'");
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let app = common::build_test_app(common::lazy_pool());
    let request = Request::builder()
        .uri("/api/v1/dashboards")
        .header("authorization", "Basic YWRtaW46YWRtaW4=")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
