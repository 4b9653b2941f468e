mod helpers;

use axum::http::StatusCode;
use helpers::{get_json_body, make_test_app, send};

#[tokio::test]
async fn health_check_returns_ok_json() {
    let app = make_test_app();

    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["message"].as_str().unwrap().ends_with("is running"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = make_test_app();

    let response = send(&app, "GET", "/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
