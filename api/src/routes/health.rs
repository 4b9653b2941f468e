use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;
use util::config::AppConfig;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint for uptime checks and load balancer probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "status": "ok",
///   "message": "ProjetAPI is running"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        message: format!("{} is running", AppConfig::global().project_name),
    })
}

#[cfg(test)]
mod tests {
    use super::health_check;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;
    use serde_json::Value;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let response = health_check().await.into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
        assert!(json["message"].as_str().unwrap().ends_with("is running"));
    }
}
