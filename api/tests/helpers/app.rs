use api::{routes::routes, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router backed by its own data file; the file lives as long as the struct.
pub struct TestApp {
    pub router: Router,
    pub data_file: PathBuf,
    _tmp: TempDir,
}

pub fn make_test_app() -> TestApp {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let data_file = tmp.path().join("db.json");
    let router = routes(AppState::with_data_file(&data_file));

    TestApp {
        router,
        data_file,
        _tmp: tmp,
    }
}

/// Sends one request; `body` is sent as JSON when present.
pub async fn send(app: &TestApp, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.router.clone().oneshot(req).await.unwrap()
}

pub async fn get_json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
