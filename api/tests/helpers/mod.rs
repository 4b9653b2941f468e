pub mod app;

pub use app::{TestApp, get_json_body, make_test_app, send};
