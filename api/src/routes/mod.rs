//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/projects` → Project submission CRUD, grading and course filtering

use crate::routes::{health::health_routes, projects::project_routes};
use crate::state::AppState;
use axum::Router;

pub mod health;
pub mod projects;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has its state applied; callers only add layers.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/projects", project_routes())
        .with_state(app_state)
}
