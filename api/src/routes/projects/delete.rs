use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::common::error_response;
use crate::state::AppState;

/// DELETE /projects/{project_id}
///
/// ### Responses
/// - `204 No Content` — removed, empty body
/// - `404 Not Found` — unknown `project_id`; nothing is written
pub async fn delete_project(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
) -> Response {
    match app_state.projects().delete(&project_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
