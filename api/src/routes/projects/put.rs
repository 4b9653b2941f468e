use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::common::{GradeRequest, error_response, rejection_response};
use crate::state::AppState;

/// PUT /projects/{project_id}/grade
///
/// Grades a project. Only `grade` and `updatedAt` change.
///
/// ### Request Body
/// ```json
/// { "grade": 18 }
/// ```
///
/// ### Responses
/// - `200 OK` — the updated project
/// - `404 Not Found` — unknown `project_id`
/// - `422 Unprocessable Entity` — grade missing, not a number, or outside `[0, 20]`
pub async fn grade_project(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match app_state.projects().grade(&project_id, req.into()).await {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(e) => error_response(e),
    }
}
