use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::common::{CreateProjectRequest, error_response, rejection_response};
use crate::state::AppState;

/// POST /projects
///
/// Submits a new project. The server assigns `id`, both timestamps, and a
/// `null` grade.
///
/// ### Request Body
/// ```json
/// {
///   "studentName": "Alice",
///   "course": "CS50",
///   "repositoryUrl": "https://github.com/alice/cs50"
/// }
/// ```
///
/// ### Validation Rules
/// * `studentName`, `course`, `repositoryUrl`: required, non-empty
///
/// ### Responses
/// - `201 Created` — the stored project
/// - `422 Unprocessable Entity`
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "studentName cannot be empty"
/// }
/// ```
/// - `500 Internal Server Error` — the data file could not be written
pub async fn create_project(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    match app_state.projects().create(req.into()).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(e) => error_response(e),
    }
}
