use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::common::error_response;
use crate::state::AppState;

/// GET /projects
///
/// Lists every submitted project in submission order. An empty store yields
/// an empty array.
///
/// ### Response
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": "0b6f3f0e-5b7e-4a53-9d6b-2d7c1f1e8a10",
///     "studentName": "Alice",
///     "course": "CS50",
///     "repositoryUrl": "https://github.com/alice/cs50",
///     "grade": null,
///     "createdAt": "2025-05-23T18:00:00.123456Z",
///     "updatedAt": "2025-05-23T18:00:00.123456Z"
///   }
/// ]
/// ```
/// - `500 Internal Server Error` — the data file could not be read
pub async fn list_projects(State(app_state): State<AppState>) -> Response {
    match app_state.projects().list().await {
        Ok(projects) => (StatusCode::OK, Json(projects)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /projects/{project_id}
///
/// ### Responses
/// - `200 OK` — the project
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Project with id 1234 not found"
/// }
/// ```
pub async fn get_project(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
) -> Response {
    match app_state.projects().find_by_id(&project_id).await {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /projects/course/{course_name}
///
/// Projects whose course equals `course_name`, ignoring case.
///
/// ### Responses
/// - `200 OK` — non-empty array of projects
/// - `404 Not Found` — no project is registered for that course
pub async fn get_projects_by_course(
    State(app_state): State<AppState>,
    Path(course_name): Path<String>,
) -> Response {
    match app_state.projects().find_by_course(&course_name).await {
        Ok(projects) => (StatusCode::OK, Json(projects)).into_response(),
        Err(e) => error_response(e),
    }
}
