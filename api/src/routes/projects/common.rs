//! Project request models and error mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use services::ServiceError;
use services::project_service::{CreateProject, GradeProject};
use tracing::error;

use crate::response::ApiResponse;

/// Body of `POST /projects`. Missing fields deserialize as empty strings and
/// are rejected by validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default, alias = "githubUrl")]
    pub repository_url: String,
}

impl From<CreateProjectRequest> for CreateProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            student_name: req.student_name,
            course: req.course,
            repository_url: req.repository_url,
        }
    }
}

/// Body of `PUT /projects/{project_id}/grade`.
#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    #[serde(default)]
    pub grade: Option<f64>,
}

impl From<GradeRequest> for GradeProject {
    fn from(req: GradeRequest) -> Self {
        Self { grade: req.grade }
    }
}

/// Maps a service failure onto a status code and error envelope.
///
/// Storage failures are logged and reported without detail.
pub fn error_response(err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<()>::error(msg)),
        )
            .into_response(),
        ServiceError::NotFound(msg) => {
            (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(msg))).into_response()
        }
        ServiceError::Storage(e) => {
            error!(error = %e, "Storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Internal server error")),
            )
                .into_response()
        }
    }
}

/// Wraps an unreadable JSON body in the error envelope, keeping the
/// framework's status code (400, 415 or 422).
pub fn rejection_response(rejection: JsonRejection) -> Response {
    (
        rejection.status(),
        Json(ApiResponse::<()>::error(rejection.body_text())),
    )
        .into_response()
}
