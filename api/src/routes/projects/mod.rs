//! # Project Routes Module
//!
//! Routes for the `/projects` endpoint group.
//!
//! ## Structure
//! - `get.rs` — list, fetch by id, filter by course
//! - `post.rs` — submit a project
//! - `put.rs` — grade a project
//! - `delete.rs` — remove a submission
//! - `common.rs` — request models and error mapping

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_project;
use get::{get_project, get_projects_by_course, list_projects};
use post::create_project;
use put::grade_project;

/// Builds the `/projects` route group.
///
/// - `GET /projects` → `list_projects`
/// - `POST /projects` → `create_project`
/// - `GET /projects/course/{course_name}` → `get_projects_by_course`
/// - `GET /projects/{project_id}` → `get_project`
/// - `DELETE /projects/{project_id}` → `delete_project`
/// - `PUT /projects/{project_id}/grade` → `grade_project`
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/course/{course_name}", get(get_projects_by_course))
        .route("/{project_id}", get(get_project).delete(delete_project))
        .route("/{project_id}/grade", put(grade_project))
}
