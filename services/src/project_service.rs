//! Project submission operations.
//!
//! Each call loads the full collection from the store, works on it in memory,
//! and writes it back when it changed.

use crate::error::{ServiceError, ServiceResult};
use crate::validation::format_validation_errors;
use db::{Project, ProjectStore};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "studentName cannot be empty"))]
    pub student_name: String,

    #[validate(length(min = 1, message = "course cannot be empty"))]
    pub course: String,

    #[validate(length(min = 1, message = "repositoryUrl cannot be empty"))]
    pub repository_url: String,
}

#[derive(Debug, Clone, Validate)]
pub struct GradeProject {
    #[validate(
        required(message = "grade is required"),
        range(min = 0.0, max = 20.0, message = "grade must be between 0 and 20")
    )]
    pub grade: Option<f64>,
}

fn validate<T: Validate>(params: &T) -> ServiceResult<()> {
    params
        .validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))
}

fn project_not_found(id: &str) -> ServiceError {
    ServiceError::NotFound(format!("Project with id {id} not found"))
}

/// Handles project submissions over any [`ProjectStore`].
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Validates and appends a new, ungraded project.
    pub async fn create(&self, params: CreateProject) -> ServiceResult<Project> {
        validate(&params)?;

        let mut collection = self.store.load().await?;
        let project = Project::new(params.student_name, params.course, params.repository_url);
        collection.projects.push(project.clone());
        self.store.save(&collection).await?;

        info!(id = %project.id, course = %project.course, "Project created");
        Ok(project)
    }

    /// All projects, in submission order.
    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        Ok(self.store.load().await?.projects)
    }

    pub async fn find_by_id(&self, id: &str) -> ServiceResult<Project> {
        self.store
            .load()
            .await?
            .find(id)
            .cloned()
            .ok_or_else(|| project_not_found(id))
    }

    /// Sets the grade of project `id`. The grade is checked before the store
    /// is read.
    pub async fn grade(&self, id: &str, params: GradeProject) -> ServiceResult<Project> {
        validate(&params)?;
        let grade = params
            .grade
            .ok_or_else(|| ServiceError::Validation("grade is required".into()))?;

        let mut collection = self.store.load().await?;
        let project = collection
            .find_mut(id)
            .ok_or_else(|| project_not_found(id))?;
        project.set_grade(grade);
        let updated = project.clone();
        self.store.save(&collection).await?;

        info!(id = %updated.id, grade, "Project graded");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        let mut collection = self.store.load().await?;
        collection.remove(id).ok_or_else(|| project_not_found(id))?;
        self.store.save(&collection).await?;

        info!(id, "Project deleted");
        Ok(())
    }

    /// Projects whose course matches `course`, ignoring case.
    ///
    /// Unlike [`ProjectService::list`], an empty result is an error.
    pub async fn find_by_course(&self, course: &str) -> ServiceResult<Vec<Project>> {
        let matches = self.store.load().await?.by_course(course);
        if matches.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No projects found for course '{course}'"
            )));
        }
        Ok(matches)
    }
}
