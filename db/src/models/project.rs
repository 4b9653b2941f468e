use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

/// A single project submission and its grading state.
///
/// Serialized with camelCase keys, both on the wire and in the backing file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub student_name: String,
    pub course: String,
    #[serde(alias = "githubUrl")]
    pub repository_url: String,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Builds a fresh, ungraded submission with a random v4 id and both
    /// timestamps set to now.
    pub fn new(
        student_name: impl Into<String>,
        course: impl Into<String>,
        repository_url: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            student_name: student_name.into(),
            course: course.into(),
            repository_url: repository_url.into(),
            grade: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the grade and refreshes `updated_at`.
    ///
    /// `updated_at` always moves forward, even when the clock has not.
    pub fn set_grade(&mut self, grade: f64) {
        self.grade = Some(grade);
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// Case-insensitive comparison against the project's course.
    pub fn in_course(&self, course: &str) -> bool {
        self.course.to_lowercase() == course.to_lowercase()
    }
}

/// The persisted document: `{ "projects": [ ... ] }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectCollection {
    pub projects: Vec<Project>,
}

impl ProjectCollection {
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Removes the project with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(index))
    }

    pub fn by_course(&self, course: &str) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| p.in_course(course))
            .cloned()
            .collect()
    }
}
