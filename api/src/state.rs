//! Application state container shared across Axum route handlers.

use db::JsonFileStore;
use services::project_service::ProjectService;
use std::path::PathBuf;
use std::sync::Arc;

/// Central application state shared across the server.
///
/// Cloning is cheap: the service holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    projects: ProjectService,
}

impl AppState {
    pub fn new(projects: ProjectService) -> Self {
        Self { projects }
    }

    /// State backed by the JSON document at `data_file`.
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        let store = JsonFileStore::new(data_file);
        Self::new(ProjectService::new(Arc::new(store)))
    }

    pub fn projects(&self) -> &ProjectService {
        &self.projects
    }
}
