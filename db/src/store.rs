//! Whole-document persistence for the project collection.
//!
//! Every call reads or rewrites the full backing file. There is no locking:
//! two writers racing on `load`/`save` lose one update, last writer wins.

use crate::models::project::ProjectCollection;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save contract for the project collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Reads the full collection.
    ///
    /// A missing or unparsable backing document yields an empty collection.
    async fn load(&self) -> Result<ProjectCollection, StoreError>;

    /// Overwrites the backing document with `collection`.
    async fn save(&self, collection: &ProjectCollection) -> Result<(), StoreError>;
}

/// Flat-file store holding `{ "projects": [...] }` as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn load(&self) -> Result<ProjectCollection, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file missing, starting empty");
                return Ok(ProjectCollection::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_slice::<ProjectCollection>(&bytes) {
            Ok(collection) => Ok(collection),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Data file is not a valid project document; treating it as empty"
                );
                Ok(ProjectCollection::default())
            }
        }
    }

    async fn save(&self, collection: &ProjectCollection) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(collection)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))?;

        debug!(
            path = %self.path.display(),
            count = collection.projects.len(),
            "Saved project collection"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Project;
    use tempfile::TempDir;

    fn store_in(tmp: &TempDir) -> JsonFileStore {
        JsonFileStore::new(tmp.path().join("db.json"))
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let col = store.load().await.unwrap();
        assert!(col.projects.is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn load_invalid_json_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        std::fs::write(store.path(), "{ not json").unwrap();

        let col = store.load().await.unwrap();
        assert!(col.projects.is_empty());
    }

    #[tokio::test]
    async fn load_wrong_shape_or_empty_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        std::fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert!(store.load().await.unwrap().projects.is_empty());

        std::fs::write(store.path(), "").unwrap();
        assert!(store.load().await.unwrap().projects.is_empty());
    }

    #[tokio::test]
    async fn load_reads_offsetless_timestamps() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let raw = serde_json::json!({
            "projects": [{
                "id": "legacy-1",
                "studentName": "Carol",
                "course": "Bio200",
                "githubUrl": "https://github.com/carol/bio",
                "grade": null,
                "createdAt": "2025-01-10T09:30:00.123456",
                "updatedAt": "2025-01-10T09:30:00.123456"
            }]
        });
        std::fs::write(store.path(), raw.to_string()).unwrap();

        let col = store.load().await.unwrap();
        assert_eq!(col.projects.len(), 1);
        assert_eq!(col.projects[0].id, "legacy-1");
        assert_eq!(col.projects[0].created_at, col.projects[0].updated_at);
    }

    #[tokio::test]
    async fn load_directory_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let mut graded = Project::new("Bob", "Math101", "https://x/b");
        graded.set_grade(14.5);
        let col = ProjectCollection {
            projects: vec![Project::new("Alice", "CS50", "https://x/a"), graded],
        };

        store.save(&col).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, col);
    }

    #[tokio::test]
    async fn save_writes_projects_document_and_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::new(tmp.path().join("nested").join("db.json"));

        let col = ProjectCollection {
            projects: vec![Project::new("Alice", "CS50", "https://x/a")],
        };
        store.save(&col).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["projects"].as_array().unwrap().len(), 1);
        assert_eq!(v["projects"][0]["studentName"], "Alice");
        assert!(raw.contains("\n  \"projects\""));
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        std::fs::write(store.path(), "garbage").unwrap();

        store.save(&ProjectCollection::default()).await.unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["projects"], serde_json::json!([]));
    }
}
