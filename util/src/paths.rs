use crate::config::AppConfig;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Ensure the parent directory of a *file path* exists (no-op if none).
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Absolute form of `path`: relative paths are resolved against current_dir().
pub fn resolve<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Backing file for the project collection, from `AppConfig::data_file`.
pub fn data_file_path() -> PathBuf {
    resolve(AppConfig::global().data_file)
}

/// Directory the rolling log files are written to.
pub fn log_dir() -> PathBuf {
    resolve("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_keeps_absolute_paths() {
        let abs = std::env::temp_dir().join("db.json");
        assert_eq!(resolve(&abs), abs);
    }

    #[test]
    fn resolve_anchors_relative_paths() {
        let resolved = resolve("data/db.json");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("data/db.json"));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a").join("b").join("db.json");
        ensure_parent_dir(&file).unwrap();
        assert!(tmp.path().join("a").join("b").is_dir());
        assert!(!file.exists());
    }

    #[test]
    fn ensure_parent_dir_accepts_bare_file_names() {
        ensure_parent_dir("db.json").unwrap();
    }
}
