//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub data_file: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key`, parsing it into `T`; missing or unparsable values yield `default`.
fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a default, so this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "ProjetAPI".into()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "api=info,services=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: var_or("PORT", 8000),
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| "db.json".into()),
        }
    }

    /// Returns a snapshot of the global configuration.
    ///
    /// A poisoned lock still yields the last written value.
    pub fn global() -> AppConfig {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        match lock.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        AppConfig::set_field(|cfg| *cfg = AppConfig::from_env());
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = match lock.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    /// Override the backing file location.
    pub fn set_data_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.data_file = value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use serial_test::serial;

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        AppConfig::set_port(9123);
        AppConfig::set_data_file("/tmp/other.json");
        let cfg = AppConfig::global();
        assert_eq!(cfg.port, 9123);
        assert_eq!(cfg.data_file, "/tmp/other.json");

        AppConfig::reset();
        let cfg = AppConfig::global();
        assert_ne!(cfg.data_file, "/tmp/other.json");
    }

    #[test]
    #[serial]
    fn project_name_override_is_visible_globally() {
        AppConfig::set_project_name("GradeBook");
        assert_eq!(AppConfig::global().project_name, "GradeBook");
        AppConfig::reset();
    }
}
