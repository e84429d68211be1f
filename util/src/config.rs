//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables (and `.env`).
//! Tests override individual fields through the per-field setters.

use std::path::Path;
use std::{env, fs, io};
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every key has a default, so this never fails; unparsable numbers fall back too.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "helpdesk"),
            log_level: var_or("LOG_LEVEL", "api=info,services=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            database_path: var_or("DATABASE_PATH", "data/helpdesk.db"),
            host: var_or("HOST", "127.0.0.1"),
            port: parsed_or("PORT", 3000),
        }
    }

    fn instance() -> &'static RwLock<AppConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()))
    }

    /// Returns a shared read guard over the global configuration.
    ///
    /// A poisoned lock is recovered rather than propagated; the config holds no invariants
    /// that a panicking writer could break.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        Self::instance()
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    pub fn reset() {
        AppConfig::set_field(|cfg| *cfg = AppConfig::from_env());
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = Self::instance()
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    /// The `sqlite:` URL for [`AppConfig::database_path`]. Values that already look like a
    /// DSN are returned untouched.
    pub fn database_url(&self) -> String {
        let path = &self.database_path;
        if path.starts_with("sqlite:") {
            path.clone()
        } else {
            format!("sqlite://{path}?mode=rwc")
        }
    }

    /// Creates the parent directory of a file-backed database. SQLite won't create
    /// intermediate directories itself.
    pub fn ensure_database_dir(&self) -> io::Result<()> {
        if self.database_path.starts_with("sqlite:") {
            return Ok(());
        }
        match Path::new(&self.database_path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    // --- Per-field setters below ---

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }
}
