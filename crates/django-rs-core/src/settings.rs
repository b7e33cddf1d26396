//! Settings for the django-rs backend crates.
//!
//! [`Settings`] holds the subset of framework configuration the backends read:
//! debug mode, the log level, and the database connections keyed by alias.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The engine configured for the `default` alias when nothing else is given.
pub const DEFAULT_ENGINE: &str = "django_rs.db.backends.ado_mssql";

/// Database connection configuration.
///
/// Only `engine` is consulted when selecting a column-type table; the other
/// fields travel with the settings for the connection layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// The database engine (e.g. `django_rs.db.backends.ado_mssql`).
    pub engine: String,
    /// The database name.
    pub name: String,
    /// The database user.
    pub user: String,
    /// The database password.
    pub password: String,
    /// The database host.
    pub host: String,
    /// The database port.
    pub port: u16,
    /// Additional engine-specific options.
    pub options: HashMap<String, String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            name: String::new(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            port: 1433,
            options: HashMap::new(),
        }
    }
}

/// The complete set of settings.
///
/// # Examples
///
/// ```
/// use django_rs_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
    /// Database configurations, keyed by alias (e.g. "default").
    pub databases: HashMap<String, DatabaseSettings>,
    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut databases = HashMap::new();
        databases.insert("default".to_string(), DatabaseSettings::default());

        Self {
            debug: true,
            log_level: "info".to_string(),
            databases,
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Returns the database configuration registered under `alias`.
    pub fn database(&self, alias: &str) -> Option<&DatabaseSettings> {
        self.databases.get(alias)
    }
}
