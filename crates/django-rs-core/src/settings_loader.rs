//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `DJANGO_DEBUG` | `debug` |
//! | `DJANGO_LOG_LEVEL` | `log_level` |
//! | `DJANGO_DATABASE_ENGINE` | `databases.default.engine` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use django_rs_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/settings.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::DjangoError;
use crate::settings::{DatabaseSettings, Settings};

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values, including
/// fields nested inside a database entry.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, DjangoError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| DjangoError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
    merge_into_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, DjangoError> {
    from_toml_str(&read_file(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, DjangoError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> Result<Settings, DjangoError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| DjangoError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    merge_into_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, DjangoError> {
    from_json_str(&read_file(path.as_ref(), "JSON")?)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// - `DJANGO_DEBUG` -> `debug` ("true"/"1"/"yes" => true, anything else => false)
/// - `DJANGO_LOG_LEVEL` -> `log_level`
/// - `DJANGO_DATABASE_ENGINE` -> engine of the `default` alias, created if absent
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides(settings, |key| std::env::var(key).ok());
}

fn apply_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(val) = var("DJANGO_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Some(val) = var("DJANGO_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = var("DJANGO_DATABASE_ENGINE") {
        settings
            .databases
            .entry("default".to_string())
            .or_insert_with(DatabaseSettings::default)
            .engine = val;
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_file(path: &Path, format: &str) -> Result<String, DjangoError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path = %path.display(), format, error = %e, "failed to read settings file");
        e
    })?;
    Ok(content)
}

/// Overlays a parsed document on the default settings and deserializes the result.
///
/// Every database entry in the document is first merged with
/// [`DatabaseSettings::default`], so an entry may name only its engine.
fn merge_into_defaults(
    mut value: serde_json::Value,
    format: &str,
) -> Result<Settings, DjangoError> {
    let default_db = serde_json::to_value(DatabaseSettings::default()).map_err(|e| {
        DjangoError::ConfigurationError(format!("Failed to serialize default database: {e}"))
    })?;
    if let Some(serde_json::Value::Object(dbs)) = value.get_mut("databases") {
        for db in dbs.values_mut() {
            let entry = std::mem::take(db);
            *db = merge_json(default_db.clone(), entry);
        }
    }

    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        DjangoError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;
    serde_json::from_value(merge_json(default_json, value)).map_err(|e| {
        DjangoError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = match base_map.remove(&key) {
                    Some(base_v) => merge_json(base_v, override_v),
                    None => override_v,
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::settings::DEFAULT_ENGINE;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = false
            log_level = "warn"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "warn");
        // Defaults preserved
        assert_eq!(settings.databases["default"].engine, DEFAULT_ENGINE);
    }

    #[test]
    fn test_from_toml_str_partial_database() {
        let toml = r#"
            [databases.legacy]
            engine = "ado_mssql"
            host = "sql01"
        "#;

        let settings = from_toml_str(toml).unwrap();
        let db = settings.database("legacy").unwrap();
        assert_eq!(db.engine, "ado_mssql");
        assert_eq!(db.host, "sql01");
        assert_eq!(db.port, 1433);
        assert!(settings.database("default").is_some());
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let err = from_toml_str("[[invalid toml content").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        let result = from_toml_str("debug = \"sometimes\"");
        assert!(matches!(result, Err(DjangoError::ConfigurationError(_))));
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_databases() {
        let json = r#"{
            "log_level": "debug",
            "databases": {
                "default": { "engine": "ado_mssql", "name": "inventory" }
            }
        }"#;

        let settings = from_json_str(json).unwrap();
        let db = settings.database("default").unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(db.engine, "ado_mssql");
        assert_eq!(db.name, "inventory");
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{invalid json").is_err());
    }

    // ── File loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_file() {
        let dir = std::env::temp_dir().join("django_rs_mssql_test_toml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "log_level = \"error\"\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert_eq!(settings.log_level, "error");

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = from_json_file("/nonexistent/path/settings.json").unwrap_err();
        match err {
            DjangoError::IoError(ref io_err) => {
                assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected IoError, got {other:?}"),
        }
        assert!(err.is_configuration());
    }

    // ── Environment overrides ───────────────────────────────────────

    #[test]
    fn test_overrides_debug_and_log_level() {
        let mut settings = Settings::default();
        apply_overrides(
            &mut settings,
            vars(&[("DJANGO_DEBUG", "0"), ("DJANGO_LOG_LEVEL", "trace")]),
        );
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "trace");
    }

    #[test]
    fn test_overrides_debug_yes() {
        let mut settings = Settings::default();
        settings.debug = false;
        apply_overrides(&mut settings, vars(&[("DJANGO_DEBUG", "YES")]));
        assert!(settings.debug);
    }

    #[test]
    fn test_overrides_engine_creates_default_alias() {
        let mut settings = Settings::default();
        settings.databases.clear();
        apply_overrides(&mut settings, vars(&[("DJANGO_DATABASE_ENGINE", "ado_mssql")]));
        assert_eq!(settings.databases["default"].engine, "ado_mssql");
    }

    #[test]
    fn test_overrides_absent_leave_settings() {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, vars(&[]));
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
    }

    // Only test in this module that touches the process environment.
    #[test]
    fn test_from_env_and_file_with_env() {
        std::env::set_var("DJANGO_LOG_LEVEL", "debug");
        std::env::set_var("DJANGO_DATABASE_ENGINE", "ado_mssql");

        let settings = from_env();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.databases["default"].engine, "ado_mssql");

        let dir = std::env::temp_dir().join("django_rs_mssql_test_toml_env");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "log_level = \"error\"\ndebug = false\n").unwrap();

        let settings = from_toml_file_with_env(&path).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert!(!settings.debug);
        assert_eq!(settings.databases["default"].engine, "ado_mssql");

        std::env::remove_var("DJANGO_LOG_LEVEL");
        std::env::remove_var("DJANGO_DATABASE_ENGINE");
        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    // ── merge_json helper ───────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"outer": {"a": 1, "b": 2}});
        let over = serde_json::json!({"outer": {"b": 3}});
        let merged = merge_json(base, over);
        assert_eq!(merged["outer"]["a"], 1);
        assert_eq!(merged["outer"]["b"], 3);
    }
}
