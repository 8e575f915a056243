//! Configuration for the presence daemon.
//!
//! TOML config with live reload and validation. Every section has
//! defaults so an empty or partial file works. The "disable presence"
//! preference is exposed through [`PreferencesStore`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use edp_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("presence disabled: {}", config.presence.disabled);
//! ```

pub mod preferences;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use preferences::{
    ConfigPreferences, PreferenceSource, PreferencesStore, StaticPreferences,
};
pub use reload::ReloadManager;
pub use schema::{EdpConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use std::path::Path;

use edp_common::ConfigError;

/// Load and validate the config.
///
/// Reads `path` when given, otherwise `config.toml` in the OS config
/// directory (created with defaults if missing).
pub fn load_config(path: Option<&Path>) -> Result<EdpConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
schema_version = 2

[presence]
disabled = true
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.presence.disabled);
        assert_eq!(config.connection.retry_interval_ms, 100);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[connection]
pump_interval_ms = 0
"#,
        )
        .unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("connection.pump_interval_ms"));
    }

    #[test]
    fn config_schema_version_is_2() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 2);
    }
}
