//! Reading `config.toml`.

use std::path::Path;

use edp_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::{EdpConfig, CONFIG_SCHEMA_VERSION};
use crate::validation;

/// Parse the config at `path`. Missing keys take their defaults.
///
/// Out-of-range values are reported but do not fail the load; callers
/// that need a valid config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<EdpConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config: EdpConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if config.schema_version < CONFIG_SCHEMA_VERSION {
        info!(
            schema_version = config.schema_version,
            "legacy config, reading top-level disable_presence"
        );
    }
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}");
    }

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `config.toml` from the OS config directory, writing the commented
/// default there first if there is none.
pub fn load_default() -> Result<EdpConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(EdpConfig::default())
        }
        other => other,
    }
}
