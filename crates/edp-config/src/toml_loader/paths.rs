//! Where the config file lives.

use std::path::{Path, PathBuf};

use edp_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "edp";
const CONFIG_FILE: &str = "config.toml";

/// `<os config dir>/edp/config.toml`, e.g. `%APPDATA%\edp\config.toml` or
/// `~/.config/edp/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no OS config directory".into()))
}

/// Write the commented default config to `path`. An existing file is left
/// alone.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    let io_err = |e: std::io::Error| ConfigError::ParseError(format!("{}: {e}", path.display()));

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_err)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
