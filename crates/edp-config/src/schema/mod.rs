//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod journal;
mod presence;
mod system;

pub use journal::*;
pub use presence::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 2;

/// Schema version assumed for files that do not declare one.
pub const LEGACY_SCHEMA_VERSION: u32 = 1;

fn legacy_schema_version() -> u32 {
    LEGACY_SCHEMA_VERSION
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdpConfig {
    #[serde(default = "legacy_schema_version")]
    pub schema_version: u32,
    /// Schema 1 preference flag: non-zero disables presence updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_presence: Option<i64>,
    pub presence: PresenceSettings,
    pub connection: ConnectionSettings,
    pub journal: JournalSettings,
    pub logging: LoggingConfig,
}

impl Default for EdpConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            disable_presence: None,
            presence: PresenceSettings::default(),
            connection: ConnectionSettings::default(),
            journal: JournalSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
