//! Presence and transport connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Discord application the activity is published under.
pub const DEFAULT_CLIENT_ID: i64 = 386149818227097610;

/// Presence behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceSettings {
    /// Stop publishing status updates. Events are still interpreted.
    pub disabled: bool,
    pub client_id: i64,
    /// `state` line shown while idle or after the game shuts down.
    pub idle_message: String,
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            disabled: false,
            client_id: DEFAULT_CLIENT_ID,
            idle_message: "Connecting CMDR Interface".to_string(),
        }
    }
}

/// Connection supervision timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Delay before each connect attempt (valid range: 10-60000).
    pub retry_interval_ms: u64,
    /// Callback pump period (valid range: 10-10000).
    pub pump_interval_ms: u64,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            retry_interval_ms: 100,
            pump_interval_ms: 100,
        }
    }
}

impl ConnectionSettings {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }

    pub fn pump_interval(&self) -> Duration {
        Duration::from_millis(self.pump_interval_ms)
    }
}
