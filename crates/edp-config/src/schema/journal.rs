//! Journal reader settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalSettings {
    /// Journal directory. Uses the game's default location when unset.
    pub directory: Option<PathBuf>,
    /// How often the newest journal file is polled (valid range: 50-60000).
    pub poll_interval_ms: u64,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            directory: None,
            poll_interval_ms: 250,
        }
    }
}

impl JournalSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
