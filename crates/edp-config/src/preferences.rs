//! The "disable presence updates" preference.
//!
//! Callers read the flag through [`PreferencesStore`]. Which config key
//! holds it depends on the file's schema version; the reader is picked
//! once, when the store is built, instead of at every read.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::info;

use crate::schema::{EdpConfig, CONFIG_SCHEMA_VERSION};

/// Read access to the presence preference.
pub trait PreferencesStore: Send + Sync {
    /// True when status updates must not be published.
    fn presence_disabled(&self) -> bool;
}

/// Where the preference lives in a given config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    /// Schema 1: top-level integer `disable_presence`, non-zero disables.
    Legacy,
    /// Schema 2: `[presence] disabled`.
    Current,
}

impl PreferenceSource {
    pub fn for_config(config: &EdpConfig) -> Self {
        if config.schema_version >= CONFIG_SCHEMA_VERSION {
            Self::Current
        } else {
            Self::Legacy
        }
    }

    pub fn presence_disabled(self, config: &EdpConfig) -> bool {
        match self {
            Self::Legacy => config
                .disable_presence
                .map(|flag| flag != 0)
                .unwrap_or(config.presence.disabled),
            Self::Current => config.presence.disabled,
        }
    }
}

/// Preference backed by the live config channel from
/// [`ReloadManager`](crate::ReloadManager).
pub struct ConfigPreferences {
    config: watch::Receiver<EdpConfig>,
    source: PreferenceSource,
}

impl ConfigPreferences {
    pub fn new(config: watch::Receiver<EdpConfig>) -> Self {
        let source = PreferenceSource::for_config(&config.borrow());
        info!(?source, "presence preference source selected");
        Self { config, source }
    }

    pub fn source(&self) -> PreferenceSource {
        self.source
    }
}

impl PreferencesStore for ConfigPreferences {
    fn presence_disabled(&self) -> bool {
        self.source.presence_disabled(&self.config.borrow())
    }
}

/// Fixed preference, settable at runtime. Used by `--disable-presence`
/// and tests.
#[derive(Debug, Default)]
pub struct StaticPreferences {
    disabled: AtomicBool,
}

impl StaticPreferences {
    pub fn new(disabled: bool) -> Self {
        Self {
            disabled: AtomicBool::new(disabled),
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::Relaxed);
    }
}

impl PreferencesStore for StaticPreferences {
    fn presence_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }
}
