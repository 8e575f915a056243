//! Core reload manager implementation.

use crate::schema::EdpConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use edp_common::ConfigError;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel. Invalid edits are logged and
/// the previous config stays in effect.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// Returns the initial config and a receiver that observes every
    /// successful reload. Falls back to defaults if the file cannot be
    /// loaded. Must be called inside a tokio runtime.
    pub fn start(config_path: PathBuf) -> (EdpConfig, watch::Receiver<EdpConfig>) {
        let initial = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                EdpConfig::default()
            }
        };
        Self::start_with(config_path, initial)
    }

    /// Like [`ReloadManager::start`] but with an already loaded config.
    pub fn start_with(
        config_path: PathBuf,
        initial: EdpConfig,
    ) -> (EdpConfig, watch::Receiver<EdpConfig>) {
        let (config_tx, config_rx) = watch::channel(initial.clone());

        tokio::spawn(async move {
            let manager = ReloadManager { config_path };
            manager.run_watch_loop(config_tx).await;
        });

        (initial, config_rx)
    }

    /// Reload on every change signal until all receivers are gone.
    async fn run_watch_loop(&self, config_tx: watch::Sender<EdpConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.is_closed() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                            publish_if_changed(&config_tx, config);
                        }
                        Err(e) => warn!("config reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    fn reload_config(&self) -> Result<EdpConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

/// Replace the published config only when the file's content changed in
/// effect. Saving an identical file does not wake receivers.
pub(crate) fn publish_if_changed(tx: &watch::Sender<EdpConfig>, config: EdpConfig) -> bool {
    tx.send_if_modified(|current| {
        if *current == config {
            return false;
        }
        if current.presence.disabled != config.presence.disabled
            || current.disable_presence != config.disable_presence
        {
            info!(
                disabled = config.presence.disabled,
                legacy = ?config.disable_presence,
                "presence preference changed"
            );
        }
        *current = config;
        true
    })
}
