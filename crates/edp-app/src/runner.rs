//! Wiring between the journal, the config and the presence session.

use std::path::Path;
use std::sync::Arc;

use edp_common::{EdpError, JournalError};
use edp_config::{
    toml_loader, ConfigPreferences, EdpConfig, PreferencesStore, ReloadManager, StaticPreferences,
};
use edp_presence::{Connector, DiscordConnector, LogConnector, PresenceSession, SessionSettings};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cli::Args;
use crate::journal::{self, locate, AmbientTracker, JournalTail};

pub async fn run(args: Args, config: EdpConfig) -> edp_common::Result<()> {
    let connector: Arc<dyn Connector> = if args.no_discord {
        Arc::new(LogConnector)
    } else {
        Arc::new(DiscordConnector::new())
    };

    let (preferences, config_rx) = preferences(&args, &config)?;
    let mut session =
        PresenceSession::start(connector, SessionSettings::from_config(&config), preferences);

    let result = match &args.replay {
        Some(path) => replay(&mut session, path).await,
        None => follow(&mut session, &args, &config, config_rx).await,
    };

    session.stop().await;
    result
}

/// Preference source plus, when it follows the config file, the reload
/// channel to watch for changes.
fn preferences(
    args: &Args,
    config: &EdpConfig,
) -> edp_common::Result<(Arc<dyn PreferencesStore>, Option<watch::Receiver<EdpConfig>>)> {
    if args.disable_presence {
        info!("presence publishing disabled from the command line");
        return Ok((Arc::new(StaticPreferences::new(true)), None));
    }

    let path = match &args.config {
        Some(path) => path.clone(),
        None => toml_loader::default_config_path()?,
    };
    let (_, rx) = ReloadManager::start_with(path, config.clone());
    Ok((Arc::new(ConfigPreferences::new(rx.clone())), Some(rx)))
}

async fn replay(session: &mut PresenceSession, path: &Path) -> edp_common::Result<()> {
    info!(path = %path.display(), "replaying journal");
    let content = std::fs::read_to_string(path).map_err(JournalError::from)?;

    let mut tracker = AmbientTracker::new();
    let mut events = 0usize;
    for line in content.lines() {
        if feed(session, &mut tracker, line).await {
            events += 1;
        }
    }

    info!(
        events,
        status = %session.status(),
        connected = session.is_connected().await,
        "replay finished"
    );
    Ok(())
}

async fn follow(
    session: &mut PresenceSession,
    args: &Args,
    config: &EdpConfig,
    mut config_rx: Option<watch::Receiver<EdpConfig>>,
) -> edp_common::Result<()> {
    let dir = locate::resolve_dir(args.journal_dir.as_deref(), &config.journal)?;
    info!(dir = %dir.display(), "watching journal directory");

    let mut tail = JournalTail::new(dir);
    let mut tracker = AmbientTracker::new();
    let mut ticker = tokio::time::interval(config.journal.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            signal = &mut shutdown => {
                signal.map_err(EdpError::Io)?;
                info!("interrupt received, stopping");
                return Ok(());
            }
            changed = config_changed(&mut config_rx) => {
                if changed {
                    session.preferences_changed().await;
                } else {
                    config_rx = None;
                }
            }
            _ = ticker.tick() => {
                match tail.poll() {
                    Ok(lines) => {
                        for line in &lines {
                            feed(session, &mut tracker, line).await;
                        }
                    }
                    Err(e) => warn!(error = %e, journal = ?tail.current(), "journal poll failed"),
                }
            }
        }
    }
}

/// Resolves on the next config reload; `false` once the reload manager is
/// gone. Never resolves without a channel.
async fn config_changed(rx: &mut Option<watch::Receiver<EdpConfig>>) -> bool {
    match rx {
        Some(rx) => rx.changed().await.is_ok(),
        None => std::future::pending().await,
    }
}

/// Track, interpret and publish one journal line. Returns whether the line
/// parsed.
async fn feed(session: &mut PresenceSession, tracker: &mut AmbientTracker, line: &str) -> bool {
    let Some(event) = journal::parse_line(line) else {
        return false;
    };
    let ambient = tracker.observe(&event);
    let outcome = session.on_event(&ambient, &event).await;
    debug!(event = event.kind(), ?outcome, "journal event");
    true
}
