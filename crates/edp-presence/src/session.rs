//! The host-facing presence session.

use std::sync::Arc;

use edp_config::{EdpConfig, PreferencesStore};
use edp_journal::{Ambient, JournalEvent, StatusInterpreter, StatusPair};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::supervisor::{ConnectionSupervisor, SupervisorSettings};
use crate::synchronizer::{PresenceSynchronizer, PublishOutcome};
use crate::transport::{Connector, TransportSlot};

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub idle_message: String,
    pub supervisor: SupervisorSettings,
}

impl SessionSettings {
    pub fn from_config(config: &EdpConfig) -> Self {
        Self {
            idle_message: config.presence.idle_message.clone(),
            supervisor: SupervisorSettings::from_config(config),
        }
    }
}

/// Interpreter, synchronizer and connection supervisor for one run.
///
/// Dropping the session cancels the supervisor without clearing the
/// published activity; call [`stop`](Self::stop) for an orderly shutdown.
pub struct PresenceSession {
    interpreter: StatusInterpreter,
    synchronizer: PresenceSynchronizer,
    preferences: Arc<dyn PreferencesStore>,
    slot: TransportSlot,
    cancel: CancellationToken,
    supervisor: Option<JoinHandle<()>>,
}

impl PresenceSession {
    /// Build the session and spawn its connection supervisor. Must be
    /// called inside a tokio runtime.
    pub fn start(
        connector: Arc<dyn Connector>,
        settings: SessionSettings,
        preferences: Arc<dyn PreferencesStore>,
    ) -> Self {
        let interpreter = StatusInterpreter::with_idle_message(settings.idle_message);
        let session_start = chrono::Utc::now().timestamp();
        let slot = TransportSlot::new();
        let synchronizer =
            PresenceSynchronizer::new(slot.clone(), interpreter.status().clone(), session_start);

        let cancel = CancellationToken::new();
        let supervisor = ConnectionSupervisor::new(
            connector,
            settings.supervisor,
            slot.clone(),
            synchronizer.subscribe(),
            session_start,
        )
        .spawn(cancel.clone());

        info!(session_start, "presence session started");
        Self {
            interpreter,
            synchronizer,
            preferences,
            slot,
            cancel,
            supervisor: Some(supervisor),
        }
    }

    /// Interpret one journal event and publish the result if it changed.
    ///
    /// Returns `None` when presence is disabled; the interpreter still
    /// advances so the status is current once it is re-enabled.
    pub async fn on_event(
        &mut self,
        ambient: &Ambient,
        event: &JournalEvent,
    ) -> Option<PublishOutcome> {
        let candidate = self.interpreter.apply(ambient, event).clone();
        if self.preferences.presence_disabled() {
            debug!(event = event.kind(), "presence disabled, not publishing");
            return None;
        }
        Some(self.synchronizer.sync_if_changed(&candidate).await)
    }

    /// Re-check the preference after a change. Re-enabling syncs the
    /// current status.
    pub async fn preferences_changed(&mut self) -> Option<PublishOutcome> {
        if self.preferences.presence_disabled() {
            info!("presence updates disabled");
            return None;
        }
        let current = self.interpreter.status().clone();
        Some(self.synchronizer.sync_if_changed(&current).await)
    }

    pub fn status(&self) -> &StatusPair {
        self.interpreter.status()
    }

    pub async fn is_connected(&self) -> bool {
        self.slot.is_connected().await
    }

    /// Stop the supervisor and clear the published activity once every
    /// queued update has been delivered.
    pub async fn stop(mut self) {
        let queue = self.slot.get().await;
        self.cancel.cancel();
        if let Some(queue) = queue {
            queue.clear().await;
        }
        if let Some(handle) = self.supervisor.take() {
            let _ = handle.await;
        }
        info!("presence session stopped");
    }
}

impl Drop for PresenceSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
