//! Transport seam between the synchronizer and a social client.

use std::sync::Arc;

use async_trait::async_trait;
use edp_common::TransportError;
use edp_journal::StatusPair;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::queue::ActivityQueue;

/// One activity as pushed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityUpdate {
    pub state: String,
    /// Empty details are left off the activity entirely.
    pub details: String,
    /// Unix seconds; fixed for the lifetime of the session.
    pub start_timestamp: i64,
}

impl ActivityUpdate {
    pub fn new(status: &StatusPair, start_timestamp: i64) -> Self {
        Self {
            state: status.state.clone(),
            details: status.details.clone(),
            start_timestamp,
        }
    }
}

/// Completion status of an activity call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityResult {
    Ok,
    /// The transport went away before the call finished.
    Aborted,
    Failed(String),
}

/// Log the completion of an activity call. Nothing else reacts to it.
pub fn log_activity_result(result: &ActivityResult) {
    match result {
        ActivityResult::Ok => info!("activity call succeeded"),
        ActivityResult::Aborted => warn!("activity call aborted"),
        ActivityResult::Failed(reason) => {
            let err = TransportError::Rejected(reason.clone());
            error!(error = %err, "activity call failed");
        }
    }
}

/// A live connection to the social client.
#[async_trait]
pub trait PresenceTransport: Send + Sync {
    async fn update_activity(&self, activity: ActivityUpdate) -> ActivityResult;

    async fn clear_activity(&self) -> ActivityResult;

    /// Process pending client callbacks. An error means the connection is
    /// lost and must be rebuilt.
    async fn pump_callbacks(&self) -> Result<(), TransportError>;
}

/// Builds transports. Each call is one connection attempt.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, client_id: i64) -> Result<Arc<dyn PresenceTransport>, TransportError>;
}

/// The activity queue of the current transport, if any, shared between
/// the supervisor (writer) and the synchronizer (reader).
#[derive(Clone, Default)]
pub struct TransportSlot {
    inner: Arc<RwLock<Option<ActivityQueue>>>,
}

impl TransportSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<ActivityQueue> {
        self.inner.read().await.clone()
    }

    /// Store `queue` after queueing `first()` on it, all under the write
    /// lock. Readers that find the queue therefore queue after `first`.
    pub async fn install(&self, queue: ActivityQueue, first: impl FnOnce() -> ActivityUpdate) {
        let mut slot = self.inner.write().await;
        queue.publish(first());
        *slot = Some(queue);
    }

    pub async fn clear(&self) -> Option<ActivityQueue> {
        self.inner.write().await.take()
    }

    pub async fn is_connected(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{eventually, RecordingTransport};

    #[test]
    fn activity_copies_status() {
        let status = StatusPair::new("In Sol", "Docked at Abraham Lincoln");
        let activity = ActivityUpdate::new(&status, 1_700_000_000);
        assert_eq!(activity.state, "In Sol");
        assert_eq!(activity.details, "Docked at Abraham Lincoln");
        assert_eq!(activity.start_timestamp, 1_700_000_000);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged(result: &ActivityResult) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || log_activity_result(result));
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn completion_log_levels() {
        let ok = logged(&ActivityResult::Ok);
        assert!(ok.contains("INFO"), "{ok}");

        let aborted = logged(&ActivityResult::Aborted);
        assert!(aborted.contains("WARN"), "{aborted}");

        let failed = logged(&ActivityResult::Failed("invalid payload".into()));
        assert!(failed.contains("ERROR"), "{failed}");
        assert!(failed.contains("activity update rejected: invalid payload"), "{failed}");
    }

    #[tokio::test]
    async fn slot_install_and_clear() {
        let slot = TransportSlot::new();
        assert!(!slot.is_connected().await);
        assert!(slot.get().await.is_none());

        let transport = Arc::new(RecordingTransport::default());
        let queue = ActivityQueue::spawn(transport.clone());
        let idle = StatusPair::idle("Connecting CMDR Interface");
        slot.install(queue, || ActivityUpdate::new(&idle, 7)).await;
        assert!(slot.is_connected().await);
        assert!(eventually(|| transport.updates().len() == 1).await);
        assert_eq!(transport.updates()[0].state, "Connecting CMDR Interface");

        let clone = slot.clone();
        assert!(clone.clear().await.is_some());
        assert!(!slot.is_connected().await);
        assert!(slot.clear().await.is_none());
    }
}
