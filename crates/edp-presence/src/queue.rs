//! Ordered delivery of activity calls to one transport.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::transport::{log_activity_result, ActivityResult, ActivityUpdate, PresenceTransport};

enum ActivityCommand {
    Update(ActivityUpdate),
    Clear(oneshot::Sender<ActivityResult>),
}

/// Sender side of a transport's activity worker.
///
/// Every update and clear goes through one task, so the client applies them
/// in the order they were queued. The worker exits once all handles are
/// dropped.
#[derive(Clone)]
pub struct ActivityQueue {
    tx: mpsc::UnboundedSender<ActivityCommand>,
}

impl ActivityQueue {
    /// Spawn the worker for `transport`. Must be called inside a tokio
    /// runtime.
    pub fn spawn(transport: Arc<dyn PresenceTransport>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(drain(transport, rx));
        Self { tx }
    }

    /// Queue an update without waiting for it. False if the worker is gone.
    pub fn publish(&self, activity: ActivityUpdate) -> bool {
        self.tx.send(ActivityCommand::Update(activity)).is_ok()
    }

    /// Clear the activity after every update queued before it has run.
    pub async fn clear(&self) -> ActivityResult {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.tx.send(ActivityCommand::Clear(reply_tx)).is_err() {
            return ActivityResult::Aborted;
        }
        reply_rx.await.unwrap_or(ActivityResult::Aborted)
    }
}

async fn drain(
    transport: Arc<dyn PresenceTransport>,
    mut rx: mpsc::UnboundedReceiver<ActivityCommand>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            ActivityCommand::Update(activity) => {
                log_activity_result(&transport.update_activity(activity).await);
            }
            ActivityCommand::Clear(reply) => {
                let result = transport.clear_activity().await;
                log_activity_result(&result);
                let _ = reply.send(result);
            }
        }
    }
    debug!("activity worker stopped");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{eventually, RecordingTransport};

    fn activity(details: &str) -> ActivityUpdate {
        ActivityUpdate {
            state: "In Sol".into(),
            details: details.into(),
            start_timestamp: 0,
        }
    }

    #[tokio::test]
    async fn updates_apply_in_queue_order() {
        let transport = Arc::new(RecordingTransport::slow_first(Duration::from_millis(50)));
        let queue = ActivityQueue::spawn(transport.clone());

        assert!(queue.publish(activity("Docked at Abraham Lincoln")));
        assert!(queue.publish(activity("Flying in normal space")));

        assert!(eventually(|| transport.updates().len() == 2).await);
        let details: Vec<_> = transport.updates().into_iter().map(|a| a.details).collect();
        assert_eq!(details, ["Docked at Abraham Lincoln", "Flying in normal space"]);
        assert_eq!(
            transport.shown().map(|a| a.details).as_deref(),
            Some("Flying in normal space")
        );
    }

    #[tokio::test]
    async fn clear_waits_for_pending_updates() {
        let transport = Arc::new(RecordingTransport::slow_first(Duration::from_millis(50)));
        let queue = ActivityQueue::spawn(transport.clone());

        queue.publish(activity("Docked at Abraham Lincoln"));
        assert_eq!(queue.clear().await, ActivityResult::Ok);

        assert_eq!(transport.updates().len(), 1);
        assert_eq!(transport.clears(), 1);
        assert!(transport.shown().is_none());
    }
}
