//! Change-detected publishing of status pairs.

use edp_journal::StatusPair;
use tokio::sync::watch;
use tracing::debug;

use crate::transport::{ActivityUpdate, TransportSlot};

/// What [`PresenceSynchronizer::sync_if_changed`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Candidate equals the last recorded pair; nothing sent.
    Unchanged,
    /// An activity update was queued on the transport.
    Issued,
    /// No transport connected. The candidate is recorded and goes out when
    /// the supervisor next connects.
    Unavailable,
}

pub struct PresenceSynchronizer {
    slot: TransportSlot,
    previous: StatusPair,
    session_start: i64,
    latest: watch::Sender<StatusPair>,
}

impl PresenceSynchronizer {
    pub fn new(slot: TransportSlot, initial: StatusPair, session_start: i64) -> Self {
        let (latest, _) = watch::channel(initial.clone());
        Self {
            slot,
            previous: initial,
            session_start,
            latest,
        }
    }

    /// Receiver for the most recently recorded pair.
    pub fn subscribe(&self) -> watch::Receiver<StatusPair> {
        self.latest.subscribe()
    }

    /// Publish `candidate` if it differs from the last recorded pair.
    ///
    /// The update is queued without waiting for completion; the result is
    /// only logged. Updates reach the client in call order.
    pub async fn sync_if_changed(&mut self, candidate: &StatusPair) -> PublishOutcome {
        if *candidate == self.previous {
            return PublishOutcome::Unchanged;
        }

        // Record first: a supervisor installing a transport after this
        // point publishes the candidate itself.
        self.previous = candidate.clone();
        self.latest.send_replace(candidate.clone());

        match self.slot.get().await {
            Some(queue) if queue.publish(ActivityUpdate::new(candidate, self.session_start)) => {
                PublishOutcome::Issued
            }
            _ => {
                debug!(status = %candidate, "no presence transport, deferring update");
                PublishOutcome::Unavailable
            }
        }
    }
}
