//! Background connection supervision.
//!
//! The supervisor owns the connection lifecycle: it retries the connector
//! at a fixed interval until one attempt succeeds, publishes the latest
//! recorded status on the new transport's activity queue, then pumps callbacks until the
//! pump fails. A failed pump drops the transport and starts over.

use std::sync::Arc;
use std::time::Duration;

use edp_common::TransportError;
use edp_config::EdpConfig;
use edp_journal::StatusPair;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use crate::queue::ActivityQueue;
use crate::transport::{ActivityUpdate, Connector, PresenceTransport, TransportSlot};

#[derive(Debug, Clone)]
pub struct SupervisorSettings {
    pub client_id: i64,
    pub retry_interval: Duration,
    pub pump_interval: Duration,
}

impl SupervisorSettings {
    pub fn from_config(config: &EdpConfig) -> Self {
        Self {
            client_id: config.presence.client_id,
            retry_interval: config.connection.retry_interval(),
            pump_interval: config.connection.pump_interval(),
        }
    }
}

pub struct ConnectionSupervisor {
    connector: Arc<dyn Connector>,
    settings: SupervisorSettings,
    slot: TransportSlot,
    latest: watch::Receiver<StatusPair>,
    session_start: i64,
}

impl ConnectionSupervisor {
    pub fn new(
        connector: Arc<dyn Connector>,
        settings: SupervisorSettings,
        slot: TransportSlot,
        latest: watch::Receiver<StatusPair>,
        session_start: i64,
    ) -> Self {
        Self {
            connector,
            settings,
            slot,
            latest,
            session_start,
        }
    }

    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }

    /// Run until `cancel` fires. The slot is empty on return.
    pub async fn run(self, cancel: CancellationToken) {
        while let Some(transport) = self.connect(&cancel).await {
            let queue = ActivityQueue::spawn(transport.clone());
            self.slot
                .install(queue, || {
                    ActivityUpdate::new(&self.latest.borrow(), self.session_start)
                })
                .await;

            let pump = tokio::spawn(pump_callbacks(
                transport,
                self.settings.pump_interval,
                cancel.child_token(),
            ));

            match pump.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!(error = %e, "presence transport lost, reconnecting");
                }
                Err(e) => {
                    error!(error = %e, "callback pump task failed, reconnecting");
                }
            }
            self.slot.clear().await;

            if cancel.is_cancelled() {
                break;
            }
        }

        self.slot.clear().await;
        debug!("connection supervisor stopped");
    }

    /// Retry the connector until it succeeds. `None` means cancelled.
    async fn connect(&self, cancel: &CancellationToken) -> Option<Arc<dyn PresenceTransport>> {
        let mut attempts: u64 = 0;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => return None,
                _ = tokio::time::sleep(self.settings.retry_interval) => {}
            }

            attempts += 1;
            let result = tokio::select! {
                _ = cancel.cancelled() => return None,
                result = self.connector.connect(self.settings.client_id) => result,
            };

            match result {
                Ok(transport) => {
                    info!(attempts, "presence transport connected");
                    return Some(transport);
                }
                Err(e) if attempts == 1 => {
                    debug!(error = %e, "presence transport unavailable, retrying");
                }
                Err(e) => trace!(attempts, error = %e, "connect attempt failed"),
            }
        }
    }
}

/// Pump callbacks at a fixed cadence. Returns `Ok` only on cancellation.
async fn pump_callbacks(
    transport: Arc<dyn PresenceTransport>,
    interval: Duration,
    cancel: CancellationToken,
) -> Result<(), TransportError> {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            _ = ticker.tick() => transport.pump_callbacks().await?,
        }
    }
}
