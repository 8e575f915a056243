//! Discord rich presence over the local IPC socket.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use discord_sdk::{
    activity::ActivityBuilder,
    wheel::{UserState, Wheel},
    Discord, Subscriptions,
};
use edp_common::TransportError;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::transport::{ActivityResult, ActivityUpdate, Connector, PresenceTransport};

/// How long one connection attempt waits for the client handshake.
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DiscordConnector {
    handshake_timeout: Duration,
}

impl DiscordConnector {
    pub fn new() -> Self {
        Self {
            handshake_timeout: HANDSHAKE_TIMEOUT,
        }
    }
}

impl Default for DiscordConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for DiscordConnector {
    async fn connect(&self, client_id: i64) -> Result<Arc<dyn PresenceTransport>, TransportError> {
        let (wheel, handler) = Wheel::new(Box::new(|err| {
            debug!(error = ?err, "discord error");
        }));
        let mut user_spoke = wheel.user();

        let discord = Discord::new(client_id, Subscriptions::ACTIVITY, Box::new(handler))
            .map_err(|e| TransportError::Unavailable(format!("{e:?}")))?;

        let handshake = tokio::time::timeout(self.handshake_timeout, async {
            if user_spoke.0.changed().await.is_err() {
                return Err("connection closed during handshake".to_string());
            }
            match &*user_spoke.0.borrow() {
                UserState::Connected(user) => Ok(user.username.clone()),
                UserState::Disconnected(err) => Err(format!("disconnected: {err:?}")),
            }
        })
        .await
        .unwrap_or_else(|_| Err("handshake timed out".to_string()));

        match handshake {
            Ok(username) => {
                info!(%username, "discord client connected");
                Ok(Arc::new(DiscordTransport {
                    discord,
                    user: user_spoke.0,
                }))
            }
            Err(reason) => {
                discord.disconnect().await;
                Err(TransportError::Unavailable(reason))
            }
        }
    }
}

pub struct DiscordTransport {
    discord: Discord,
    user: watch::Receiver<UserState>,
}

impl DiscordTransport {
    fn disconnect_reason(&self) -> Option<String> {
        match &*self.user.borrow() {
            UserState::Connected(_) => None,
            UserState::Disconnected(err) => Some(format!("{err:?}")),
        }
    }
}

#[async_trait]
impl PresenceTransport for DiscordTransport {
    async fn update_activity(&self, activity: ActivityUpdate) -> ActivityResult {
        if self.disconnect_reason().is_some() {
            return ActivityResult::Aborted;
        }

        let mut builder = ActivityBuilder::new()
            .state(activity.state)
            .start_timestamp(activity.start_timestamp);
        if !activity.details.is_empty() {
            builder = builder.details(activity.details);
        }

        match self.discord.update_activity(builder).await {
            Ok(_) => ActivityResult::Ok,
            Err(e) => ActivityResult::Failed(format!("{e:?}")),
        }
    }

    async fn clear_activity(&self) -> ActivityResult {
        if self.disconnect_reason().is_some() {
            return ActivityResult::Aborted;
        }
        match self.discord.clear_activity().await {
            Ok(_) => ActivityResult::Ok,
            Err(e) => ActivityResult::Failed(format!("{e:?}")),
        }
    }

    async fn pump_callbacks(&self) -> Result<(), TransportError> {
        match self.disconnect_reason() {
            None => Ok(()),
            Some(reason) => Err(TransportError::CallbackPump(reason)),
        }
    }
}
