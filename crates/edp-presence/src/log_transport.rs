//! Transport that writes activities to the log instead of a client.
//! Backs `--no-discord`.

use std::sync::Arc;

use async_trait::async_trait;
use edp_common::TransportError;
use tracing::info;

use crate::transport::{ActivityResult, ActivityUpdate, Connector, PresenceTransport};

#[derive(Debug, Default)]
pub struct LogConnector;

#[async_trait]
impl Connector for LogConnector {
    async fn connect(&self, client_id: i64) -> Result<Arc<dyn PresenceTransport>, TransportError> {
        info!(client_id, "logging presence instead of publishing");
        Ok(Arc::new(LogTransport))
    }
}

#[derive(Debug, Default)]
pub struct LogTransport;

#[async_trait]
impl PresenceTransport for LogTransport {
    async fn update_activity(&self, activity: ActivityUpdate) -> ActivityResult {
        info!(
            state = %activity.state,
            details = %activity.details,
            start = activity.start_timestamp,
            "presence"
        );
        ActivityResult::Ok
    }

    async fn clear_activity(&self) -> ActivityResult {
        info!("presence cleared");
        ActivityResult::Ok
    }

    async fn pump_callbacks(&self) -> Result<(), TransportError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_connects_and_accepts() {
        let transport = LogConnector.connect(1).await.unwrap();
        let activity = ActivityUpdate {
            state: "In Sol".into(),
            details: String::new(),
            start_timestamp: 0,
        };
        assert_eq!(transport.update_activity(activity).await, ActivityResult::Ok);
        assert_eq!(transport.clear_activity().await, ActivityResult::Ok);
        assert!(transport.pump_callbacks().await.is_ok());
    }
}
