//! Publishing the interpreted status to a social client.
//!
//! [`PresenceSynchronizer`] queues a status pair on the transport only
//! when it differs from the last one; an [`ActivityQueue`] delivers the
//! queued calls in order. [`ConnectionSupervisor`] keeps a
//! transport connected in the background: connect with indefinite retry,
//! pump callbacks, and reconnect from scratch when the pump fails.
//! [`PresenceSession`] ties both to the journal interpreter and the
//! presence preference; it is what the host talks to.

pub mod discord;
pub mod log_transport;
pub mod queue;
pub mod session;
pub mod supervisor;
pub mod synchronizer;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use discord::DiscordConnector;
pub use log_transport::LogConnector;
pub use queue::ActivityQueue;
pub use session::{PresenceSession, SessionSettings};
pub use supervisor::{ConnectionSupervisor, SupervisorSettings};
pub use synchronizer::{PresenceSynchronizer, PublishOutcome};
pub use transport::{
    log_activity_result, ActivityResult, ActivityUpdate, Connector, PresenceTransport,
    TransportSlot,
};
