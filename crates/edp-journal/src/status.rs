//! The two-line presence status.

use std::fmt;

/// Idle `state` line shown before the first event and after `Shutdown`.
pub const DEFAULT_IDLE_MESSAGE: &str = "Connecting CMDR Interface";

/// The `state` / `details` pair shown in the social client.
///
/// Equality is structural; the synchronizer publishes only when a new
/// pair differs from the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StatusPair {
    pub state: String,
    pub details: String,
}

impl StatusPair {
    pub fn new(state: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            details: details.into(),
        }
    }

    /// The idle pair: the given message and empty details.
    pub fn idle(message: &str) -> Self {
        Self::new(message, "")
    }
}

impl fmt::Display for StatusPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.details.is_empty() {
            write!(f, "{}", self.state)
        } else {
            write!(f, "{} | {}", self.details, self.state)
        }
    }
}
