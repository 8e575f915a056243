use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures surfaced by a presence transport.
///
/// None of these are fatal: `Unavailable` is retried by the connection
/// supervisor, `CallbackPump` triggers a full reconnect, and `Rejected`
/// is logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("presence transport unavailable: {0}")]
    Unavailable(String),

    #[error("callback pump failed: {0}")]
    CallbackPump(String),

    #[error("activity update rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("journal directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("journal read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("journal parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum EdpError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Journal(#[from] JournalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("connection.retry_interval_ms".into());
        assert_eq!(
            err.to_string(),
            "config validation error: connection.retry_interval_ms"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn transport_error_display() {
        let err = TransportError::Unavailable("discord not running".into());
        assert_eq!(
            err.to_string(),
            "presence transport unavailable: discord not running"
        );

        let err = TransportError::CallbackPump("pipe closed".into());
        assert_eq!(err.to_string(), "callback pump failed: pipe closed");

        let err = TransportError::Rejected("transaction aborted".into());
        assert_eq!(
            err.to_string(),
            "activity update rejected: transaction aborted"
        );
    }

    #[test]
    fn journal_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: JournalError = parse_err.into();
        assert!(matches!(err, JournalError::Parse(_)));
        assert!(err.to_string().starts_with("journal parse error"));
    }

    #[test]
    fn edp_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let edp_err: EdpError = config_err.into();
        assert!(matches!(edp_err, EdpError::Config(_)));
        assert!(edp_err.to_string().contains("bad toml"));
    }

    #[test]
    fn edp_error_from_transport() {
        let transport_err = TransportError::CallbackPump("closed".into());
        let edp_err: EdpError = transport_err.into();
        assert!(matches!(edp_err, EdpError::Transport(_)));
        assert!(edp_err.to_string().contains("closed"));
    }

    #[test]
    fn edp_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let edp_err: EdpError = io_err.into();
        assert!(matches!(edp_err, EdpError::Io(_)));
        assert!(edp_err.to_string().contains("file missing"));
    }
}
