pub mod errors;

pub use errors::{ConfigError, EdpError, JournalError, TransportError};

pub type Result<T> = std::result::Result<T, EdpError>;
