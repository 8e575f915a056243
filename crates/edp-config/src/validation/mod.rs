//! Configuration validation.
//!
//! Checks numeric ranges and the presence settings, collecting every
//! problem into a single `ConfigError`.


use crate::schema::EdpConfig;
use edp_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EdpConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_presence(&mut errors, config);
    validate_connection(&mut errors, config);
    validate_journal(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_presence(errors: &mut Vec<String>, config: &EdpConfig) {
    if config.presence.client_id <= 0 {
        errors.push(format!(
            "presence.client_id = {} must be positive",
            config.presence.client_id
        ));
    }

    // The social client rejects state lines shorter than two characters.
    let len = config.presence.idle_message.chars().count();
    if !(2..=128).contains(&len) {
        errors.push(format!(
            "presence.idle_message must be 2-128 characters (got {len})"
        ));
    }
}

fn validate_connection(errors: &mut Vec<String>, config: &EdpConfig) {
    validate_range(
        errors,
        "connection.retry_interval_ms",
        config.connection.retry_interval_ms,
        10,
        60_000,
    );
    validate_range(
        errors,
        "connection.pump_interval_ms",
        config.connection.pump_interval_ms,
        10,
        10_000,
    );
}

fn validate_journal(errors: &mut Vec<String>, config: &EdpConfig) {
    validate_range(
        errors,
        "journal.poll_interval_ms",
        config.journal.poll_interval_ms,
        50,
        60_000,
    );
}
