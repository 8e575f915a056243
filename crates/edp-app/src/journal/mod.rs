//! Reading the game journal: locating it, following it, and deriving the
//! ambient fields the interpreter expects alongside each event.

pub mod ambient;
pub mod locate;
pub mod tail;

pub use ambient::AmbientTracker;
pub use tail::JournalTail;

use edp_common::JournalError;
use edp_journal::JournalEvent;
use tracing::warn;

/// Parse one journal line. Blank and malformed lines yield `None`.
pub fn parse_line(line: &str) -> Option<JournalEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match JournalEvent::from_line(line) {
        Ok(event) => Some(event),
        Err(e) => {
            warn!(error = %JournalError::from(e), "skipping journal line");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_event() {
        let event = parse_line(
            r#"{ "timestamp":"2024-05-01T12:00:00Z", "event":"Docked", "StarSystem":"Sol", "StationName":"Abraham Lincoln", "StationType":"Orbis" }"#,
        );
        assert!(matches!(event, Some(JournalEvent::Docked(_))));
    }

    #[test]
    fn unknown_event_is_kept() {
        let event = parse_line(r#"{ "event":"Music", "MusicTrack":"NoTrack" }"#);
        assert_eq!(event, Some(JournalEvent::Unknown));
    }

    #[test]
    fn blank_and_malformed_lines_are_skipped() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \r"), None);
        assert_eq!(parse_line("{ not json"), None);
    }
}
