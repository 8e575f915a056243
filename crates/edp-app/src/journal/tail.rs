//! Following the newest journal file as the game appends to it.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use edp_common::JournalError;
use tracing::{info, warn};

use super::locate::newest_journal;

/// Incremental reader over the newest journal in a directory.
///
/// Each [`poll`](Self::poll) returns the complete lines appended since the
/// last one. A trailing line without a newline is held back until it is
/// finished. When a newer journal appears, the rest of the old one is
/// drained and reading continues from the start of the new file.
pub struct JournalTail {
    dir: PathBuf,
    current: Option<PathBuf>,
    offset: u64,
    pending: Vec<u8>,
}

impl JournalTail {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            current: None,
            offset: 0,
            pending: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn poll(&mut self) -> Result<Vec<String>, JournalError> {
        let Some(newest) = newest_journal(&self.dir)? else {
            return Ok(Vec::new());
        };

        if self.current.as_ref() == Some(&newest) {
            return self.read_new();
        }

        let mut lines = if self.current.is_some() {
            self.read_new().unwrap_or_else(|e| {
                warn!(error = %e, "could not drain previous journal");
                Vec::new()
            })
        } else {
            Vec::new()
        };

        info!(path = %newest.display(), "following journal");
        self.current = Some(newest);
        self.offset = 0;
        self.pending.clear();

        lines.extend(self.read_new()?);
        Ok(lines)
    }

    fn read_new(&mut self) -> Result<Vec<String>, JournalError> {
        let Some(path) = &self.current else {
            return Ok(Vec::new());
        };

        let mut file = File::open(path)?;
        if file.metadata()?.len() < self.offset {
            // truncated or replaced in place
            self.offset = 0;
            self.pending.clear();
        }
        file.seek(SeekFrom::Start(self.offset))?;

        let mut buf = Vec::new();
        let read = file.read_to_end(&mut buf)?;
        self.offset += read as u64;
        self.pending.extend_from_slice(&buf);

        let mut lines = Vec::new();
        while let Some(end) = self.pending.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=end).collect();
            let text = String::from_utf8_lossy(&raw[..end]);
            let text = text.strip_suffix('\r').unwrap_or(&text);
            if !text.trim().is_empty() {
                lines.push(text.to_string());
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::OpenOptions;
    use std::io::Write;

    use super::*;

    fn append(path: &Path, text: &str) {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .unwrap();
        file.write_all(text.as_bytes()).unwrap();
    }

    #[test]
    fn empty_dir_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut tail = JournalTail::new(dir.path().to_path_buf());
        assert!(tail.poll().unwrap().is_empty());
        assert!(tail.current().is_none());
    }

    #[test]
    fn returns_only_new_complete_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Journal.2024-05-01T120000.01.log");
        append(&path, "{\"event\":\"Fileheader\"}\r\n{\"event\":\"Shutdown\"");

        let mut tail = JournalTail::new(dir.path().to_path_buf());
        assert_eq!(tail.poll().unwrap(), vec!["{\"event\":\"Fileheader\"}"]);
        assert_eq!(tail.current(), Some(path.as_path()));

        assert!(tail.poll().unwrap().is_empty());

        append(&path, "}\n\n{\"event\":\"Music\"}\n");
        assert_eq!(
            tail.poll().unwrap(),
            vec!["{\"event\":\"Shutdown\"}", "{\"event\":\"Music\"}"]
        );
    }

    #[test]
    fn switches_to_newer_journal() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("Journal.2024-05-01T120000.01.log");
        append(&old, "{\"event\":\"Fileheader\"}\n");

        let mut tail = JournalTail::new(dir.path().to_path_buf());
        assert_eq!(tail.poll().unwrap().len(), 1);

        append(&old, "{\"event\":\"Shutdown\"}\n");
        let new = dir.path().join("Journal.2024-05-02T090000.01.log");
        append(&new, "{\"event\":\"Fileheader\",\"part\":1}\n");

        let lines = tail.poll().unwrap();
        assert_eq!(
            lines,
            vec!["{\"event\":\"Shutdown\"}", "{\"event\":\"Fileheader\",\"part\":1}"]
        );
        assert_eq!(tail.current(), Some(new.as_path()));
    }

    #[test]
    fn rereads_truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Journal.2024-05-01T120000.01.log");
        append(&path, "{\"event\":\"Fileheader\"}\n{\"event\":\"Music\"}\n");

        let mut tail = JournalTail::new(dir.path().to_path_buf());
        assert_eq!(tail.poll().unwrap().len(), 2);

        std::fs::write(&path, "{\"event\":\"Shutdown\"}\n").unwrap();
        assert_eq!(tail.poll().unwrap(), vec!["{\"event\":\"Shutdown\"}"]);
    }
}
