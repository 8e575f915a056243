//! Finding the journal directory and the newest journal file in it.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use edp_common::JournalError;
use edp_config::schema::JournalSettings;

const JOURNAL_PREFIX: &str = "Journal.";
const JOURNAL_SUFFIX: &str = ".log";

/// The game's default journal location under the user's home directory.
pub fn default_journal_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join("Saved Games")
            .join("Frontier Developments")
            .join("Elite Dangerous")
    })
}

/// Pick the journal directory: command line, then config, then the
/// default location. The result must exist.
pub fn resolve_dir(
    override_dir: Option<&Path>,
    settings: &JournalSettings,
) -> Result<PathBuf, JournalError> {
    let dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| settings.directory.clone())
        .or_else(default_journal_dir)
        .ok_or_else(|| JournalError::DirectoryNotFound(PathBuf::new()))?;

    if !dir.is_dir() {
        return Err(JournalError::DirectoryNotFound(dir));
    }
    Ok(dir)
}

pub fn is_journal_file(name: &str) -> bool {
    name.starts_with(JOURNAL_PREFIX) && name.ends_with(JOURNAL_SUFFIX)
}

/// The most recently modified `Journal.*.log` in `dir`, ties broken by
/// file name.
pub fn newest_journal(dir: &Path) -> Result<Option<PathBuf>, JournalError> {
    let mut newest: Option<(SystemTime, String, PathBuf)> = None;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !is_journal_file(&name) || !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;

        let replace = match &newest {
            Some((best_time, best_name, _)) => (modified, &name) > (*best_time, best_name),
            None => true,
        };
        if replace {
            newest = Some((modified, name, entry.path()));
        }
    }

    Ok(newest.map(|(_, _, path)| path))
}
