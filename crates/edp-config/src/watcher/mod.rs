//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file, coalescing bursts of
//! change events so an editor's write-then-rename produces one reload.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
