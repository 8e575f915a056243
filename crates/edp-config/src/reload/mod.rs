//! Live config reload manager.
//!
//! Combines the file watcher with config loading so the rest of the
//! process sees a fresh [`EdpConfig`](crate::EdpConfig) whenever the file
//! changes on disk.

mod manager;


pub use manager::ReloadManager;
