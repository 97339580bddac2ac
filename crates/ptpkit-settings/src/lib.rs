//! PTPKit Settings Crate
//!
//! Handles the per-project configuration record (`config.json`) and the
//! application-wide key-value settings store that remembers the last project,
//! the last opened path and the recent-projects list.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{ConfigPatch, ProjectConfig};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{keys, JsonSettingsStore, MemorySettingsStore, SettingsStore};
