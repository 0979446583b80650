//! BoardKit Settings Crate
//!
//! Handles user configuration and its persistence: default display units,
//! board preset, view options, export settings and recent files.

pub mod config;
pub mod error;

pub use config::{BoardSettings, Config, DisplaySettings, ExportSettings, MAX_RECENT_FILES};
pub use error::{ConfigError, SettingsError, SettingsResult};
