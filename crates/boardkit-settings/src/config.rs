//! Configuration and settings management for BoardKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Display settings (units, grain texture, corner radius, 3D camera)
//! - Board defaults (preset, custom dimensions)
//! - Export settings (output directory, DPI)
//! - Recent design files

use crate::error::{ConfigError, SettingsError, SettingsResult};
use boardkit_core::data::board::{
    DEFAULT_THICKNESS, MAX_BOARD_LENGTH, MAX_BOARD_WIDTH, MAX_THICKNESS, MIN_BOARD_LENGTH,
    MIN_BOARD_WIDTH, MIN_THICKNESS,
};
use boardkit_core::{Board, BoardPreset, DesignError, LengthUnit};
use boardkit_designer::views::MAX_CORNER_RADIUS;
use boardkit_designer::{EXPORT_DPI, MAX_DPI, MIN_DPI, PREVIEW_DPI};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of recent files remembered.
pub const MAX_RECENT_FILES: usize = 10;


/// Display preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Unit lengths are shown and typed in
    pub unit: LengthUnit,
    /// Draw grain texture on the edge and end grain views
    pub show_grain: bool,
    /// Corner radius of the outer edge grain strips, in inches
    pub corner_radius: f64,
    /// Board thickness for the 3D view, in inches
    pub board_thickness: f64,
    /// 3D camera preset name (default, top, side, angled)
    pub camera: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Inches,
            show_grain: false,
            corner_radius: 0.0,
            board_thickness: DEFAULT_THICKNESS,
            camera: "default".to_string(),
        }
    }
}

/// Board defaults for new sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub preset: BoardPreset,
    /// Width used when the preset is Custom
    pub custom_width: f64,
    /// Length used when the preset is Custom
    pub custom_length: f64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        let (custom_width, custom_length) = BoardPreset::Custom.dimensions();
        Self {
            preset: BoardPreset::Standard,
            custom_width,
            custom_length,
        }
    }
}

impl BoardSettings {
    /// The board a new session starts with.
    pub fn board(&self, thickness: f64) -> Result<Board, DesignError> {
        let board = match self.preset {
            BoardPreset::Custom => Board::new(self.custom_width, self.custom_length)?,
            preset => Board::from_preset(preset),
        };
        board.with_thickness(thickness)
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory artifacts are written to
    pub output_dir: PathBuf,
    /// Resolution of exported PNG files
    pub dpi: u32,
    /// Resolution of PNG previews rendered from the shell
    pub preview_dpi: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dpi: EXPORT_DPI,
            preview_dpi: PREVIEW_DPI,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Display preferences
    pub display: DisplaySettings,
    /// Board defaults
    pub board: BoardSettings,
    /// Export settings
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config dir>/boardkit/config.toml`).
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("boardkit").join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform("no configuration directory".to_string()).into()
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating the parent directory.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());

        Ok(())
    }

    /// Load `path`, falling back to defaults.
    ///
    /// A missing file is normal on first run. A broken one is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}; using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let display = &self.display;
        if !(0.0..=MAX_CORNER_RADIUS).contains(&display.corner_radius) {
            return Err(SettingsError::invalid(
                "display.corner_radius",
                format!("must be between 0 and {}", MAX_CORNER_RADIUS),
            ));
        }
        if !(MIN_THICKNESS..=MAX_THICKNESS).contains(&display.board_thickness) {
            return Err(SettingsError::invalid(
                "display.board_thickness",
                format!("must be between {} and {}", MIN_THICKNESS, MAX_THICKNESS),
            ));
        }
        if display.camera.trim().is_empty() {
            return Err(SettingsError::invalid("display.camera", "must not be empty"));
        }

        if !(MIN_BOARD_WIDTH..=MAX_BOARD_WIDTH).contains(&self.board.custom_width) {
            return Err(SettingsError::invalid(
                "board.custom_width",
                format!("must be between {} and {}", MIN_BOARD_WIDTH, MAX_BOARD_WIDTH),
            ));
        }
        if !(MIN_BOARD_LENGTH..=MAX_BOARD_LENGTH).contains(&self.board.custom_length) {
            return Err(SettingsError::invalid(
                "board.custom_length",
                format!("must be between {} and {}", MIN_BOARD_LENGTH, MAX_BOARD_LENGTH),
            ));
        }

        for (key, dpi) in [
            ("export.dpi", self.export.dpi),
            ("export.preview_dpi", self.export.preview_dpi),
        ] {
            if !(MIN_DPI..=MAX_DPI).contains(&dpi) {
                return Err(SettingsError::invalid(
                    key,
                    format!("must be between {} and {}", MIN_DPI, MAX_DPI),
                ));
            }
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
