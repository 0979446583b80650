//! # BoardKit
//!
//! Design edge-grain and end-grain cutting boards from strips of wood.
//!
//! ## Architecture
//!
//! BoardKit is organized as a workspace with multiple crates:
//!
//! 1. **boardkit-core** - Units, wood catalog, board/strip/design model, layout
//! 2. **boardkit-designer** - Session state, views, SVG/PNG rendering, design files
//! 3. **boardkit-settings** - User configuration persisted as TOML or JSON
//! 4. **boardkit** - Command-line front end and interactive shell
//!
//! ## Features
//!
//! - **Layout**: strips laid edge to edge with live fit checking
//! - **Views**: edge grain, end grain, 3D and a dimensioned cut schematic
//! - **Units**: inches, centimeters and millimeters for display and input
//! - **Persistence**: flat JSON design files

pub mod shell;

pub use boardkit_core::{
    format_dimension, parse_length, Board, BoardPreset, Design, DesignError, DesignFileError,
    LayoutError, LengthUnit, Strip, StripId,
};
pub use boardkit_designer::{
    CameraAngle, DesignerState, ExportError, OutputFormat, Summary, ViewKind, ViewOptions,
};
pub use boardkit_settings::Config;

use anyhow::Context;
use std::str::FromStr;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so shell output on stdout stays clean
/// - RUST_LOG environment variable support (default `warn`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Build a fresh session from the user's configuration.
///
/// Settings that cannot be applied are logged and left at their defaults.
pub fn session_from_config(config: &Config) -> DesignerState {
    let mut state = DesignerState::new();
    let display = &config.display;

    state.set_unit(display.unit);
    state.set_show_grain(display.show_grain);
    state.set_corner_radius(display.corner_radius);
    match CameraAngle::from_str(&display.camera) {
        Ok(camera) => state.set_camera(camera),
        Err(e) => tracing::warn!("{}; using the default camera", e),
    }

    match config.board.board(display.board_thickness) {
        Ok(board) => {
            let applied = state
                .set_board_size(board.width, board.length)
                .and_then(|_| state.set_thickness(board.thickness));
            if let Err(e) = applied {
                tracing::warn!("Ignoring configured board: {}", e);
            }
        }
        Err(e) => tracing::warn!("Ignoring configured board: {}", e),
    }

    state.is_modified = false;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_default_config() {
        let state = session_from_config(&Config::new());
        assert_eq!(state.design().board, Board::default());
        assert_eq!(state.view_options, ViewOptions::default());
        assert!(!state.is_modified);
    }

    #[test]
    fn test_session_from_custom_config() {
        let mut config = Config::new();
        config.display.unit = LengthUnit::Centimeters;
        config.display.camera = "top".to_string();
        config.display.board_thickness = 1.0;
        config.board.preset = BoardPreset::Small;

        let state = session_from_config(&config);
        assert_eq!(state.unit, LengthUnit::Centimeters);
        assert_eq!(state.view_options.camera, CameraAngle::Top);
        let board = state.design().board;
        assert_eq!((board.width, board.length, board.thickness), (8.0, 12.0, 1.0));
    }

    #[test]
    fn test_unknown_camera_falls_back() {
        let mut config = Config::new();
        config.display.camera = "fisheye".to_string();
        let state = session_from_config(&config);
        assert_eq!(state.view_options.camera, CameraAngle::Default);
    }
}
