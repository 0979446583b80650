//! Designer state manager.
//! Owns the one design of an interactive session together with its
//! presentation settings, and is threaded explicitly through every command.
//!
//! This module is split into submodules:
//! - `strips`: Strip and board editing
//! - `file_io`: Save/load/export operations

mod file_io;
mod strips;

use crate::scene::Scene;
use crate::summary::Summary;
use crate::views::{render_view, CameraAngle, ViewKind, ViewOptions};
use boardkit_core::{Design, LayoutError, LengthUnit};
use std::path::PathBuf;

pub use crate::serialization::DEFAULT_DESIGN_NAME;

/// Designer state for one session
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) design: Design,
    pub design_name: String,
    pub unit: LengthUnit,
    pub view_options: ViewOptions,
    pub active_view: ViewKind,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a new designer state with the default three-strip design.
    pub fn new() -> Self {
        Self {
            design: Design::new(),
            design_name: DEFAULT_DESIGN_NAME.to_string(),
            unit: LengthUnit::default(),
            view_options: ViewOptions::default(),
            active_view: ViewKind::default(),
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn design(&self) -> &Design {
        &self.design
    }

    /// Fit summary in the current display unit.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.design, self.unit)
    }

    /// Render `view` with the current options.
    pub fn render_scene(&self, view: ViewKind) -> Result<Scene, LayoutError> {
        render_view(&self.design, view, &self.view_options)
    }

    /// Render the active view.
    pub fn render_active(&self) -> Result<Scene, LayoutError> {
        self.render_scene(self.active_view)
    }

    /// Sets the display unit. Stored lengths are unaffected.
    pub fn set_unit(&mut self, unit: LengthUnit) {
        tracing::debug!("Display unit: {}", unit);
        self.unit = unit;
    }

    pub fn set_active_view(&mut self, view: ViewKind) {
        tracing::debug!("Active view: {}", view);
        self.active_view = view;
    }

    pub fn set_show_grain(&mut self, show: bool) {
        self.view_options.show_grain = show;
    }

    /// Sets the edge grain corner radius, clamped to the supported range.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.view_options = self.view_options.with_corner_radius(radius);
    }

    pub fn set_camera(&mut self, camera: CameraAngle) {
        self.view_options.camera = camera;
    }

    /// Renames the design. Blank names fall back to the default.
    pub fn set_design_name(&mut self, name: &str) {
        let name = name.trim();
        self.design_name = if name.is_empty() {
            DEFAULT_DESIGN_NAME.to_string()
        } else {
            name.to_string()
        };
        self.mark_modified();
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
