//! The four board views.
//!
//! Every view is a projection of [`boardkit_core::place_strips`]: each module
//! supplies an axis mapping and its own annotations, nothing recomputes
//! offsets. A design whose strips overflow the board renders nothing.

mod edge_grain;
mod end_grain;
mod grain;
mod schematic;
mod three_d;

use crate::scene::Scene;
use boardkit_core::{Design, LayoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use grain::grain_lines;
pub use schematic::cut_list;

/// Largest corner radius accepted for the edge grain view, inches.
pub const MAX_CORNER_RADIUS: f64 = 2.0;

/// Which view to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    EdgeGrain,
    EndGrain,
    ThreeD,
    Schematic,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::EdgeGrain,
        ViewKind::EndGrain,
        ViewKind::ThreeD,
        ViewKind::Schematic,
    ];

    /// File name suffix used for exported artifacts.
    pub fn artifact_suffix(self) -> &'static str {
        match self {
            Self::EdgeGrain => "edge_grain",
            Self::EndGrain => "end_grain",
            Self::ThreeD => "3d",
            Self::Schematic => "schematic",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeGrain => write!(f, "edge grain"),
            Self::EndGrain => write!(f, "end grain"),
            Self::ThreeD => write!(f, "3d"),
            Self::Schematic => write!(f, "schematic"),
        }
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "edge" | "edge_grain" => Ok(Self::EdgeGrain),
            "end" | "end_grain" => Ok(Self::EndGrain),
            "3d" | "three_d" => Ok(Self::ThreeD),
            "schematic" | "cut" => Ok(Self::Schematic),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}

/// Camera presets for the 3D view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraAngle {
    #[default]
    Default,
    Top,
    Side,
    Angled,
}

impl CameraAngle {
    pub const ALL: [CameraAngle; 4] = [
        CameraAngle::Default,
        CameraAngle::Top,
        CameraAngle::Side,
        CameraAngle::Angled,
    ];

    /// Elevation above the board plane, degrees.
    pub fn elevation(self) -> f64 {
        match self {
            Self::Default => 20.0,
            Self::Top => 90.0,
            Self::Side => 0.0,
            Self::Angled => 30.0,
        }
    }

    /// Rotation around the vertical axis, degrees.
    pub fn azimuth(self) -> f64 {
        match self {
            Self::Default => 45.0,
            Self::Top | Self::Side => 0.0,
            Self::Angled => 60.0,
        }
    }
}

impl fmt::Display for CameraAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Top => "top",
            Self::Side => "side",
            Self::Angled => "angled",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CameraAngle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "top" => Ok(Self::Top),
            "side" => Ok(Self::Side),
            "angled" => Ok(Self::Angled),
            _ => Err(format!("Unknown camera angle: {}", s)),
        }
    }
}

/// Presentation options shared by the views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Draw grain texture lines on the edge and end grain views
    pub show_grain: bool,
    /// Rounded outer corners on the edge grain view, inches
    pub corner_radius: f64,
    pub camera: CameraAngle,
}

impl ViewOptions {
    /// Return a copy with the radius clamped into `[0, MAX_CORNER_RADIUS]`.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = if radius.is_finite() {
            radius.clamp(0.0, MAX_CORNER_RADIUS)
        } else {
            0.0
        };
        self
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_grain: false,
            corner_radius: 0.0,
            camera: CameraAngle::Default,
        }
    }
}

/// Project the design into a scene for `kind`.
///
/// Fails with [`LayoutError::Overflow`] when the strips do not fit the board.
pub fn render_view(
    design: &Design,
    kind: ViewKind,
    options: &ViewOptions,
) -> Result<Scene, LayoutError> {
    design.fit().into_result()?;
    let placements = design.placements();
    let scene = match kind {
        ViewKind::EdgeGrain => edge_grain::build(&design.board, &placements, options),
        ViewKind::EndGrain => end_grain::build(&design.board, &placements, options),
        ViewKind::ThreeD => three_d::build(&design.board, &placements, options.camera),
        ViewKind::Schematic => schematic::build(&design.board, &placements),
    };
    tracing::debug!(
        "Rendered {} view: {} primitives",
        kind,
        scene.primitives.len()
    );
    Ok(scene)
}
