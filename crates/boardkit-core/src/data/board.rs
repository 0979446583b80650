//! Board envelope and size presets.

use crate::error::DesignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_BOARD_WIDTH: f64 = 4.0;
pub const MAX_BOARD_WIDTH: f64 = 30.0;
pub const MIN_BOARD_LENGTH: f64 = 6.0;
pub const MAX_BOARD_LENGTH: f64 = 36.0;
pub const MIN_THICKNESS: f64 = 0.5;
pub const MAX_THICKNESS: f64 = 3.0;
pub const DEFAULT_THICKNESS: f64 = 1.5;

/// The envelope strips are laid into. All values in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f64,
    pub length: f64,
    /// Only used by the 3D view; not part of the layout constraints.
    pub thickness: f64,
}

impl Board {
    /// Build a board, rejecting dimensions outside the supported ranges.
    pub fn new(width: f64, length: f64) -> Result<Self, DesignError> {
        check_range("width", width, MIN_BOARD_WIDTH, MAX_BOARD_WIDTH)?;
        check_range("length", length, MIN_BOARD_LENGTH, MAX_BOARD_LENGTH)?;
        Ok(Self {
            width,
            length,
            thickness: DEFAULT_THICKNESS,
        })
    }

    pub fn from_preset(preset: BoardPreset) -> Self {
        let (width, length) = preset.dimensions();
        Self {
            width,
            length,
            thickness: DEFAULT_THICKNESS,
        }
    }

    /// Return a copy with a different thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Result<Self, DesignError> {
        check_range("thickness", thickness, MIN_THICKNESS, MAX_THICKNESS)?;
        self.thickness = thickness;
        Ok(self)
    }

    /// The preset these dimensions correspond to, if any.
    pub fn preset(&self) -> BoardPreset {
        BoardPreset::FIXED
            .into_iter()
            .find(|p| p.dimensions() == (self.width, self.length))
            .unwrap_or(BoardPreset::Custom)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_preset(BoardPreset::Standard)
    }
}

fn check_range(dimension: &'static str, value: f64, min: f64, max: f64) -> Result<(), DesignError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DesignError::BoardOutOfRange {
            dimension,
            value,
            min,
            max,
        })
    }
}

/// Board size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardPreset {
    /// 8" x 12"
    Small,
    /// 10" x 14"
    Medium,
    /// 12" x 18"
    #[default]
    Standard,
    /// 14" x 20"
    Large,
    /// 16" x 24"
    ExtraLarge,
    /// User supplied width and length
    Custom,
}

impl BoardPreset {
    /// Presets with fixed dimensions, in selector order.
    pub const FIXED: [BoardPreset; 5] = [
        BoardPreset::Small,
        BoardPreset::Medium,
        BoardPreset::Standard,
        BoardPreset::Large,
        BoardPreset::ExtraLarge,
    ];

    /// (width, length) in inches. Custom reports the default custom size.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Small => (8.0, 12.0),
            Self::Medium => (10.0, 14.0),
            Self::Standard | Self::Custom => (12.0, 18.0),
            Self::Large => (14.0, 20.0),
            Self::ExtraLarge => (16.0, 24.0),
        }
    }
}

impl fmt::Display for BoardPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom => write!(f, "Custom"),
            preset => {
                let name = match preset {
                    Self::Small => "Small",
                    Self::Medium => "Medium",
                    Self::Standard => "Standard",
                    Self::Large => "Large",
                    _ => "Extra Large",
                };
                let (w, l) = preset.dimensions();
                write!(f, "{} ({}\" × {}\")", name, w, l)
            }
        }
    }
}

impl FromStr for BoardPreset {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "standard" => Ok(Self::Standard),
            "large" => Ok(Self::Large),
            "extra_large" | "xl" => Ok(Self::ExtraLarge),
            "custom" => Ok(Self::Custom),
            _ => Err(DesignError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}
