//! Wood strips: one piece of a single species glued edge-to-edge with others.

use super::color::HexColor;
use super::materials::WoodType;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Minimum practical cut width in inches.
pub const MIN_STRIP_WIDTH: f64 = 0.25;
/// Width given to strips appended when the strip count grows.
pub const NEW_STRIP_WIDTH: f64 = 1.0;
/// Upper bound on the number of strips in a design.
pub const MAX_STRIPS: usize = 20;

/// Stable identity for a strip, independent of its position.
///
/// Assigned once at creation and kept across reorders, so anything keyed
/// by strip (UI rows, selections) survives moves. A duplicate gets its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StripId(Uuid);

impl StripId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StripId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One strip of the design
#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    pub id: StripId,
    /// Wood species name
    pub wood: String,
    /// Width across the board in inches
    pub width: f64,
    /// Display colour
    pub color: HexColor,
}

impl Strip {
    /// Create a strip of a catalog species.
    pub fn new(wood: &WoodType, width: f64) -> Self {
        Self::with_color(wood.name.clone(), width, wood.color)
    }

    /// Create a strip with an explicit colour, used for species outside the catalog.
    pub fn with_color(wood: impl Into<String>, width: f64, color: HexColor) -> Self {
        Self {
            id: StripId::new(),
            wood: wood.into(),
            width,
            color,
        }
    }

    /// Value copy with a fresh identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: StripId::new(),
            ..self.clone()
        }
    }

    /// Switch species; colour follows the catalog entry.
    pub fn set_wood(&mut self, wood: &WoodType) {
        self.wood = wood.name.clone();
        self.color = wood.color;
    }
}

/// Clamp a width into `[MIN_STRIP_WIDTH, board_width]`.
pub fn clamp_width(width: f64, board_width: f64) -> f64 {
    width.clamp(MIN_STRIP_WIDTH, board_width.max(MIN_STRIP_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::materials::standard_library;

    #[test]
    fn test_new_strip_takes_catalog_color() {
        let walnut = standard_library().get("Walnut").unwrap();
        let strip = Strip::new(walnut, 1.5);
        assert_eq!(strip.wood, "Walnut");
        assert_eq!(strip.color, walnut.color);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let maple = standard_library().get("Maple").unwrap();
        let strip = Strip::new(maple, 2.0);
        let mut copy = strip.duplicate();
        assert_ne!(copy.id, strip.id);
        copy.width = 3.0;
        assert_eq!(strip.width, 2.0);
    }

    #[test]
    fn test_set_wood_updates_color() {
        let library = standard_library();
        let mut strip = Strip::new(library.get("Maple").unwrap(), 2.0);
        strip.set_wood(library.get("Cherry").unwrap());
        assert_eq!(strip.wood, "Cherry");
        assert_eq!(strip.color.to_string(), "#C95A49");
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(0.1, 12.0), MIN_STRIP_WIDTH);
        assert_eq!(clamp_width(14.0, 12.0), 12.0);
        assert_eq!(clamp_width(2.0, 12.0), 2.0);
    }
}
