//! Display colours for wood strips.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Relative luminance below which labels switch to white text.
const DARK_LUMINANCE: f64 = 0.30;

/// An opaque sRGB colour, persisted as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: HexColor = HexColor::new(0, 0, 0);
    pub const WHITE: HexColor = HexColor::new(255, 255, 255);
    /// Fallback for strips whose stored colour cannot be recovered.
    pub const NEUTRAL: HexColor = HexColor::new(0xA0, 0xA0, 0xA0);

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Rec. 709 luma on the 0..1 scale.
    pub fn luminance(&self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }

    pub fn is_dark(&self) -> bool {
        self.luminance() < DARK_LUMINANCE
    }

    /// Text colour that stays readable on top of this colour.
    pub fn label_color(&self) -> HexColor {
        if self.is_dark() {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }

    /// Scale each channel by `factor` (0..1 darkens), used for shaded faces.
    pub fn shade(&self, factor: f64) -> HexColor {
        let scale = |c: u8| ((c as f64 * factor).round().clamp(0.0, 255.0)) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid colour: {}", s))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
