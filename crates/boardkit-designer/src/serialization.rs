//! Serialization and deserialization for design files.
//!
//! A design file is a flat JSON object:
//!
//! ```json
//! {
//!   "design_name": "cutting_board_design",
//!   "board_width": 12.0,
//!   "board_length": 18.0,
//!   "strips": [{ "wood_type": "Maple", "width": 2.0, "color": "#F5DEB3" }]
//! }
//! ```
//!
//! Every key is optional on load. Decoding never touches the live design:
//! [`DesignFile::apply`] builds a new one that the caller swaps in.

use anyhow::{Context, Result};
use boardkit_core::data::materials::standard_library;
use boardkit_core::{Board, Design, DesignFileError, HexColor, Strip, MAX_STRIPS, MIN_STRIP_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name given to designs whose file does not carry one.
pub const DEFAULT_DESIGN_NAME: &str = "cutting_board_design";

/// A design name usable as a file name: path separators become `_`.
pub fn file_stem(design_name: &str) -> String {
    design_name.replace(['/', '\\'], "_")
}

/// Persisted design document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strips: Option<Vec<StripRecord>>,
}

/// One persisted strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripRecord {
    pub wood_type: String,
    pub width: f64,
    #[serde(default)]
    pub color: Option<String>,
}

/// A decoded design ready to replace the session's current one.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDesign {
    pub name: String,
    pub design: Design,
}

impl DesignFile {
    /// Snapshot a design for saving.
    pub fn from_design(name: &str, design: &Design) -> Self {
        Self {
            design_name: Some(name.to_string()),
            board_width: Some(design.board.width),
            board_length: Some(design.board.length),
            strips: Some(
                design
                    .strips()
                    .iter()
                    .map(|s| StripRecord {
                        wood_type: s.wood.clone(),
                        width: s.width,
                        color: Some(s.color.to_string()),
                    })
                    .collect(),
            ),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> std::result::Result<String, DesignFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a document. Anything other than a JSON object is a parse failure.
    pub fn from_json(content: &str) -> std::result::Result<Self, DesignFileError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(DesignFileError::Parse {
                reason: "top level is not a JSON object".to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Build the design this document describes on top of `current`.
    ///
    /// Missing strips keep the current sequence, missing or out-of-range
    /// board dimensions keep the current board. Strips wider than the board
    /// are clamped to it.
    pub fn apply(&self, current: &Design) -> std::result::Result<LoadedDesign, DesignFileError> {
        let board = self.board(current.board);

        let strips = match &self.strips {
            None => {
                tracing::debug!("Design file has no strips; keeping current sequence");
                current.strips().to_vec()
            }
            Some(records) => decode_strips(records)?,
        };

        let mut design = Design::with_strips(board, strips).map_err(|e| DesignFileError::Invalid {
            reason: e.to_string(),
        })?;
        design.set_board(board);

        let name = self
            .design_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_DESIGN_NAME)
            .to_string();

        Ok(LoadedDesign { name, design })
    }

    fn board(&self, current: Board) -> Board {
        if self.board_width.is_none() && self.board_length.is_none() {
            return current;
        }
        let width = self.board_width.unwrap_or(current.width);
        let length = self.board_length.unwrap_or(current.length);
        match Board::new(width, length).and_then(|b| b.with_thickness(current.thickness)) {
            Ok(board) => board,
            Err(e) => {
                tracing::warn!("Ignoring board size from design file: {}", e);
                current
            }
        }
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        let design = Self::from_json(&content).context("Failed to parse design file")?;

        Ok(design)
    }
}

fn decode_strips(records: &[StripRecord]) -> std::result::Result<Vec<Strip>, DesignFileError> {
    if records.is_empty() {
        return Err(DesignFileError::Invalid {
            reason: "design has no strips".to_string(),
        });
    }
    if records.len() > MAX_STRIPS {
        return Err(DesignFileError::Invalid {
            reason: format!("{} strips exceeds the limit of {}", records.len(), MAX_STRIPS),
        });
    }

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            if !record.width.is_finite() || record.width < MIN_STRIP_WIDTH {
                return Err(DesignFileError::Invalid {
                    reason: format!(
                        "strip {} has width {} (minimum {})",
                        i + 1,
                        record.width,
                        MIN_STRIP_WIDTH
                    ),
                });
            }
            Ok(match standard_library().get(&record.wood_type) {
                Some(wood) => Strip::new(wood, record.width),
                None => {
                    let color = record
                        .color
                        .as_deref()
                        .and_then(HexColor::parse)
                        .unwrap_or(HexColor::NEUTRAL);
                    tracing::warn!(
                        "Unknown wood type '{}' in design file; keeping colour {}",
                        record.wood_type,
                        color
                    );
                    Strip::with_color(record.wood_type.clone(), record.width, color)
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_keys() {
        let json = DesignFile::from_design("test", &Design::new()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["design_name"], "test");
        assert_eq!(value["board_width"], 12.0);
        assert_eq!(value["board_length"], 18.0);
        assert_eq!(value["strips"][1]["wood_type"], "Walnut");
        assert_eq!(value["strips"][1]["width"], 1.5);
        assert_eq!(value["strips"][1]["color"], "#5C4033");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_file_stem_strips_separators() {
        assert_eq!(file_stem("walnut stripes"), "walnut stripes");
        assert_eq!(file_stem("../x"), ".._x");
        assert_eq!(file_stem("a\\b/c"), "a_b_c");
    }

    #[test]
    fn test_non_object_is_parse_error() {
        for doc in ["[1, 2]", "\"text\"", "42", "{ not json"] {
            assert!(matches!(
                DesignFile::from_json(doc),
                Err(DesignFileError::Parse { .. })
            ));
        }
    }

    #[test]
    fn test_missing_name_uses_default() {
        let file = DesignFile::from_json(r#"{"strips": [{"wood_type": "Cherry", "width": 3}]}"#)
            .unwrap();
        let loaded = file.apply(&Design::new()).unwrap();
        assert_eq!(loaded.name, DEFAULT_DESIGN_NAME);
        assert_eq!(loaded.design.len(), 1);
        assert_eq!(loaded.design.strips()[0].color.to_string(), "#C95A49");
    }

    #[test]
    fn test_unknown_wood_keeps_colour() {
        let file = DesignFile::from_json(
            r##"{"strips": [
                {"wood_type": "Ash", "width": 2, "color": "#E5D3B3"},
                {"wood_type": "Teak", "width": 2, "color": "bogus"}
            ]}"##,
        )
        .unwrap();
        let loaded = file.apply(&Design::new()).unwrap();
        assert_eq!(loaded.design.strips()[0].wood, "Ash");
        assert_eq!(loaded.design.strips()[0].color.to_string(), "#E5D3B3");
        assert_eq!(loaded.design.strips()[1].color, HexColor::NEUTRAL);
    }

    #[test]
    fn test_width_rules() {
        let too_thin = DesignFile::from_json(r#"{"strips": [{"wood_type": "Maple", "width": 0.1}]}"#)
            .unwrap();
        assert!(matches!(
            too_thin.apply(&Design::new()),
            Err(DesignFileError::Invalid { .. })
        ));

        let too_wide = DesignFile::from_json(
            r#"{"board_width": 8, "board_length": 12, "strips": [{"wood_type": "Maple", "width": 10}]}"#,
        )
        .unwrap();
        let loaded = too_wide.apply(&Design::new()).unwrap();
        assert_eq!(loaded.design.board.width, 8.0);
        assert_eq!(loaded.design.strips()[0].width, 8.0);
    }

    #[test]
    fn test_out_of_range_board_is_ignored() {
        let file = DesignFile::from_json(r#"{"board_width": 100, "board_length": 12}"#).unwrap();
        let current = Design::new();
        let loaded = file.apply(&current).unwrap();
        assert_eq!(loaded.design.board, current.board);
        assert_eq!(loaded.design.strips(), current.strips());
    }
}
