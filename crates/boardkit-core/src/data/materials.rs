//! Wood catalog
//!
//! This module provides:
//! - The fixed catalog of wood species a strip can be cut from
//! - Display colours for each species
//! - Case-insensitive lookup by name

use super::color::HexColor;
use serde::{Deserialize, Serialize};

/// Name of the species used for new strips.
pub const DEFAULT_WOOD: &str = "Maple";

/// A wood species available for strips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoodType {
    /// Display name, also the persisted `wood_type`
    pub name: String,
    /// Display colour used by every view
    pub color: HexColor,
}

impl WoodType {
    pub fn new(name: impl Into<String>, color: HexColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl std::fmt::Display for WoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Wood library - ordered collection of species
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WoodLibrary {
    woods: Vec<WoodType>,
}

impl WoodLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self { woods: Vec::new() }
    }

    /// Add a species, replacing any existing entry with the same name
    pub fn add_wood(&mut self, wood: WoodType) {
        match self.position(&wood.name) {
            Some(idx) => self.woods[idx] = wood,
            None => self.woods.push(wood),
        }
    }

    /// Get a species by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&WoodType> {
        self.position(name).map(|idx| &self.woods[idx])
    }

    /// Colour for a species name, if it is in the catalog
    pub fn color_of(&self, name: &str) -> Option<HexColor> {
        self.get(name).map(|w| w.color)
    }

    /// All species in catalog order
    pub fn woods(&self) -> &[WoodType] {
        &self.woods
    }

    /// All names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.woods.iter().map(|w| w.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.woods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.woods.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.woods
            .iter()
            .position(|w| w.name.eq_ignore_ascii_case(name))
    }
}

impl Default for WoodLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the standard wood catalog
pub fn init_standard_library() -> WoodLibrary {
    const CATALOG: [(&str, HexColor); 12] = [
        ("Maple", HexColor::new(0xF5, 0xDE, 0xB3)),
        ("Walnut", HexColor::new(0x5C, 0x40, 0x33)),
        ("Purpleheart", HexColor::new(0x7D, 0x1B, 0x7E)),
        ("Cherry", HexColor::new(0xC9, 0x5A, 0x49)),
        ("Padauk", HexColor::new(0xD2, 0x69, 0x1E)),
        ("Wenge", HexColor::new(0x3E, 0x27, 0x23)),
        ("Yellowheart", HexColor::new(0xFF, 0xD7, 0x00)),
        ("Mahogany", HexColor::new(0xC0, 0x40, 0x00)),
        ("Zebrawood", HexColor::new(0xE8, 0xD4, 0xA0)),
        ("Bloodwood", HexColor::new(0x8B, 0x00, 0x00)),
        ("White Oak", HexColor::new(0xD2, 0xB4, 0x8C)),
        ("Red Oak", HexColor::new(0xC1, 0x9A, 0x6B)),
    ];

    let mut library = WoodLibrary::new();
    for (name, color) in CATALOG {
        library.add_wood(WoodType::new(name, color));
    }
    library
}

/// Shared standard catalog
pub fn standard_library() -> &'static WoodLibrary {
    static LIBRARY: std::sync::OnceLock<WoodLibrary> = std::sync::OnceLock::new();
    LIBRARY.get_or_init(init_standard_library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_size() {
        let library = init_standard_library();
        assert_eq!(library.len(), 12);
        assert_eq!(library.names()[0], "Maple");
        assert_eq!(library.names()[11], "Red Oak");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let library = standard_library();
        let walnut = library.get("walnut").unwrap();
        assert_eq!(walnut.name, "Walnut");
        assert_eq!(walnut.color.to_string(), "#5C4033");
        assert!(library.get("  white oak ").is_some());
        assert!(library.get("Balsa").is_none());
    }

    #[test]
    fn test_dark_woods_get_white_labels() {
        let library = standard_library();
        let dark: Vec<&str> = library
            .woods()
            .iter()
            .filter(|w| w.color.is_dark())
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(dark, vec!["Walnut", "Purpleheart", "Wenge", "Bloodwood"]);
    }

    #[test]
    fn test_add_wood_replaces_existing() {
        let mut library = WoodLibrary::new();
        library.add_wood(WoodType::new("Ash", HexColor::WHITE));
        library.add_wood(WoodType::new("ash", HexColor::BLACK));
        assert_eq!(library.len(), 1);
        assert_eq!(library.color_of("ASH"), Some(HexColor::BLACK));
    }
}
