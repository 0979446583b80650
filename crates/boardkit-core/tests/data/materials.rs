use boardkit_core::data::materials::*;
use boardkit_core::HexColor;

#[test]
fn test_standard_library_initialization() {
    let library = init_standard_library();
    assert_eq!(library.len(), 12);
    for name in ["Maple", "Walnut", "Cherry", "Red Oak", "White Oak", "Bloodwood"] {
        assert!(library.get(name).is_some(), "missing {name}");
    }
}

#[test]
fn test_catalog_colors_match_persisted_format() {
    let library = standard_library();
    assert_eq!(library.color_of("Maple").unwrap().to_string(), "#F5DEB3");
    assert_eq!(library.color_of("Yellowheart").unwrap().to_string(), "#FFD700");
    assert_eq!(library.color_of("Zebrawood").unwrap().to_string(), "#E8D4A0");
}

#[test]
fn test_custom_library() {
    let mut library = WoodLibrary::new();
    assert!(library.is_empty());
    library.add_wood(WoodType::new("Ash", HexColor::new(0xE5, 0xD3, 0xB3)));
    assert_eq!(library.names(), vec!["Ash"]);
    assert_eq!(DEFAULT_WOOD, "Maple");
}
