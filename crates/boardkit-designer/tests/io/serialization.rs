use boardkit_core::{Design, DesignFileError};
use boardkit_designer::designer_state::DesignerState;
use boardkit_designer::serialization::{DesignFile, DEFAULT_DESIGN_NAME};
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("board.json");

    let mut state = DesignerState::new();
    state.set_design_name("walnut stripes");
    state.set_board_size(10.0, 14.0).unwrap();
    state.set_strip_wood(0, "Padauk").unwrap();
    state.duplicate_strip(1).unwrap();
    state.save_to_file(&file_path).unwrap();
    assert!(!state.is_modified);

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&file_path).unwrap();
    assert_eq!(loaded.design_name, "walnut stripes");
    assert_eq!(loaded.design().board.width, 10.0);
    assert_eq!(loaded.design().board.length, 14.0);
    let woods: Vec<&str> = loaded.design().strips().iter().map(|s| s.wood.as_str()).collect();
    assert_eq!(woods, vec!["Padauk", "Walnut", "Walnut", "Maple"]);
    assert_eq!(loaded.current_file_path.as_deref(), Some(file_path.as_path()));
}

#[test]
fn test_file_is_flat_document() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("flat.json");
    DesignFile::from_design("flat", &Design::new())
        .save_to_file(&file_path)
        .unwrap();

    let content = std::fs::read_to_string(&file_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let mut keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["board_length", "board_width", "design_name", "strips"]);
    assert_eq!(
        value["strips"][0],
        serde_json::json!({"wood_type": "Maple", "width": 2.0, "color": "#F5DEB3"})
    );
}

#[test]
fn test_load_without_strips_keeps_current_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("partial.json");
    std::fs::write(&file_path, r#"{"board_width": 14, "board_length": 20}"#).unwrap();

    let mut state = DesignerState::new();
    state.apply_wood_to_all("Wenge").unwrap();
    let before = state.design().strips().to_vec();

    state.load_from_file(&file_path).unwrap();
    assert_eq!(state.design().strips(), before.as_slice());
    assert_eq!(state.design().board.width, 14.0);
    assert_eq!(state.design_name, DEFAULT_DESIGN_NAME);
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("broken.json");
    std::fs::write(&file_path, "{\"strips\": [").unwrap();

    let mut state = DesignerState::new();
    let before = state.design().clone();
    let err = state.load_from_file(&file_path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DesignFileError>(),
        Some(DesignFileError::Parse { .. })
    ));
    assert_eq!(state.design(), &before);
    assert!(state.current_file_path.is_none());
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    assert!(state.load_from_file(temp_dir.path().join("nope.json")).is_err());
}

#[test]
fn test_upload_round_trip() {
    let mut state = DesignerState::new();
    state.set_strip_width(1, 0.75).unwrap();
    let json = state.to_json().unwrap();

    let mut other = DesignerState::new();
    other.load_from_str(&json).unwrap();
    assert_eq!(other.design().strips()[1].width, 0.75);
    assert_eq!(other.design_file_name(), "cutting_board_design.json");
}
