use boardkit_core::{BoardPreset, DesignError, LengthUnit, MAX_STRIPS};
use boardkit_designer::designer_state::DesignerState;
use boardkit_designer::{CameraAngle, ViewKind, DEFAULT_DESIGN_NAME};

fn woods(state: &DesignerState) -> Vec<String> {
    state.design().strips().iter().map(|s| s.wood.clone()).collect()
}

#[test]
fn test_designer_state_new() {
    let state = DesignerState::new();
    assert_eq!(woods(&state), vec!["Maple", "Walnut", "Maple"]);
    assert_eq!(state.design_name, DEFAULT_DESIGN_NAME);
    assert_eq!(state.active_view, ViewKind::EdgeGrain);
    assert!(!state.is_modified);
}

#[test]
fn test_strip_editing_marks_modified() {
    let mut state = DesignerState::new();
    state.add_strip().unwrap();
    assert!(state.is_modified);
    assert_eq!(state.design().len(), 4);
    assert_eq!(state.design().strips()[3].width, 1.0);

    state.set_strip_count(2).unwrap();
    assert_eq!(woods(&state), vec!["Maple", "Walnut"]);
}

#[test]
fn test_boundary_moves_do_not_mark_modified() {
    let mut state = DesignerState::new();
    assert!(!state.move_strip_up(0).unwrap());
    assert!(!state.move_strip_down(2).unwrap());
    assert!(!state.is_modified);
    assert!(state.move_strip_down(0).unwrap());
    assert_eq!(woods(&state), vec!["Walnut", "Maple", "Maple"]);
    assert!(state.is_modified);
}

#[test]
fn test_strip_identity_survives_moves() {
    let mut state = DesignerState::new();
    let copy = state.duplicate_strip(0).unwrap();
    assert_eq!(state.design().index_of(copy), Some(1));
    state.move_strip_down(1).unwrap();
    state.move_strip_down(2).unwrap();
    assert_eq!(state.design().index_of(copy), Some(3));
}

#[test]
fn test_remove_down_to_one() {
    let mut state = DesignerState::new();
    state.remove_strip(0).unwrap();
    state.remove_strip(0).unwrap();
    assert_eq!(state.remove_strip(0), Err(DesignError::LastStrip));
    assert_eq!(woods(&state), vec!["Maple"]);
}

#[test]
fn test_strip_limit() {
    let mut state = DesignerState::new();
    state.set_strip_count(MAX_STRIPS).unwrap();
    assert!(matches!(
        state.add_strip(),
        Err(DesignError::StripCount { .. })
    ));
}

#[test]
fn test_board_presets_keep_thickness() {
    let mut state = DesignerState::new();
    state.set_thickness(0.75).unwrap();
    state.set_board_preset(BoardPreset::Small);
    let board = state.design().board;
    assert_eq!((board.width, board.length, board.thickness), (8.0, 12.0, 0.75));
    assert_eq!(board.preset(), BoardPreset::Small);

    assert!(state.set_board_size(31.0, 12.0).is_err());
    assert!(state.set_thickness(3.5).is_err());
}

#[test]
fn test_shrinking_board_clamps_and_reports_overflow() {
    let mut state = DesignerState::new();
    state.apply_width_to_all(6.0).unwrap();
    state.set_board_size(4.0, 12.0).unwrap();
    assert!(state.design().strips().iter().all(|s| s.width == 4.0));
    assert_eq!(state.summary().status_message(), "Board is 8.000\" too wide!");
    assert!(state.render_active().is_err());
}

#[test]
fn test_unit_only_changes_presentation() {
    let mut state = DesignerState::new();
    let before = state.design().clone();
    state.set_unit(LengthUnit::Centimeters);
    assert_eq!(state.design(), &before);
    assert_eq!(state.summary().status_message(), "16.51 cm of space remaining");
    assert!(!state.is_modified);
}

#[test]
fn test_view_options() {
    let mut state = DesignerState::new();
    state.set_corner_radius(3.0);
    state.set_camera(CameraAngle::Angled);
    state.set_active_view(ViewKind::ThreeD);
    assert_eq!(state.view_options.corner_radius, 2.0);
    assert_eq!(state.view_options.camera, CameraAngle::Angled);
    assert_eq!(state.render_active().unwrap().primitives.len(), 18);
}

#[test]
fn test_new_design_resets() {
    let mut state = DesignerState::new();
    state.set_design_name("custom");
    state.apply_wood_to_all("Cherry").unwrap();
    state.new_design();
    assert_eq!(woods(&state), vec!["Maple", "Walnut", "Maple"]);
    assert_eq!(state.design_name, DEFAULT_DESIGN_NAME);
    assert!(!state.is_modified);
}
