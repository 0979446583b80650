use boardkit_core::{Board, LayoutError};
use boardkit_designer::designer_state::DesignerState;
use boardkit_designer::export::{write_scene, ExportError};
use boardkit_designer::ViewKind;
use tempfile::TempDir;

const TEST_DPI: u32 = 50;

#[test]
fn test_export_all_writes_every_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    state.set_design_name("demo");
    state.set_show_grain(true);

    let written = state.export_all(temp_dir.path(), TEST_DPI).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "demo_edge_grain.png",
            "demo_end_grain.png",
            "demo_3d.png",
            "demo_schematic.svg",
            "demo_schematic.png",
        ]
    );

    let png = image::open(temp_dir.path().join("demo_edge_grain.png")).unwrap();
    assert_eq!((png.width(), png.height()), (600, 400));
    let schematic = image::open(temp_dir.path().join("demo_schematic.png")).unwrap();
    assert_eq!((schematic.width(), schematic.height()), (700, 500));
    let svg = std::fs::read_to_string(temp_dir.path().join("demo_schematic.svg")).unwrap();
    assert!(svg.starts_with("<?xml"));
}

#[test]
fn test_overflow_blocks_export() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    state.set_board_size(5.0, 18.0).unwrap();

    let err = state.export_all(temp_dir.path(), TEST_DPI).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Layout(LayoutError::Overflow { overflow }) if overflow == 0.5
    ));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    assert_eq!(state.design().board, Board::new(5.0, 18.0).unwrap());
}

#[test]
fn test_write_scene_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let state = DesignerState::new();
    let scene = state.render_scene(ViewKind::EndGrain).unwrap();

    write_scene(&scene, &temp_dir.path().join("end.svg"), TEST_DPI).unwrap();
    write_scene(&scene, &temp_dir.path().join("end.png"), TEST_DPI).unwrap();
    assert!(matches!(
        write_scene(&scene, &temp_dir.path().join("end.pdf"), TEST_DPI),
        Err(ExportError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_unsupported_resolution_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let state = DesignerState::new();
    let scene = state.render_scene(ViewKind::ThreeD).unwrap();

    assert!(matches!(
        write_scene(&scene, &temp_dir.path().join("huge.png"), u32::MAX),
        Err(ExportError::DpiOutOfRange { .. })
    ));
    assert!(matches!(
        state.export_all(temp_dir.path(), 10),
        Err(ExportError::DpiOutOfRange { dpi: 10, .. })
    ));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_export_names_stay_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    state.load_from_str(r#"{"design_name": "../outside"}"#).unwrap();

    let written = state.export_all(temp_dir.path(), TEST_DPI).unwrap();
    assert!(written.iter().all(|p| p.parent() == Some(temp_dir.path())));
    assert!(temp_dir.path().join(".._outside_3d.png").exists());
}
