use boardkit_designer::designer_state::DesignerState;
use boardkit_designer::svg_renderer::render_svg;
use boardkit_designer::ViewKind;

#[test]
fn test_schematic_svg_contains_annotations() {
    let state = DesignerState::new();
    let scene = state.render_scene(ViewKind::Schematic).unwrap();
    let svg = render_svg(&scene);

    assert!(svg.contains(r#"width="14in" height="10in""#));
    assert!(svg.contains("Cutting Board Schematic with Dimensions"));
    assert!(svg.contains("Total: 5.500&quot;"));
    assert!(svg.contains("CUT LIST:"));
    assert!(svg.contains("2. Walnut: 1.5&quot; × 18.0&quot;"));
    assert!(svg.contains(r##"fill="#5C4033" fill-opacity="0.7""##));
}

#[test]
fn test_edge_grain_svg_rotates_labels() {
    let state = DesignerState::new();
    let scene = state.render_scene(ViewKind::EdgeGrain).unwrap();
    let svg = render_svg(&scene);

    assert!(svg.matches("<rect").count() >= 4);
    assert!(svg.contains("rotate(-90"));
    // Walnut is dark and gets a white label
    assert!(svg.contains(r##"fill="#FFFFFF">"##));
    assert!(svg.contains("Width (inches)"));
}

#[test]
fn test_three_d_svg_has_faces() {
    let state = DesignerState::new();
    let scene = state.render_scene(ViewKind::ThreeD).unwrap();
    let svg = render_svg(&scene);
    assert_eq!(svg.matches("<polygon").count(), 18);
    assert!(svg.contains("3D Preview - Thickness: 1.5&quot;"));
}
