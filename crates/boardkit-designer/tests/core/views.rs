use boardkit_core::{Board, Design, LayoutError};
use boardkit_designer::scene::{Primitive, Scene};
use boardkit_designer::{render_view, ViewKind, ViewOptions};
use proptest::prelude::*;

/// Strip bands in the order they were pushed, as (x, y, width, height).
fn bands(scene: &Scene) -> Vec<(f64, f64, f64, f64)> {
    scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Rect {
                x, y, width, height, ..
            } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_edge_and_end_grain_are_axis_swaps() {
    let design = Design::new();
    let options = ViewOptions::default();
    let edge = render_view(&design, ViewKind::EdgeGrain, &options).unwrap();
    let end = render_view(&design, ViewKind::EndGrain, &options).unwrap();

    let edge_bands = bands(&edge);
    let end_bands = bands(&end);
    assert_eq!(edge_bands.len(), 3);
    for ((ex, ey, ew, eh), (nx, ny, nw, nh)) in edge_bands.iter().zip(&end_bands) {
        assert_eq!((ex, ey, ew, eh), (ny, nx, nh, nw));
    }
    assert_eq!(edge_bands[1], (2.0, 0.0, 1.5, 18.0));
    assert_eq!(edge.title, "Cutting Board Preview - Edge Grain");
    assert_eq!(end.title, "Cutting Board Preview - End Grain");
}

#[test]
fn test_grain_is_deterministic_and_sized() {
    let design = Design::new();
    let options = ViewOptions {
        show_grain: true,
        ..ViewOptions::default()
    };
    let a = render_view(&design, ViewKind::EdgeGrain, &options).unwrap();
    let b = render_view(&design, ViewKind::EdgeGrain, &options).unwrap();
    assert_eq!(a, b);

    let lines = a
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { .. }))
        .count();
    // 2" -> 10 lines, 1.5" -> 7 lines
    assert_eq!(lines, 10 + 7 + 10);
}

#[test]
fn test_exact_fit_renders() {
    let mut design = Design::new();
    design.set_board(Board::new(5.5, 12.0).unwrap());
    for kind in ViewKind::ALL {
        assert!(render_view(&design, kind, &ViewOptions::default()).is_ok());
    }
}

#[test]
fn test_overflow_reports_amount() {
    let mut design = Design::new();
    design.set_board(Board::new(5.0, 18.0).unwrap());
    let err = render_view(&design, ViewKind::Schematic, &ViewOptions::default()).unwrap_err();
    assert_eq!(err, LayoutError::Overflow { overflow: 0.5 });
    assert_eq!(err.to_string(), "Strips overflow the board by 0.500 in");
}

proptest! {
    #[test]
    fn prop_edge_bands_follow_placement(widths in prop::collection::vec(0.25f64..2.0, 1..10)) {
        let mut design = Design::new();
        design.set_board(Board::new(30.0, 18.0).unwrap());
        design.resize(widths.len()).unwrap();
        for (i, w) in widths.iter().enumerate() {
            design.set_width(i, *w).unwrap();
        }
        let scene = render_view(&design, ViewKind::EdgeGrain, &ViewOptions::default()).unwrap();
        let placements = design.placements();
        let edge_bands = bands(&scene);
        prop_assert_eq!(edge_bands.len(), placements.len());
        for (band, p) in edge_bands.iter().zip(&placements) {
            prop_assert_eq!(band.0, p.offset);
            prop_assert_eq!(band.2, p.extent);
        }
    }
}
