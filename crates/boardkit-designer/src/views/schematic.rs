//! Dimensioned cutting schematic with a cut list.

use crate::scene::{plain_number, Anchor, Bounds, FigureSize, Label, Outline, Primitive, Scene};
use boardkit_core::{Board, HexColor, Placement};

const STRIP_OPACITY: f64 = 0.7;
/// Gap between the board and the dimension lines, inches
const DIMENSION_GAP: f64 = 1.0;
const TICK: f64 = 0.2;
const CUT_LIST_TOP: f64 = -2.5;
const CUT_LIST_STEP: f64 = 0.5;
const CUT_LIST_X: f64 = -1.5;

pub(super) fn build(board: &Board, placements: &[Placement<'_>]) -> Scene {
    let total = placements.last().map(|p| p.end()).unwrap_or_default();
    let length = board.length;
    let cut_list_bottom = CUT_LIST_TOP - CUT_LIST_STEP * (placements.len() as f64 + 1.0);

    let mut scene = Scene::new(
        "Cutting Board Schematic with Dimensions",
        FigureSize::SCHEMATIC,
        Bounds::new(
            -2.0,
            cut_list_bottom.min(-3.0),
            board.width + 3.0,
            length + 3.0,
        ),
    );

    let dim_y = length + DIMENSION_GAP;
    for p in placements {
        scene.push(Primitive::Rect {
            x: p.offset,
            y: 0.0,
            width: p.extent,
            height: length,
            fill: p.strip.color,
            opacity: STRIP_OPACITY,
            outline: Some(Outline::black(2.0)),
        });
        scene.push(Primitive::Text(
            Label::new(
                p.center(),
                length / 2.0,
                format!("{}\n{}\"", p.strip.wood, plain_number(p.extent)),
                11.0,
            )
            .bold()
            .boxed(HexColor::WHITE),
        ));

        // Per-strip dimension line with end ticks
        scene.push(Primitive::line((p.offset, dim_y), (p.end(), dim_y), 1.5));
        for x in [p.offset, p.end()] {
            scene.push(Primitive::line((x, dim_y - TICK), (x, dim_y + TICK), 1.5));
        }
        scene.push(Primitive::Text(
            Label::new(
                p.center(),
                dim_y + 0.5,
                format!("{}\"", plain_number(p.extent)),
                10.0,
            )
            .bold(),
        ));
    }

    // Overall length on the right
    let right = total + DIMENSION_GAP;
    scene.push(Primitive::line((right, 0.0), (right, length), 2.0));
    for y in [0.0, length] {
        scene.push(Primitive::line((right - TICK, y), (right + TICK, y), 2.0));
    }
    scene.push(Primitive::Text(
        Label::new(right + 0.5, length / 2.0, format!("{}\"", plain_number(length)), 12.0)
            .bold()
            .rotated(270.0),
    ));

    // Total width at the bottom
    let bottom = -DIMENSION_GAP;
    scene.push(Primitive::line((0.0, bottom), (total, bottom), 2.0));
    for x in [0.0, total] {
        scene.push(Primitive::line((x, bottom - TICK), (x, bottom + TICK), 2.0));
    }
    scene.push(Primitive::Text(
        Label::new(total / 2.0, -1.5, format!("Total: {:.3}\"", total), 12.0).bold(),
    ));

    scene.push(Primitive::Text(
        Label::new(CUT_LIST_X, CUT_LIST_TOP, "CUT LIST:", 11.0)
            .bold()
            .anchored(Anchor::Start),
    ));
    for (line, entry) in cut_list(placements).into_iter().enumerate() {
        scene.push(Primitive::Text(
            Label::new(
                CUT_LIST_X,
                CUT_LIST_TOP - CUT_LIST_STEP * (line as f64 + 1.0),
                entry,
                9.0,
            )
            .anchored(Anchor::Start),
        ));
    }
    scene
}

/// Numbered cut list entries: `1. Maple: 2.0" × 18.0"`.
pub fn cut_list(placements: &[Placement<'_>]) -> Vec<String> {
    placements
        .iter()
        .map(|p| {
            format!(
                "{}. {}: {}\" × {}\"",
                p.index + 1,
                p.strip.wood,
                plain_number(p.extent),
                plain_number(p.length)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardkit_core::Design;

    fn texts(scene: &Scene) -> Vec<String> {
        scene.labels().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn test_cut_list_entries() {
        let design = Design::new();
        assert_eq!(
            cut_list(&design.placements()),
            vec![
                "1. Maple: 2.0\" × 18.0\"",
                "2. Walnut: 1.5\" × 18.0\"",
                "3. Maple: 2.0\" × 18.0\"",
            ]
        );
    }

    #[test]
    fn test_annotations() {
        let design = Design::new();
        let scene = build(&design.board, &design.placements());
        let texts = texts(&scene);
        assert!(texts.contains(&"Total: 5.500\"".to_string()));
        assert!(texts.contains(&"Walnut\n1.5\"".to_string()));
        assert!(texts.contains(&"18.0\"".to_string()));
        assert!(texts.contains(&"CUT LIST:".to_string()));
        assert!(scene
            .primitives
            .iter()
            .all(|p| !matches!(p, Primitive::Rect { opacity, .. } if *opacity != STRIP_OPACITY)));
    }

    #[test]
    fn test_long_cut_list_stays_in_bounds() {
        let mut design = Design::new();
        design.resize(20).unwrap();
        let scene = build(&design.board, &design.placements());
        let lowest = scene.labels().map(|l| l.y).fold(f64::INFINITY, f64::min);
        assert!(lowest > scene.bounds.min_y);
    }
}
