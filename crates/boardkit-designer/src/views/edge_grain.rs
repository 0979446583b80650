//! Edge grain preview: strips as vertical bands across the board width.

use super::{grain::grain_lines, ViewOptions};
use crate::scene::{Axes, Bounds, FigureSize, Label, Outline, Primitive, Scene};
use boardkit_core::{Board, Placement};
use std::f64::consts::FRAC_PI_2;

const LABEL_SIZE: f64 = 10.0;
const CORNER_SEGMENTS: usize = 8;

pub(super) fn build(board: &Board, placements: &[Placement<'_>], options: &ViewOptions) -> Scene {
    let mut scene = Scene::new(
        "Cutting Board Preview - Edge Grain",
        FigureSize::PREVIEW,
        Bounds::new(0.0, 0.0, board.width, board.length),
    );
    scene.axes = Some(Axes {
        x_label: "Width (inches)".to_string(),
        y_label: "Length (inches)".to_string(),
        grid: true,
    });

    let last = placements.len().saturating_sub(1);
    for p in placements {
        let rect = (p.offset, 0.0, p.extent, p.length);
        let rounded = options.corner_radius > 0.0 && (p.index == 0 || p.index == last);
        if rounded {
            scene.push(Primitive::Polygon {
                points: rounded_rect(rect, options.corner_radius),
                fill: p.strip.color,
                opacity: 1.0,
                outline: Some(Outline::black(1.0)),
            });
        } else {
            scene.push(Primitive::solid_rect(
                p.offset,
                0.0,
                p.extent,
                p.length,
                p.strip.color,
            ));
        }

        if options.show_grain {
            for line in grain_lines(p, rect, true) {
                scene.push(line);
            }
        }

        scene.push(Primitive::Text(
            Label::new(p.center(), p.length / 2.0, p.strip.wood.clone(), LABEL_SIZE)
                .rotated(90.0)
                .bold()
                .color(p.strip.color.label_color()),
        ));
    }
    scene
}

/// Outline of a rectangle with all four corners rounded.
///
/// The radius is limited to half the shorter side.
fn rounded_rect((x, y, w, h): (f64, f64, f64, f64), radius: f64) -> Vec<(f64, f64)> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    // Corner centres, counter-clockwise from bottom right, with the start angle of each arc
    let corners = [
        (x + w - r, y + r, -FRAC_PI_2),
        (x + w - r, y + h - r, 0.0),
        (x + r, y + h - r, FRAC_PI_2),
        (x + r, y + r, 2.0 * FRAC_PI_2),
    ];
    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (cx, cy, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * i as f64 / CORNER_SEGMENTS as f64;
            points.push((cx + r * angle.cos(), cy + r * angle.sin()));
        }
    }
    points
}
