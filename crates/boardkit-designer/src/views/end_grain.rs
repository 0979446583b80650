//! End grain preview: the edge grain placement with the axes swapped.

use super::{grain::grain_lines, ViewOptions};
use crate::scene::{Axes, Bounds, FigureSize, Label, Primitive, Scene};
use boardkit_core::{Board, Placement};

const LABEL_SIZE: f64 = 10.0;

pub(super) fn build(board: &Board, placements: &[Placement<'_>], options: &ViewOptions) -> Scene {
    let mut scene = Scene::new(
        "Cutting Board Preview - End Grain",
        FigureSize::PREVIEW,
        Bounds::new(0.0, 0.0, board.length, board.width),
    );
    scene.axes = Some(Axes {
        x_label: "Length (inches)".to_string(),
        y_label: "Width (inches)".to_string(),
        grid: true,
    });

    for p in placements {
        scene.push(Primitive::solid_rect(
            0.0,
            p.offset,
            p.length,
            p.extent,
            p.strip.color,
        ));

        if options.show_grain {
            for line in grain_lines(p, (0.0, p.offset, p.length, p.extent), false) {
                scene.push(line);
            }
        }

        scene.push(Primitive::Text(
            Label::new(p.length / 2.0, p.center(), p.strip.wood.clone(), LABEL_SIZE)
                .bold()
                .color(p.strip.color.label_color()),
        ));
    }
    scene
}
