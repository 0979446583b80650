//! Raster renderer for scenes
//! Renders a scene to an image buffer using tiny-skia for anti-aliased 2D
//! rendering and rusttype for labels.
//!
//! Features:
//! - Anti-aliased fills and outlines with opacity
//! - Labels rasterised once and composited with rotation
//! - Labels are skipped when no system font is available

use crate::export::ExportError;
use crate::font_manager;
use crate::scene::{Anchor, Frame, Label, Primitive, Scene};
use boardkit_core::HexColor;
use image::{Rgb, RgbImage};
use rusttype::{point as rt_point, Font, Scale};
use tiny_skia::{
    Color, FillRule, FilterQuality, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

const LINE_SPACING: f32 = 1.2;

fn color(c: HexColor, opacity: f64) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn paint(c: HexColor, opacity: f64) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color(c, opacity));
    paint.anti_alias = true;
    paint
}

/// Render a scene at `dpi` pixels per inch of figure size.
///
/// Fails when the canvas for that resolution cannot be allocated.
pub fn render_scene(scene: &Scene, dpi: u32) -> Result<RgbImage, ExportError> {
    let (width, height) = scene.figure.pixels(dpi);
    let mut pixmap =
        Pixmap::new(width, height).ok_or(ExportError::CanvasSize { width, height })?;
    pixmap.fill(Color::WHITE);

    let frame = Frame::fit(scene, dpi.max(1) as f64);
    for primitive in scene.primitives.iter().chain(scene.decorations(&frame).iter()) {
        draw_primitive(&mut pixmap, primitive, &frame);
    }

    // Convert Pixmap to RgbImage; the white background makes every pixel opaque
    let data = pixmap.data();
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    }))
}

fn draw_primitive(pixmap: &mut Pixmap, primitive: &Primitive, frame: &Frame) {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
            opacity,
            outline,
        } => {
            let (left, top) = frame.to_pixel(*x, y + height);
            let rect = Rect::from_xywh(
                left as f32,
                top as f32,
                (width * frame.scale) as f32,
                (height * frame.scale) as f32,
            );
            if let Some(r) = rect {
                let path = PathBuilder::from_rect(r);
                fill_and_stroke(pixmap, &path, *fill, *opacity, outline.map(|o| (o.color, o.width)), frame);
            }
        }
        Primitive::Polygon {
            points,
            fill,
            opacity,
            outline,
        } => {
            let mut pb = PathBuilder::new();
            for (i, (x, y)) in points.iter().enumerate() {
                let (px, py) = frame.to_pixel(*x, *y);
                if i == 0 {
                    pb.move_to(px as f32, py as f32);
                } else {
                    pb.line_to(px as f32, py as f32);
                }
            }
            pb.close();
            if let Some(path) = pb.finish() {
                fill_and_stroke(pixmap, &path, *fill, *opacity, outline.map(|o| (o.color, o.width)), frame);
            }
        }
        Primitive::Line {
            from,
            to,
            color: c,
            width,
            opacity,
        } => {
            let (x1, y1) = frame.to_pixel(from.0, from.1);
            let (x2, y2) = frame.to_pixel(to.0, to.1);
            let mut pb = PathBuilder::new();
            pb.move_to(x1 as f32, y1 as f32);
            pb.line_to(x2 as f32, y2 as f32);
            if let Some(path) = pb.finish() {
                let stroke = Stroke {
                    width: (width * frame.pt) as f32,
                    ..Default::default()
                };
                pixmap.stroke_path(&path, &paint(*c, *opacity), &stroke, Transform::identity(), None);
            }
        }
        Primitive::Text(label) => draw_label(pixmap, label, frame),
    }
}

fn fill_and_stroke(
    pixmap: &mut Pixmap,
    path: &Path,
    fill: HexColor,
    opacity: f64,
    outline: Option<(HexColor, f64)>,
    frame: &Frame,
) {
    if opacity > 0.0 {
        pixmap.fill_path(
            path,
            &paint(fill, opacity),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
    if let Some((c, width)) = outline {
        let stroke = Stroke {
            width: (width * frame.pt) as f32,
            ..Default::default()
        };
        pixmap.stroke_path(path, &paint(c, 1.0), &stroke, Transform::identity(), None);
    }
}

/// Width of one laid-out line in pixels.
fn line_width(font: &Font<'_>, scale: Scale, text: &str) -> f32 {
    font.layout(text, scale, rt_point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

fn draw_label(pixmap: &mut Pixmap, label: &Label, frame: &Frame) {
    let Some(font) = font_manager::label_font(label.bold) else {
        return;
    };
    let size = (label.size * frame.pt) as f32;
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let line_height = size * LINE_SPACING;

    let lines: Vec<&str> = label.lines().collect();
    let widths: Vec<f32> = lines.iter().map(|l| line_width(font, scale, l)).collect();
    let block_w = widths.iter().copied().fold(0.0, f32::max);
    let block_h = line_height * lines.len() as f32;
    let pad = if label.background.is_some() {
        size * 0.3
    } else {
        1.0
    };

    let tmp_w = (block_w + 2.0 * pad).ceil().max(1.0) as u32;
    let tmp_h = (block_h + 2.0 * pad).ceil().max(1.0) as u32;
    let Some(mut tmp) = Pixmap::new(tmp_w, tmp_h) else {
        return;
    };

    if let Some(background) = label.background {
        if let Some(r) = Rect::from_xywh(0.5, 0.5, tmp_w as f32 - 1.0, tmp_h as f32 - 1.0) {
            let path = PathBuilder::from_rect(r);
            tmp.fill_path(&path, &paint(background, 0.8), FillRule::Winding, Transform::identity(), None);
            let stroke = Stroke {
                width: 1.0,
                ..Default::default()
            };
            tmp.stroke_path(&path, &paint(HexColor::BLACK, 1.0), &stroke, Transform::identity(), None);
        }
    }

    for (i, (line, w)) in lines.iter().zip(&widths).enumerate() {
        let x = pad
            + match label.anchor {
                Anchor::Start => 0.0,
                Anchor::Middle => (block_w - w) / 2.0,
                Anchor::End => block_w - w,
            };
        let baseline = pad
            + line_height * i as f32
            + (line_height - (v_metrics.ascent - v_metrics.descent)) / 2.0
            + v_metrics.ascent;
        for glyph in font.layout(line, scale, rt_point(x, baseline)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px = gx as i32 + bb.min.x;
                    let py = gy as i32 + bb.min.y;
                    blend_pixel(&mut tmp, px, py, label.color, coverage);
                });
            }
        }
    }

    // Anchor point inside the label pixmap
    let ax = pad
        + match label.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => block_w / 2.0,
            Anchor::End => block_w,
        };
    let ay = pad + block_h / 2.0;
    let (px, py) = frame.to_pixel(label.x, label.y);
    // tiny-skia rotates clockwise in a y-down space
    let transform = Transform::from_translate(-ax, -ay)
        .post_concat(Transform::from_rotate(-label.rotation as f32))
        .post_translate(px as f32, py as f32);
    let pixmap_paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..Default::default()
    };
    pixmap.draw_pixmap(0, 0, tmp.as_ref(), &pixmap_paint, transform, None);
}

/// Source-over blend of one glyph coverage sample into premultiplied RGBA.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, c: HexColor, coverage: f32) {
    let (w, h) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= w || y >= h || coverage <= 0.0 {
        return;
    }
    let a = coverage.clamp(0.0, 1.0);
    let idx = ((y * w + x) * 4) as usize;
    let pixel = &mut pixmap.data_mut()[idx..idx + 4];
    let src = [c.r as f32 * a, c.g as f32 * a, c.b as f32 * a, 255.0 * a];
    for (dst, s) in pixel.iter_mut().zip(src) {
        *dst = (s + *dst as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8;
    }
}
