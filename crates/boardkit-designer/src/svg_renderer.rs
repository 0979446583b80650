//! SVG renderer for scenes
//! Produces a standalone SVG document sized in inches with a viewBox in
//! points, so font sizes and line widths map directly.
//!
//! Features:
//! - Filled strips with outlines and opacity
//! - Multi-line labels with optional background box
//! - Rotated labels

use crate::scene::{Anchor, Frame, Label, Primitive, Scene};
use boardkit_core::HexColor;
use std::fmt::Write;

/// SVG user units per inch.
const POINTS_PER_INCH: f64 = 72.0;
/// Approximate advance of one character relative to the font size.
const CHAR_WIDTH: f64 = 0.6;
const LINE_SPACING: f64 = 1.2;

/// Render a scene to an SVG document.
pub fn render_svg(scene: &Scene) -> String {
    let frame = Frame::fit(scene, POINTS_PER_INCH);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}in" height="{}in" viewBox="0 0 {} {}" font-family="sans-serif">"#,
        scene.figure.width,
        scene.figure.height,
        fmt_num(frame.width),
        fmt_num(frame.height)
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        fmt_num(frame.width),
        fmt_num(frame.height),
        HexColor::WHITE
    );

    for primitive in scene.primitives.iter().chain(scene.decorations(&frame).iter()) {
        render_primitive(&mut out, primitive, &frame);
    }

    out.push_str("</svg>\n");
    out
}

fn render_primitive(out: &mut String, primitive: &Primitive, frame: &Frame) {
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
            let (px, py) = frame.to_pixel(*x, y + height);
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                fmt_num(px),
                fmt_num(py),
                fmt_num(width * frame.scale),
                fmt_num(height * frame.scale),
                paint_attrs(*fill, *opacity, outline.as_ref().map(|o| (o.color, o.width)))
            );
        }
        Primitive::Polygon {
            points,
            fill,
            opacity,
            outline,
        } => {
            let coords: Vec<String> = points
                .iter()
                .map(|(x, y)| {
                    let (px, py) = frame.to_pixel(*x, *y);
                    format!("{},{}", fmt_num(px), fmt_num(py))
                })
                .collect();
            let _ = writeln!(
                out,
                r#"<polygon points="{}" {}/>"#,
                coords.join(" "),
                paint_attrs(*fill, *opacity, outline.as_ref().map(|o| (o.color, o.width)))
            );
        }
        Primitive::Line {
            from,
            to,
            color,
            width,
            opacity,
        } => {
            let (x1, y1) = frame.to_pixel(from.0, from.1);
            let (x2, y2) = frame.to_pixel(to.0, to.1);
            let _ = writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
                fmt_num(x1),
                fmt_num(y1),
                fmt_num(x2),
                fmt_num(y2),
                color,
                fmt_num(width * frame.pt),
                fmt_num(*opacity)
            );
        }
        Primitive::Text(label) => render_label(out, label, frame),
    }
}

fn render_label(out: &mut String, label: &Label, frame: &Frame) {
    let (px, py) = frame.to_pixel(label.x, label.y);
    let size = label.size * frame.pt;
    let lines: Vec<&str> = label.lines().collect();
    let line_height = size * LINE_SPACING;
    let block_height = line_height * lines.len() as f64;
    let block_width = lines
        .iter()
        .map(|l| l.chars().count() as f64 * size * CHAR_WIDTH)
        .fold(0.0, f64::max);

    let _ = write!(out, "<g");
    if label.rotation != 0.0 {
        // SVG rotates clockwise in a y-down space
        let _ = write!(
            out,
            r#" transform="rotate({} {} {})""#,
            fmt_num(-label.rotation),
            fmt_num(px),
            fmt_num(py)
        );
    }
    out.push_str(">\n");

    let left = match label.anchor {
        Anchor::Start => px,
        Anchor::Middle => px - block_width / 2.0,
        Anchor::End => px - block_width,
    };
    if let Some(background) = label.background {
        let pad = size * 0.3;
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="0.8" stroke="{}"/>"#,
            fmt_num(left - pad),
            fmt_num(py - block_height / 2.0 - pad),
            fmt_num(block_width + 2.0 * pad),
            fmt_num(block_height + 2.0 * pad),
            fmt_num(pad),
            background,
            HexColor::BLACK
        );
    }

    let anchor = match label.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let weight = if label.bold { "bold" } else { "normal" };
    let first_baseline = py - block_height / 2.0 + line_height / 2.0;
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" text-anchor="{}" dominant-baseline="central" fill="{}">"#,
        fmt_num(px),
        fmt_num(first_baseline),
        fmt_num(size),
        weight,
        anchor,
        label.color
    );
    for (i, line) in lines.iter().enumerate() {
        let dy = if i == 0 { 0.0 } else { line_height };
        let _ = write!(
            out,
            r#"<tspan x="{}" dy="{}">{}</tspan>"#,
            fmt_num(px),
            fmt_num(dy),
            escape(line)
        );
    }
    out.push_str("</text>\n</g>\n");
}

fn paint_attrs(fill: HexColor, opacity: f64, outline: Option<(HexColor, f64)>) -> String {
    let mut attrs = format!(r#"fill="{}" fill-opacity="{}""#, fill, fmt_num(opacity));
    match outline {
        Some((color, width)) => {
            let _ = write!(
                attrs,
                r#" stroke="{}" stroke-width="{}" stroke-linejoin="round""#,
                color,
                fmt_num(width)
            );
        }
        None => attrs.push_str(r#" stroke="none""#),
    }
    attrs
}

/// Two decimals, trailing zeros trimmed.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
