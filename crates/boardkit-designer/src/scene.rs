//! Scene primitives produced by the views and consumed by the renderers.
//!
//! World coordinates are inches with y pointing up. Sizes that are not
//! geometry (line widths, font sizes) are in typographic points so that
//! both the SVG and the raster renderer can scale them by DPI.

use boardkit_core::HexColor;

/// Physical figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    /// Size used for the edge grain, end grain and 3D previews.
    pub const PREVIEW: FigureSize = FigureSize {
        width: 12.0,
        height: 8.0,
    };
    /// Size used for the dimensioned schematic.
    pub const SCHEMATIC: FigureSize = FigureSize {
        width: 14.0,
        height: 10.0,
    };

    /// Pixel dimensions at the given DPI.
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let dpi = dpi.max(1) as f64;
        (
            (self.width * dpi).round().max(1.0) as u32,
            (self.height * dpi).round().max(1.0) as u32,
        )
    }
}

/// Axis-aligned world rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest bounds containing every point. Empty input gives a unit square.
    pub fn around(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut iter = points.into_iter();
        let Some((x, y)) = iter.next() else {
            return Self::new(0.0, 0.0, 1.0, 1.0);
        };
        iter.fold(Self::new(x, y, x, y), |b, (x, y)| {
            Self::new(b.min_x.min(x), b.min_y.min(y), b.max_x.max(x), b.max_y.max(y))
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grow every side by `margin`.
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }
}

/// Outline of a filled primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: HexColor,
    /// Points
    pub width: f64,
}

impl Outline {
    pub fn black(width: f64) -> Self {
        Self {
            color: HexColor::BLACK,
            width,
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    Start,
    #[default]
    Middle,
    End,
}

/// A text label. The anchor point is the vertical centre of the block.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    /// May contain `\n` for multi-line labels
    pub text: String,
    /// Points
    pub size: f64,
    pub color: HexColor,
    pub anchor: Anchor,
    /// Counter-clockwise, degrees
    pub rotation: f64,
    pub bold: bool,
    /// Draw a filled box behind the text
    pub background: Option<HexColor>,
}

impl Label {
    pub fn new(x: f64, y: f64, text: impl Into<String>, size: f64) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
            color: HexColor::BLACK,
            anchor: Anchor::Middle,
            rotation: 0.0,
            bold: false,
            background: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, color: HexColor) -> Self {
        self.color = color;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn boxed(mut self, background: HexColor) -> Self {
        self.background = Some(background);
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Drawing primitive in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: HexColor,
        opacity: f64,
        outline: Option<Outline>,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: HexColor,
        opacity: f64,
        outline: Option<Outline>,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: HexColor,
        /// Points
        width: f64,
        opacity: f64,
    },
    Text(Label),
}

impl Primitive {
    /// Opaque rectangle with a thin black outline.
    pub fn solid_rect(x: f64, y: f64, width: f64, height: f64, fill: HexColor) -> Self {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
            opacity: 1.0,
            outline: Some(Outline::black(1.0)),
        }
    }

    /// Opaque black line.
    pub fn line(from: (f64, f64), to: (f64, f64), width: f64) -> Self {
        Primitive::Line {
            from,
            to,
            color: HexColor::BLACK,
            width,
            opacity: 1.0,
        }
    }
}

/// Axis frame drawn around the plot area of the 2D previews.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
}

impl Axes {
    /// Tick positions covering `[min, max]` with a step chosen from the extent.
    pub fn ticks(min: f64, max: f64) -> Vec<f64> {
        let extent = max - min;
        if !(extent.is_finite() && extent > 0.0) {
            return Vec::new();
        }
        let step = match extent {
            e if e <= 8.0 => 1.0,
            e if e <= 20.0 => 2.0,
            _ => 5.0,
        };
        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// A complete view: everything a renderer needs to draw one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub figure: FigureSize,
    /// World region mapped onto the plot area with equal aspect
    pub bounds: Bounds,
    pub axes: Option<Axes>,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(title: impl Into<String>, figure: FigureSize, bounds: Bounds) -> Self {
        Self {
            title: title.into(),
            figure,
            bounds,
            axes: None,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(label) => Some(label),
            _ => None,
        })
    }

    /// Title, axis frame, grid and tick labels for `frame`, in world coordinates.
    ///
    /// Drawn after the scene primitives.
    pub fn decorations(&self, frame: &Frame) -> Vec<Primitive> {
        let mut out = Vec::new();
        let (left, top, right, _) = frame.plot;
        let (title_x, title_y) = frame.to_world((left + right) / 2.0, top / 2.0);
        out.push(Primitive::Text(
            Label::new(title_x, title_y, self.title.clone(), TITLE_SIZE).bold(),
        ));

        let Some(axes) = &self.axes else {
            return out;
        };
        let b = self.bounds;
        // Offsets outside the plot area, converted from points to world inches
        let gap = |points: f64| points * frame.pt / frame.scale;

        for x in Axes::ticks(b.min_x, b.max_x) {
            if axes.grid {
                out.push(grid_line((x, b.min_y), (x, b.max_y)));
            }
            out.push(Primitive::line((x, b.min_y), (x, b.min_y - gap(4.0)), 0.8));
            out.push(Primitive::Text(Label::new(
                x,
                b.min_y - gap(12.0),
                plain_tick(x),
                TICK_SIZE,
            )));
        }
        for y in Axes::ticks(b.min_y, b.max_y) {
            if axes.grid {
                out.push(grid_line((b.min_x, y), (b.max_x, y)));
            }
            out.push(Primitive::line((b.min_x, y), (b.min_x - gap(4.0), y), 0.8));
            out.push(Primitive::Text(
                Label::new(b.min_x - gap(7.0), y, plain_tick(y), TICK_SIZE).anchored(Anchor::End),
            ));
        }

        out.push(Primitive::Rect {
            x: b.min_x,
            y: b.min_y,
            width: b.width(),
            height: b.height(),
            fill: HexColor::WHITE,
            opacity: 0.0,
            outline: Some(Outline::black(0.8)),
        });
        out.push(Primitive::Text(Label::new(
            (b.min_x + b.max_x) / 2.0,
            b.min_y - gap(28.0),
            axes.x_label.clone(),
            AXIS_LABEL_SIZE,
        )));
        out.push(Primitive::Text(
            Label::new(
                b.min_x - gap(34.0),
                (b.min_y + b.max_y) / 2.0,
                axes.y_label.clone(),
                AXIS_LABEL_SIZE,
            )
            .rotated(90.0),
        ));
        out
    }
}

const TITLE_SIZE: f64 = 14.0;
const AXIS_LABEL_SIZE: f64 = 12.0;
const TICK_SIZE: f64 = 9.0;

fn grid_line(from: (f64, f64), to: (f64, f64)) -> Primitive {
    Primitive::Line {
        from,
        to,
        color: HexColor::new(0xB0, 0xB0, 0xB0),
        width: 0.8,
        opacity: 0.3,
    }
}

fn plain_tick(value: f64) -> String {
    format!("{}", value)
}

/// Margins around the plot area, inches.
const TITLE_MARGIN: f64 = 0.8;
const AXES_MARGIN: f64 = 0.8;
const PLAIN_MARGIN: f64 = 0.3;

/// Mapping from world inches to output pixels for one figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Output pixels per world inch
    pub scale: f64,
    /// Output pixels per point
    pub pt: f64,
    pub width: f64,
    pub height: f64,
    origin_x: f64,
    origin_y: f64,
    /// Plot area in pixels: left, top, right, bottom
    pub plot: (f64, f64, f64, f64),
}

impl Frame {
    /// Fit the scene bounds into the figure at `dpi` output units per inch.
    pub fn fit(scene: &Scene, dpi: f64) -> Self {
        let width = scene.figure.width * dpi;
        let height = scene.figure.height * dpi;
        let side = if scene.axes.is_some() {
            AXES_MARGIN
        } else {
            PLAIN_MARGIN
        };
        let left = side * dpi;
        let right = width - PLAIN_MARGIN * dpi;
        let top = TITLE_MARGIN * dpi;
        let bottom = height - side * dpi;

        let b = scene.bounds;
        let bw = b.width().max(f64::EPSILON);
        let bh = b.height().max(f64::EPSILON);
        let scale = ((right - left) / bw).min((bottom - top) / bh);

        let used_w = bw * scale;
        let used_h = bh * scale;
        let plot_left = left + ((right - left) - used_w) / 2.0;
        let plot_top = top + ((bottom - top) - used_h) / 2.0;

        Self {
            scale,
            pt: dpi / 72.0,
            width,
            height,
            origin_x: plot_left - b.min_x * scale,
            origin_y: plot_top + b.max_y * scale,
            plot: (plot_left, plot_top, plot_left + used_w, plot_top + used_h),
        }
    }

    /// World point to output pixel (y down).
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.origin_x + x * self.scale, self.origin_y - y * self.scale)
    }

    /// Output pixel back to a world point.
    pub fn to_world(&self, px: f64, py: f64) -> (f64, f64) {
        ((px - self.origin_x) / self.scale, (self.origin_y - py) / self.scale)
    }
}

/// Format a length the way the labels print it: shortest form, at least one decimal.
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(plain_number(2.0), "2.0");
        assert_eq!(plain_number(1.5), "1.5");
        assert_eq!(plain_number(0.25), "0.25");
    }

    #[test]
    fn test_ticks() {
        assert_eq!(Axes::ticks(0.0, 5.0), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(Axes::ticks(0.0, 12.0).len(), 7);
        assert_eq!(Axes::ticks(0.0, 36.0).last(), Some(&35.0));
        assert!(Axes::ticks(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_frame_keeps_aspect() {
        let scene = Scene::new("t", FigureSize::PREVIEW, Bounds::new(0.0, 0.0, 12.0, 18.0));
        let frame = Frame::fit(&scene, 100.0);
        let (x0, y0) = frame.to_pixel(0.0, 0.0);
        let (x1, y1) = frame.to_pixel(12.0, 18.0);
        assert!(((x1 - x0) / (y0 - y1) - 12.0 / 18.0).abs() < 1e-9);
        assert!(y1 < y0);
        assert!(x0 >= 0.0 && x1 <= frame.width);
    }

    #[test]
    fn test_decorations() {
        let mut scene = Scene::new("Title", FigureSize::PREVIEW, Bounds::new(0.0, 0.0, 4.0, 6.0));
        let frame = Frame::fit(&scene, 72.0);
        let (px, py) = frame.to_pixel(1.5, 2.5);
        let (wx, wy) = frame.to_world(px, py);
        assert!((wx - 1.5).abs() < 1e-9 && (wy - 2.5).abs() < 1e-9);

        assert_eq!(scene.decorations(&frame).len(), 1);
        scene.axes = Some(Axes {
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            grid: true,
        });
        let texts: Vec<String> = scene
            .decorations(&frame)
            .into_iter()
            .filter_map(|p| match p {
                Primitive::Text(l) => Some(l.text),
                _ => None,
            })
            .collect();
        assert_eq!(texts[0], "Title");
        assert!(texts.contains(&"4".to_string()));
        assert!(texts.contains(&"y".to_string()));
    }

    #[test]
    fn test_bounds_around() {
        let b = Bounds::around([(1.0, 2.0), (-1.0, 5.0), (3.0, 0.0)]);
        assert_eq!(b, Bounds::new(-1.0, 0.0, 3.0, 5.0));
        assert_eq!(b.expand(1.0).width(), 6.0);
    }

    #[test]
    fn test_figure_pixels() {
        assert_eq!(FigureSize::PREVIEW.pixels(300), (3600, 2400));
        assert_eq!(FigureSize::SCHEMATIC.pixels(100), (1400, 1000));
    }
}
