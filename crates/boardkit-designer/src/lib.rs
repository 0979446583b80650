//! # BoardKit Designer
//!
//! Design session, board views and design files for BoardKit.
//!
//! ## Core Components
//!
//! ### Session
//! - **DesignerState**: the one design of a session plus its presentation settings
//! - **Summary**: occupied/remaining width and fit status in the display unit
//!
//! ### Views
//! - **Edge grain**: strips as vertical bands with optional grain and rounded corners
//! - **End grain**: the same placement with axes swapped
//! - **3D**: strips extruded by the board thickness, projected from a camera preset
//! - **Schematic**: dimension lines, totals and a numbered cut list
//!
//! ### Output
//! - **SVG**: vector documents
//! - **PNG**: raster images via tiny-skia, labels via system fonts
//! - **Design files**: flat JSON documents
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   └── Design (boardkit-core)
//!         └── place_strips ──► views ──► Scene ──┬── svg_renderer ──► .svg
//!                                                └── renderer ──────► .png
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boardkit_designer::{DesignerState, ViewKind};
//!
//! let mut state = DesignerState::new();
//! state.set_strip_wood(1, "Cherry")?;
//! let scene = state.render_scene(ViewKind::Schematic)?;
//! let svg = boardkit_designer::svg_renderer::render_svg(&scene);
//! ```

pub mod designer_state;
pub mod export;
pub mod font_manager;
pub mod renderer;
pub mod scene;
pub mod serialization;
pub mod summary;
pub mod svg_renderer;
pub mod views;

pub use designer_state::DesignerState;
pub use export::{export_all, ExportError, OutputFormat, EXPORT_DPI, MAX_DPI, MIN_DPI, PREVIEW_DPI};
pub use scene::{FigureSize, Primitive, Scene};
pub use serialization::{DesignFile, StripRecord, DEFAULT_DESIGN_NAME};
pub use summary::Summary;
pub use views::{render_view, CameraAngle, ViewKind, ViewOptions};
