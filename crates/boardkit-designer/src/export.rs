//! Export of rendered views to files.
//!
//! Previews are written as PNG, the schematic as both SVG and PNG. File
//! names are derived from the design name and the view.

use crate::renderer::render_scene;
use crate::scene::Scene;
use crate::serialization::file_stem;
use crate::svg_renderer::render_svg;
use crate::views::{render_view, ViewKind, ViewOptions};
use boardkit_core::{Design, LayoutError};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Resolution of exported raster artifacts.
pub const EXPORT_DPI: u32 = 300;
/// Resolution used for quick previews.
pub const PREVIEW_DPI: u32 = 100;
/// Supported raster resolutions.
pub const MIN_DPI: u32 = 50;
pub const MAX_DPI: u32 = 1200;

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing can be rendered while the strips overflow the board
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Output format could not be derived from the path
    #[error("Unsupported output format: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// Raster resolution outside the supported range
    #[error("Resolution {dpi} dpi is outside [{min}, {max}]")]
    DpiOutOfRange {
        /// The rejected resolution.
        dpi: u32,
        /// Minimum supported resolution.
        min: u32,
        /// Maximum supported resolution.
        max: u32,
    },

    /// The raster canvas could not be allocated
    #[error("Cannot allocate a {width}x{height} pixel canvas")]
    CanvasSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Image encoding failed
    #[error("Failed to encode image: {reason}")]
    Encode {
        /// Encoder message.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            _ => Err(ExportError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ExportError::Encode {
            reason: e.to_string(),
        })?;
    Ok(bytes)
}

/// Reject resolutions outside `[MIN_DPI, MAX_DPI]`.
pub fn check_dpi(dpi: u32) -> Result<(), ExportError> {
    if (MIN_DPI..=MAX_DPI).contains(&dpi) {
        Ok(())
    } else {
        Err(ExportError::DpiOutOfRange {
            dpi,
            min: MIN_DPI,
            max: MAX_DPI,
        })
    }
}

/// Serialise a scene in `format`. `dpi` only affects raster output.
pub fn scene_bytes(scene: &Scene, format: OutputFormat, dpi: u32) -> Result<Vec<u8>, ExportError> {
    match format {
        OutputFormat::Svg => Ok(render_svg(scene).into_bytes()),
        OutputFormat::Png => {
            check_dpi(dpi)?;
            encode_png(&render_scene(scene, dpi)?)
        }
    }
}

/// Write a scene to `path`, choosing the format from the extension.
pub fn write_scene(scene: &Scene, path: &Path, dpi: u32) -> Result<(), ExportError> {
    let format = OutputFormat::from_path(path)?;
    std::fs::write(path, scene_bytes(scene, format, dpi)?)?;
    tracing::info!("Wrote {} ({} dpi)", path.display(), dpi);
    Ok(())
}

/// Artifacts produced for a full export, in write order.
pub fn artifacts() -> [(ViewKind, OutputFormat); 5] {
    [
        (ViewKind::EdgeGrain, OutputFormat::Png),
        (ViewKind::EndGrain, OutputFormat::Png),
        (ViewKind::ThreeD, OutputFormat::Png),
        (ViewKind::Schematic, OutputFormat::Svg),
        (ViewKind::Schematic, OutputFormat::Png),
    ]
}

/// File name for one exported view: `<name>_<view>.<ext>`.
///
/// Path separators in the design name are replaced so the file stays in the
/// export directory.
pub fn artifact_name(design_name: &str, view: ViewKind, format: OutputFormat) -> String {
    format!(
        "{}_{}.{}",
        file_stem(design_name),
        view.artifact_suffix(),
        format.extension()
    )
}

/// Render every view of `design` into `dir` and return the written paths.
///
/// Fails before writing anything when the strips overflow the board.
pub fn export_all(
    design: &Design,
    design_name: &str,
    options: &ViewOptions,
    dir: &Path,
    dpi: u32,
) -> Result<Vec<PathBuf>, ExportError> {
    design.fit().into_result()?;
    check_dpi(dpi)?;
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for (view, format) in artifacts() {
        let scene = render_view(design, view, options)?;
        let path = dir.join(artifact_name(design_name, view, format));
        std::fs::write(&path, scene_bytes(&scene, format, dpi)?)?;
        tracing::debug!("Exported {}", path.display());
        written.push(path);
    }
    tracing::info!(
        "Exported {} artifacts for '{}' to {}",
        written.len(),
        design_name,
        dir.display()
    );
    Ok(written)
}
