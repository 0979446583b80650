//! File I/O operations (save, load, export, new) for designer state.

use super::DesignerState;
use crate::export::{self, ExportError};
use crate::serialization::{file_stem, DesignFile, LoadedDesign, DEFAULT_DESIGN_NAME};
use anyhow::Context;
use boardkit_core::{Design, DesignFileError};
use std::path::{Path, PathBuf};

impl DesignerState {
    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = DesignFile::from_design(&self.design_name, &self.design);
        file.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved design '{}' to {}", self.design_name, path.as_ref().display());

        Ok(())
    }

    /// Load design from file.
    ///
    /// On any failure the current design is left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = DesignFile::load_from_file(&path)?;
        let loaded = file
            .apply(&self.design)
            .with_context(|| format!("Invalid design file {}", path.as_ref().display()))?;

        self.install(loaded);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        tracing::info!("Loaded design '{}' from {}", self.design_name, path.as_ref().display());

        Ok(())
    }

    /// Load design from an in-memory JSON document (e.g. an upload).
    pub fn load_from_str(&mut self, content: &str) -> Result<(), DesignFileError> {
        let loaded = DesignFile::from_json(content)?.apply(&self.design)?;
        self.install(loaded);
        tracing::info!("Loaded design '{}'", self.design_name);
        Ok(())
    }

    fn install(&mut self, loaded: LoadedDesign) {
        self.design = loaded.design;
        self.design_name = loaded.name;
        self.is_modified = false;
    }

    /// Current design as a JSON document.
    pub fn to_json(&self) -> Result<String, DesignFileError> {
        DesignFile::from_design(&self.design_name, &self.design).to_json()
    }

    /// Default file name for saving: `<design_name>.json`.
    pub fn design_file_name(&self) -> String {
        format!("{}.json", file_stem(&self.design_name))
    }

    /// Write every view artifact into `dir`.
    pub fn export_all(&self, dir: impl AsRef<Path>, dpi: u32) -> Result<Vec<PathBuf>, ExportError> {
        export::export_all(
            &self.design,
            &self.design_name,
            &self.view_options,
            dir.as_ref(),
            dpi,
        )
    }

    /// Create new design (reset to defaults, keep presentation settings).
    pub fn new_design(&mut self) {
        self.design = Design::new();
        self.design_name = DEFAULT_DESIGN_NAME.to_string();
        self.current_file_path = None;
        self.is_modified = false;
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.design_name)
        } else {
            &self.design_name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
