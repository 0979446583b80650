//! Strip and board editing for designer state.
//!
//! Strip indices are zero-based. Every successful edit marks the design modified.

use super::DesignerState;
use boardkit_core::data::materials::{standard_library, DEFAULT_WOOD};
use boardkit_core::data::strip::{clamp_width, NEW_STRIP_WIDTH};
use boardkit_core::{Board, BoardPreset, DesignError, Strip, StripId};

impl DesignerState {
    /// Sets the number of strips (grows with Maple 1", shrinks from the end).
    pub fn set_strip_count(&mut self, count: usize) -> Result<(), DesignError> {
        self.design.resize(count)?;
        tracing::info!("Strip count set to {}", count);
        self.mark_modified();
        Ok(())
    }

    /// Appends a new strip of the default wood and width.
    pub fn add_strip(&mut self) -> Result<StripId, DesignError> {
        let wood = standard_library()
            .get(DEFAULT_WOOD)
            .ok_or_else(|| DesignError::UnknownWood {
                name: DEFAULT_WOOD.to_string(),
            })?;
        let strip = Strip::new(wood, clamp_width(NEW_STRIP_WIDTH, self.design.board.width));
        let id = self.design.insert(self.design.len(), strip)?;
        tracing::info!("Added strip {}", self.design.len());
        self.mark_modified();
        Ok(id)
    }

    /// Duplicates a strip; the copy goes right after it.
    pub fn duplicate_strip(&mut self, index: usize) -> Result<StripId, DesignError> {
        let id = self.design.duplicate(index)?;
        tracing::info!("Duplicated strip {}", index + 1);
        self.mark_modified();
        Ok(id)
    }

    /// Removes a strip. The last remaining strip cannot be removed.
    pub fn remove_strip(&mut self, index: usize) -> Result<(), DesignError> {
        let removed = self.design.remove(index)?;
        tracing::info!("Removed strip {} ({})", index + 1, removed.wood);
        self.mark_modified();
        Ok(())
    }

    /// Moves a strip one place towards the start. Returns false at the boundary.
    pub fn move_strip_up(&mut self, index: usize) -> Result<bool, DesignError> {
        let moved = self.design.move_up(index)?;
        if moved {
            tracing::debug!("Moved strip {} up", index + 1);
            self.mark_modified();
        }
        Ok(moved)
    }

    /// Moves a strip one place towards the end. Returns false at the boundary.
    pub fn move_strip_down(&mut self, index: usize) -> Result<bool, DesignError> {
        let moved = self.design.move_down(index)?;
        if moved {
            tracing::debug!("Moved strip {} down", index + 1);
            self.mark_modified();
        }
        Ok(moved)
    }

    pub fn set_strip_width(&mut self, index: usize, width: f64) -> Result<(), DesignError> {
        self.design.set_width(index, width)?;
        tracing::debug!("Strip {} width -> {}", index + 1, width);
        self.mark_modified();
        Ok(())
    }

    pub fn set_strip_wood(&mut self, index: usize, wood: &str) -> Result<(), DesignError> {
        self.design.set_wood(index, wood)?;
        tracing::debug!("Strip {} wood -> {}", index + 1, wood);
        self.mark_modified();
        Ok(())
    }

    pub fn apply_width_to_all(&mut self, width: f64) -> Result<(), DesignError> {
        self.design.apply_width_to_all(width)?;
        tracing::info!("Applied width {} to all strips", width);
        self.mark_modified();
        Ok(())
    }

    pub fn apply_wood_to_all(&mut self, wood: &str) -> Result<(), DesignError> {
        self.design.apply_wood_to_all(wood)?;
        tracing::info!("Applied {} to all strips", wood);
        self.mark_modified();
        Ok(())
    }

    /// Switches to a preset board, keeping the current thickness.
    pub fn set_board_preset(&mut self, preset: BoardPreset) {
        let thickness = self.design.board.thickness;
        let board = Board::from_preset(preset);
        self.design.set_board(Board { thickness, ..board });
        tracing::info!("Board preset: {}", preset);
        self.mark_modified();
    }

    /// Sets a custom board size, keeping the current thickness.
    pub fn set_board_size(&mut self, width: f64, length: f64) -> Result<(), DesignError> {
        let board = Board::new(width, length)?.with_thickness(self.design.board.thickness)?;
        self.design.set_board(board);
        tracing::info!("Board size: {} x {}", width, length);
        self.mark_modified();
        Ok(())
    }

    /// Sets the thickness shown by the 3D view.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), DesignError> {
        self.design.board = self.design.board.with_thickness(thickness)?;
        self.mark_modified();
        Ok(())
    }
}
