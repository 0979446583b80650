//! The design aggregate: a board plus its ordered, non-empty strip sequence.
//!
//! All edits go through methods here so the sequence can never become empty
//! and widths stay inside `[MIN_STRIP_WIDTH, board.width]`.

use super::board::Board;
use super::color::HexColor;
use super::materials::{standard_library, WoodType, DEFAULT_WOOD};
use super::strip::{clamp_width, Strip, StripId, MAX_STRIPS, MIN_STRIP_WIDTH, NEW_STRIP_WIDTH};
use crate::error::DesignError;
use crate::layout::{self, FitReport, Placement};

#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub board: Board,
    strips: Vec<Strip>,
}

impl Design {
    /// Default design: Maple 2", Walnut 1.5", Maple 2" on a standard board.
    pub fn new() -> Self {
        let maple = catalog_wood(DEFAULT_WOOD);
        let walnut = catalog_wood("Walnut");
        Self {
            board: Board::default(),
            strips: vec![
                Strip::new(&maple, 2.0),
                Strip::new(&walnut, 1.5),
                Strip::new(&maple, 2.0),
            ],
        }
    }

    /// Build a design from an existing sequence. The sequence must not be empty.
    pub fn with_strips(board: Board, strips: Vec<Strip>) -> Result<Self, DesignError> {
        if strips.is_empty() || strips.len() > MAX_STRIPS {
            return Err(DesignError::StripCount {
                requested: strips.len(),
                max: MAX_STRIPS,
            });
        }
        Ok(Self { board, strips })
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    pub fn len(&self) -> usize {
        self.strips.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Strip> {
        self.strips.get(index)
    }

    /// Current position of a strip by identity.
    pub fn index_of(&self, id: StripId) -> Option<usize> {
        self.strips.iter().position(|s| s.id == id)
    }

    pub fn occupied_width(&self) -> f64 {
        layout::total_occupied_width(&self.strips)
    }

    pub fn remaining_width(&self) -> f64 {
        layout::remaining_width(&self.board, &self.strips)
    }

    pub fn fit(&self) -> FitReport {
        layout::validate_fit(&self.board, &self.strips)
    }

    pub fn placements(&self) -> Vec<Placement<'_>> {
        layout::place_strips(&self.strips, &self.board)
    }

    /// Replace the board and re-clamp every strip width to the new envelope.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        for strip in &mut self.strips {
            let clamped = clamp_width(strip.width, board.width);
            if clamped != strip.width {
                tracing::debug!(
                    "Clamped strip {} width {} -> {} for board width {}",
                    strip.id,
                    strip.width,
                    clamped,
                    board.width
                );
                strip.width = clamped;
            }
        }
    }

    /// Grow or shrink to `count` strips. New strips are Maple 1"; shrinking drops from the end.
    pub fn resize(&mut self, count: usize) -> Result<(), DesignError> {
        if count == 0 || count > MAX_STRIPS {
            return Err(DesignError::StripCount {
                requested: count,
                max: MAX_STRIPS,
            });
        }
        if count > self.strips.len() {
            let maple = lookup(DEFAULT_WOOD)?;
            let width = clamp_width(NEW_STRIP_WIDTH, self.board.width);
            self.strips
                .resize_with(count, || Strip::new(&maple, width));
        } else {
            self.strips.truncate(count);
        }
        Ok(())
    }

    /// Insert a strip at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, strip: Strip) -> Result<StripId, DesignError> {
        if index > self.strips.len() {
            return Err(self.out_of_range(index));
        }
        if self.strips.len() >= MAX_STRIPS {
            return Err(DesignError::StripCount {
                requested: self.strips.len() + 1,
                max: MAX_STRIPS,
            });
        }
        self.check_width(strip.width)?;
        let id = strip.id;
        self.strips.insert(index, strip);
        Ok(id)
    }

    /// Remove the strip at `index`. The last remaining strip cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<Strip, DesignError> {
        if index >= self.strips.len() {
            return Err(self.out_of_range(index));
        }
        if self.strips.len() == 1 {
            return Err(DesignError::LastStrip);
        }
        Ok(self.strips.remove(index))
    }

    /// Insert an independent copy right after `index`; returns the copy's id.
    pub fn duplicate(&mut self, index: usize) -> Result<StripId, DesignError> {
        let copy = self
            .strips
            .get(index)
            .ok_or_else(|| self.out_of_range(index))?
            .duplicate();
        self.insert(index + 1, copy)
    }

    /// Swap with the previous strip. Returns false when already first.
    pub fn move_up(&mut self, index: usize) -> Result<bool, DesignError> {
        if index >= self.strips.len() {
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            return Ok(false);
        }
        self.strips.swap(index - 1, index);
        Ok(true)
    }

    /// Swap with the next strip. Returns false when already last.
    pub fn move_down(&mut self, index: usize) -> Result<bool, DesignError> {
        if index >= self.strips.len() {
            return Err(self.out_of_range(index));
        }
        if index + 1 == self.strips.len() {
            return Ok(false);
        }
        self.strips.swap(index, index + 1);
        Ok(true)
    }

    pub fn set_width(&mut self, index: usize, width: f64) -> Result<(), DesignError> {
        self.check_width(width)?;
        let len = self.strips.len();
        let strip = self
            .strips
            .get_mut(index)
            .ok_or(DesignError::IndexOutOfRange { index, len })?;
        strip.width = width;
        Ok(())
    }

    pub fn set_wood(&mut self, index: usize, wood: &str) -> Result<(), DesignError> {
        let wood = lookup(wood)?;
        let len = self.strips.len();
        let strip = self
            .strips
            .get_mut(index)
            .ok_or(DesignError::IndexOutOfRange { index, len })?;
        strip.set_wood(&wood);
        Ok(())
    }

    /// Bulk edit: give every strip the same width.
    pub fn apply_width_to_all(&mut self, width: f64) -> Result<(), DesignError> {
        self.check_width(width)?;
        for strip in &mut self.strips {
            strip.width = width;
        }
        Ok(())
    }

    /// Bulk edit: give every strip the same species.
    pub fn apply_wood_to_all(&mut self, wood: &str) -> Result<(), DesignError> {
        let wood = lookup(wood)?;
        for strip in &mut self.strips {
            strip.set_wood(&wood);
        }
        Ok(())
    }

    fn check_width(&self, width: f64) -> Result<(), DesignError> {
        if width.is_finite() && (MIN_STRIP_WIDTH..=self.board.width).contains(&width) {
            Ok(())
        } else {
            Err(DesignError::WidthOutOfRange {
                value: width,
                min: MIN_STRIP_WIDTH,
                max: self.board.width,
            })
        }
    }

    fn out_of_range(&self, index: usize) -> DesignError {
        DesignError::IndexOutOfRange {
            index,
            len: self.strips.len(),
        }
    }
}

impl Default for Design {
    fn default() -> Self {
        Self::new()
    }
}

fn catalog_wood(name: &str) -> WoodType {
    standard_library()
        .get(name)
        .cloned()
        .unwrap_or_else(|| WoodType::new(name, HexColor::NEUTRAL))
}

fn lookup(name: &str) -> Result<WoodType, DesignError> {
    standard_library()
        .get(name)
        .cloned()
        .ok_or_else(|| DesignError::UnknownWood {
            name: name.to_string(),
        })
}
