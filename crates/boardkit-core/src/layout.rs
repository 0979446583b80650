//! Board layout model
//!
//! Pure functions from `(board, strips)` to placements and fit metrics.
//! Strips are laid left to right in sequence order; every view is a
//! projection of [`place_strips`].

use crate::data::board::Board;
use crate::data::strip::Strip;
use crate::error::LayoutError;

/// Widths closer than this are treated as equal when classifying fit.
pub const FIT_EPSILON: f64 = 1e-9;

/// Where one strip lands on the board.
///
/// `offset` and `extent` run along the board's width axis; the strip spans
/// the full board length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    /// Position in the strip sequence
    pub index: usize,
    pub strip: &'a Strip,
    /// Left edge, equal to the summed width of all preceding strips
    pub offset: f64,
    /// The strip's own width
    pub extent: f64,
    /// Board length the strip runs along
    pub length: f64,
}

impl Placement<'_> {
    /// Right edge along the width axis.
    pub fn end(&self) -> f64 {
        self.offset + self.extent
    }

    /// Centre along the width axis.
    pub fn center(&self) -> f64 {
        self.offset + self.extent / 2.0
    }
}

/// Result of checking the strips against the board width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    pub ok: bool,
    /// Board width minus occupied width; negative means overflow.
    pub remaining: f64,
    /// Amount by which the strips exceed the board (0 when they fit).
    pub overflow: f64,
}

/// Coarse classification of a fit for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    Overflow,
    Exact,
    Slack,
}

impl FitReport {
    pub fn status(&self) -> FitStatus {
        if !self.ok {
            FitStatus::Overflow
        } else if self.remaining.abs() < FIT_EPSILON {
            FitStatus::Exact
        } else {
            FitStatus::Slack
        }
    }

    /// Convert to a `Result`, blocking rendering on overflow.
    pub fn into_result(self) -> Result<(), LayoutError> {
        if self.ok {
            Ok(())
        } else {
            Err(LayoutError::Overflow {
                overflow: self.overflow,
            })
        }
    }
}

/// Sum of strip widths.
pub fn total_occupied_width(strips: &[Strip]) -> f64 {
    strips.iter().map(|s| s.width).sum()
}

/// Board width minus occupied width. Negative on overflow.
pub fn remaining_width(board: &Board, strips: &[Strip]) -> f64 {
    board.width - total_occupied_width(strips)
}

/// Assign each strip its offset along the width axis.
pub fn place_strips<'a>(strips: &'a [Strip], board: &Board) -> Vec<Placement<'a>> {
    let mut offset = 0.0;
    strips
        .iter()
        .enumerate()
        .map(|(index, strip)| {
            let placement = Placement {
                index,
                strip,
                offset,
                extent: strip.width,
                length: board.length,
            };
            offset += strip.width;
            placement
        })
        .collect()
}

/// Check that the strips fit across the board.
pub fn validate_fit(board: &Board, strips: &[Strip]) -> FitReport {
    let remaining = remaining_width(board, strips);
    let ok = remaining >= 0.0;
    FitReport {
        ok,
        remaining,
        overflow: if ok { 0.0 } else { -remaining },
    }
}
