//! Fit summary shown alongside every view.

use boardkit_core::{format_dimension, Design, FitStatus, LengthUnit};
use std::fmt;

/// Board usage figures in inches, formatted in `unit` on display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub board_width: f64,
    pub board_length: f64,
    pub total: f64,
    pub remaining: f64,
    pub status: FitStatus,
    pub unit: LengthUnit,
}

impl Summary {
    pub fn of(design: &Design, unit: LengthUnit) -> Self {
        let fit = design.fit();
        Self {
            board_width: design.board.width,
            board_length: design.board.length,
            total: design.occupied_width(),
            remaining: fit.remaining,
            status: fit.status(),
            unit,
        }
    }

    /// One-line fit status for the user.
    pub fn status_message(&self) -> String {
        match self.status {
            FitStatus::Overflow => format!(
                "Board is {} too wide!",
                format_dimension(-self.remaining, self.unit)
            ),
            FitStatus::Slack => format!(
                "{} of space remaining",
                format_dimension(self.remaining, self.unit)
            ),
            FitStatus::Exact => "Perfect fit!".to_string(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board: {} × {}",
            format_dimension(self.board_width, self.unit),
            format_dimension(self.board_length, self.unit)
        )?;
        writeln!(f, "Total width: {}", format_dimension(self.total, self.unit))?;
        writeln!(f, "Remaining: {}", format_dimension(self.remaining, self.unit))?;
        write!(f, "Status: {}", self.status_message())
    }
}
