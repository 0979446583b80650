//! # BoardKit Core
//!
//! Core types and the board layout model for BoardKit.
//! Provides the canonical unit handling, the wood catalog, the
//! board/strip/design data model, and the pure layout functions every
//! view is built on.

pub mod data;
pub mod error;
pub mod layout;
pub mod units;

pub use data::{
    Board, BoardPreset, Design, HexColor, Strip, StripId, WoodLibrary, WoodType, MAX_STRIPS,
    MIN_STRIP_WIDTH,
};

pub use error::{DesignError, DesignFileError, LayoutError};

pub use layout::{
    place_strips, remaining_width, total_occupied_width, validate_fit, FitReport, FitStatus,
    Placement,
};

pub use units::{format_dimension, parse_length, LengthUnit};
