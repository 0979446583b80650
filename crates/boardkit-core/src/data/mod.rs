//! Data models for the board design
//!
//! This module provides:
//! - Wood catalog with display colours
//! - Board envelope and size presets
//! - Strips with stable identities
//! - The design aggregate and its editing operations

pub mod board;
pub mod color;
pub mod design;
pub mod materials;
pub mod strip;

pub use board::{Board, BoardPreset};
pub use color::HexColor;
pub use design::Design;
pub use materials::{init_standard_library, standard_library, WoodLibrary, WoodType};
pub use strip::{Strip, StripId, MAX_STRIPS, MIN_STRIP_WIDTH};
