//! Spatial data structures for the puzzle grid
//!
//! This module contains:
//! - The square letter grid and its cell primitives
//! - The eight placement directions with their start samplers

/// Placement directions and in-bounds start sampling
pub mod direction;
/// Letter grid with the empty-cell sentinel
pub mod grid;

pub use direction::Direction;
pub use grid::{Grid, Position};
