//! Word-search puzzle generator
//!
//! Hides words in a square letter grid along any of eight directions, then fills
//! the remaining cells with random letters. Placement validates a whole path before
//! writing any letter, so a failed attempt never disturbs the grid.

#![forbid(unsafe_code)]

/// Word placement, the assembly loop and the finalizer
pub mod algorithm;
/// Word sources, configuration, output and error handling
pub mod io;
/// The letter grid and placement directions
pub mod spatial;

pub use algorithm::builder::PuzzleBuilder;
pub use algorithm::finalizer::Puzzle;
pub use io::error::{PuzzleError, Result};
