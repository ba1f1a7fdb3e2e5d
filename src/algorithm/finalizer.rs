//! Random fill of unused cells and the finished puzzle views

use rand::Rng;

use crate::{
    algorithm::builder::DroppedWord, algorithm::placement::Placement, spatial::Grid,
};

/// Letters drawn for filler cells
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw one uppercase letter uniformly
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let index = rng.random_range(0..ALPHABET.len());
    ALPHABET.get(index).copied().map_or('A', char::from)
}

/// Replace every sentinel cell with a random letter, row by row
///
/// Returns the number of cells filled. A grid without sentinel cells is left
/// untouched and consumes no randomness.
pub fn fill_empty_cells<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let size = grid.size();
    let mut filled = 0;
    for row in 0..size {
        for col in 0..size {
            if grid.is_empty_cell(row, col) {
                grid.fill_cell(row, col, random_letter(rng));
                filled += 1;
            }
        }
    }
    filled
}

/// Fill the remaining cells and return the finished grid
pub fn finalize<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    fill_empty_cells(&mut grid, rng);
    grid
}

/// A finished puzzle with everything needed to print or log it
#[derive(Debug)]
pub struct Puzzle {
    /// Seed the build was run with
    pub seed: u64,
    /// Filled grid
    pub grid: Grid,
    /// Hidden words, in placement order
    pub placements: Vec<Placement>,
    /// Candidates that were rejected
    pub dropped: Vec<DroppedWord>,
    /// Dropped words plus failed fetch attempts
    pub total_errors: usize,
}

impl Puzzle {
    /// Grid with only the hidden words' letters, other cells as the sentinel
    pub fn answer_key(&self) -> Vec<Vec<char>> {
        self.grid.answer_key_rows()
    }

    /// Grid as presented to the solver
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.grid.rows()
    }

    /// Hidden words, in placement order
    pub fn words(&self) -> Vec<&str> {
        self.placements
            .iter()
            .map(|placement| placement.word.as_str())
            .collect()
    }
}
