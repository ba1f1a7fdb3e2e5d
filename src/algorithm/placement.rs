//! Collision check and commit for a single word placement

use std::fmt;

use crate::spatial::{Direction, Grid, Position};

/// A word laid out at a fixed start and direction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Uppercase word
    pub word: String,
    /// Cell holding the first letter
    pub start: Position,
    /// Direction followed by the remaining letters
    pub direction: Direction,
}

impl Placement {
    /// Number of letters in the word
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Whether the word has no letters
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells covered by the word, first letter first
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        self.direction.path(self.start, self.len())
    }
}

/// First cell along a path that rejected a letter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict {
    /// Offending cell
    pub position: Position,
    /// Letter the word needed there
    pub letter: char,
    /// Letter already in the cell, `None` if the path left the grid
    pub existing: Option<char>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.existing {
            Some(existing) => write!(
                f,
                "'{}' clashes with '{existing}' at ({}, {})",
                self.letter, self.position.row, self.position.col
            ),
            None => write!(
                f,
                "'{}' falls outside the grid at ({}, {})",
                self.letter, self.position.row, self.position.col
            ),
        }
    }
}

/// Find the first cell along the path that cannot take its letter
///
/// Read-only: the grid is never touched.
pub fn find_conflict(
    grid: &Grid,
    word: &str,
    direction: Direction,
    start: Position,
) -> Option<Conflict> {
    for (offset, letter) in word.chars().enumerate() {
        let Some(position) = direction.step(start, offset) else {
            return Some(Conflict {
                position: start,
                letter,
                existing: None,
            });
        };
        if !grid.can_accept(position.row, position.col, letter) {
            return Some(Conflict {
                position,
                letter,
                existing: grid.cell_at(position.row, position.col).ok(),
            });
        }
    }
    None
}

/// Validate the whole path, then commit every letter
///
/// The validation pass completes before the first write, so a conflict leaves the
/// grid exactly as it was.
///
/// # Errors
///
/// Returns the first [`Conflict`] found along the path
pub fn try_place(
    grid: &mut Grid,
    word: &str,
    direction: Direction,
    start: Position,
) -> Result<(), Conflict> {
    if let Some(conflict) = find_conflict(grid, word, direction, start) {
        return Err(conflict);
    }

    for (position, letter) in direction.path(start, word.chars().count()).zip(word.chars()) {
        grid.commit(position.row, position.col, letter);
    }
    Ok(())
}
