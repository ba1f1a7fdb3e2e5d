//! Square letter grid with an empty-cell sentinel
//!
//! Cells start out holding the fill sentinel and receive uppercase letters only
//! through [`Grid::commit`]. A bit mask records which cells carry word letters so
//! the answer key can be recovered after the remaining cells are filled.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::error::{PuzzleError, Result};

/// Grid coordinates (row, column)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, top to bottom
    pub row: usize,
    /// Column index, left to right
    pub col: usize,
}

impl Position {
    /// Create a position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// N×N character matrix owned by the puzzle builder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<char>,
    /// Cells written by a committed word (row-major)
    word_cells: BitVec,
    fill_char: char,
}

impl Grid {
    /// Create a grid with every cell holding `fill_char`
    pub fn new(size: usize, fill_char: char) -> Self {
        Self {
            cells: Array2::from_elem((size, size), fill_char),
            word_cells: bitvec![0; size * size],
            fill_char,
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Empty-cell sentinel
    pub const fn fill_char(&self) -> char {
        self.fill_char
    }

    /// Bounds-checked read of one cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is outside `[0, size)`
    pub fn cell_at(&self, row: usize, col: usize) -> Result<char> {
        self.cells
            .get([row, col])
            .copied()
            .ok_or(PuzzleError::OutOfBounds {
                row,
                col,
                size: self.size(),
            })
    }

    /// Whether `letter` may be written at the cell
    ///
    /// True when the cell is still empty or already holds the same letter.
    /// Out-of-bounds cells never accept.
    pub fn can_accept(&self, row: usize, col: usize, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.cells
            .get([row, col])
            .is_some_and(|&cell| cell == self.fill_char || cell == letter)
    }

    /// Write the uppercase form of `letter` without re-validating
    ///
    /// Callers check [`Grid::can_accept`] first. Writes outside the grid are ignored.
    pub fn commit(&mut self, row: usize, col: usize, letter: char) {
        let index = self.linear_index(row, col);
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = letter.to_ascii_uppercase();
            self.word_cells.set(index, true);
        }
    }

    /// Whether the cell holds a committed word letter
    pub fn is_word_cell(&self, row: usize, col: usize) -> bool {
        row < self.size()
            && col < self.size()
            && self.word_cells.get(self.linear_index(row, col)).as_deref() == Some(&true)
    }

    /// Whether the cell still holds the sentinel
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.cells
            .get([row, col])
            .is_some_and(|&cell| cell == self.fill_char)
    }

    /// Number of cells still holding the sentinel
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == self.fill_char)
            .count()
    }

    /// Number of cells written by committed words
    pub fn word_cell_count(&self) -> usize {
        self.word_cells.count_ones()
    }

    /// Overwrite a sentinel cell with a filler letter
    ///
    /// Unlike [`Grid::commit`] the cell is not marked as part of a word.
    pub(crate) fn fill_cell(&mut self, row: usize, col: usize, letter: char) {
        let fill_char = self.fill_char;
        if let Some(cell) = self.cells.get_mut([row, col])
            && *cell == fill_char
        {
            *cell = letter;
        }
    }

    /// Grid contents as rows of characters
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Rows with every non-word cell shown as the sentinel
    pub fn answer_key_rows(&self) -> Vec<Vec<char>> {
        let size = self.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| {
                        if self.is_word_cell(row, col) {
                            self.cells.get([row, col]).copied().unwrap_or(self.fill_char)
                        } else {
                            self.fill_char
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn linear_index(&self, row: usize, col: usize) -> usize {
        row * self.cells.ncols() + col
    }
}
