//! The eight placement directions and their start-position samplers

use rand::Rng;

use crate::spatial::grid::Position;

/// One of the eight straight lines a word can follow through the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Right,
    /// Right to left along a row
    Left,
    /// Top to bottom along a column
    Down,
    /// Bottom to top along a column
    Up,
    /// Diagonal towards the bottom-right corner
    DownRight,
    /// Diagonal towards the bottom-left corner
    DownLeft,
    /// Diagonal towards the top-right corner
    UpRight,
    /// Diagonal towards the top-left corner
    UpLeft,
}

impl Direction {
    /// Every direction, in sampling order
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// Row and column increments for one letter
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::DownRight => (1, 1),
            Self::DownLeft => (1, -1),
            Self::UpRight => (-1, 1),
            Self::UpLeft => (-1, -1),
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
            Self::Up => "up",
            Self::DownRight => "down-right",
            Self::DownLeft => "down-left",
            Self::UpRight => "up-right",
            Self::UpLeft => "up-left",
        }
    }

    /// Pick a direction uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.random_range(0..Self::ALL.len());
        Self::ALL.get(index).copied().unwrap_or(Self::Right)
    }

    /// Range of valid start indices on one axis
    ///
    /// A forward step needs `length - 1` cells after the start, a backward step
    /// needs them before it. Returns `None` when the word cannot fit at all.
    pub const fn start_range(
        step: isize,
        length: usize,
        size: usize,
    ) -> Option<std::ops::RangeInclusive<usize>> {
        if length == 0 || length > size {
            return None;
        }
        let span = size - length;
        Some(match step {
            0 => 0..=size - 1,
            s if s > 0 => 0..=span,
            _ => length - 1..=span + length - 1,
        })
    }

    /// Sample a start so the whole word stays inside a `size`×`size` grid
    ///
    /// The row is drawn before the column. Returns `None` for empty words and
    /// words longer than the grid.
    pub fn sample_start<R: Rng + ?Sized>(
        self,
        length: usize,
        size: usize,
        rng: &mut R,
    ) -> Option<Position> {
        let (dr, dc) = self.delta();
        let rows = Self::start_range(dr, length, size)?;
        let cols = Self::start_range(dc, length, size)?;
        let row = rng.random_range(rows);
        let col = rng.random_range(cols);
        Some(Position::new(row, col))
    }

    /// Position `offset` letters along the direction from `start`
    ///
    /// Returns `None` if the step would leave the non-negative quadrant.
    pub const fn step(self, start: Position, offset: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let offset = offset as isize;
        let Some(row) = start.row.checked_add_signed(dr * offset) else {
            return None;
        };
        let Some(col) = start.col.checked_add_signed(dc * offset) else {
            return None;
        };
        Some(Position::new(row, col))
    }

    /// Positions covered by a word of `length` letters starting at `start`
    pub fn path(self, start: Position, length: usize) -> impl Iterator<Item = Position> {
        (0..length).map_while(move |offset| self.step(start, offset))
    }

    /// Last cell covered by a word of `length` letters starting at `start`
    pub const fn end(self, start: Position, length: usize) -> Option<Position> {
        if length == 0 {
            return None;
        }
        self.step(start, length - 1)
    }
}
