//! Text layout of the answer key, the puzzle grid and the word list

use std::io::Write;

use crate::algorithm::finalizer::Puzzle;
use crate::io::configuration::{ANSWER_KEY_HEADER, WORD_LENGTH_MARGIN, WORD_LIST_COLUMNS};

/// One line per row, cells separated by single spaces
pub fn format_grid(rows: &[Vec<char>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Column width used for the word list of a grid with side `grid_size`
///
/// One wider than the longest word the grid accepts.
pub const fn word_column_width(grid_size: usize) -> usize {
    grid_size.saturating_sub(WORD_LENGTH_MARGIN) + 1
}

/// Words right-aligned in fixed-width columns, `columns` per line
pub fn format_word_list(words: &[&str], width: usize, columns: usize) -> String {
    words
        .chunks(columns.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|word| format!("{word:>width$}"))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the answer key, the filled puzzle and the word list
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_puzzle<W: Write>(out: &mut W, puzzle: &Puzzle) -> std::io::Result<()> {
    writeln!(out, "{ANSWER_KEY_HEADER}")?;
    writeln!(out, "{}", format_grid(&puzzle.answer_key()))?;
    writeln!(out, "\n\n")?;
    writeln!(out, "{}", format_grid(&puzzle.rows()))?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format_word_list(
            &puzzle.words(),
            word_column_width(puzzle.grid.size()),
            WORD_LIST_COLUMNS
        )
    )?;
    out.flush()
}
