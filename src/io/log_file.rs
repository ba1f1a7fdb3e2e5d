//! Run log holding the seed, both grids and the hidden words

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::algorithm::finalizer::Puzzle;
use crate::io::configuration::{ANSWER_KEY_HEADER, LOG_FILE_PREFIX};
use crate::io::error::{PuzzleError, Result};
use crate::io::render::format_grid;

/// Log file location for a run with `seed`
pub fn log_file_path(dir: &Path, seed: u64) -> PathBuf {
    dir.join(format!("{LOG_FILE_PREFIX}{seed}.log"))
}

/// Write the log body to any writer
///
/// # Errors
///
/// Returns any error from the underlying writer
pub fn write_log_contents<W: Write>(out: &mut W, puzzle: &Puzzle) -> std::io::Result<()> {
    writeln!(out, "seed = {}", puzzle.seed)?;
    writeln!(out)?;
    writeln!(out, "{ANSWER_KEY_HEADER}")?;
    writeln!(out, "{}", format_grid(&puzzle.answer_key()))?;
    writeln!(out)?;
    writeln!(out, "{}", format_grid(&puzzle.rows()))?;
    writeln!(out)?;
    for word in puzzle.words() {
        writeln!(out, "{word}")?;
    }
    out.flush()
}

/// Write the run log into `dir`, returning its path
///
/// # Errors
///
/// Returns `LogWriteFailed` if the file cannot be created or written
pub fn write_log(dir: &Path, puzzle: &Puzzle) -> Result<PathBuf> {
    let path = log_file_path(dir, puzzle.seed);
    let outcome = File::create(&path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_log_contents(&mut writer, puzzle)
    });

    match outcome {
        Ok(()) => Ok(path),
        Err(source) => Err(PuzzleError::LogWriteFailed { path, source }),
    }
}
