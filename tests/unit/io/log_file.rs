//! Tests for the run log file

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use std::path::Path;
    use wordsearch::PuzzleError;
    use wordsearch::algorithm::finalizer::{Puzzle, finalize};
    use wordsearch::algorithm::placement::{Placement, try_place};
    use wordsearch::io::log_file::{log_file_path, write_log, write_log_contents};
    use wordsearch::io::render::format_grid;
    use wordsearch::spatial::{Direction, Grid, Position};

    fn puzzle_with(words: &[(&str, Position, Direction)], seed: u64) -> Puzzle {
        let mut grid = Grid::new(6, '-');
        let mut placements = Vec::new();
        for &(word, start, direction) in words {
            assert!(try_place(&mut grid, word, direction, start).is_ok());
            placements.push(Placement {
                word: word.to_string(),
                start,
                direction,
            });
        }
        let mut rng = StdRng::seed_from_u64(seed);

        Puzzle {
            seed,
            grid: finalize(grid, &mut rng),
            placements,
            dropped: Vec::new(),
            total_errors: 0,
        }
    }

    // Tests the file name embeds the seed
    // Verified by naming the file after the process id
    #[test]
    fn test_log_file_path() {
        let path = log_file_path(Path::new("/tmp/runs"), 1_700_000_000);

        assert_eq!(path, Path::new("/tmp/runs/wordsearch_1700000000.log"));
    }

    // Tests the log holds the seed, both grids and one word per line
    // Verified by omitting the answer key
    #[test]
    fn test_log_contents() {
        let puzzle = puzzle_with(
            &[
                ("ANT", Position::new(0, 0), Direction::Right),
                ("BEE", Position::new(5, 5), Direction::Up),
            ],
            31,
        );
        let mut out = Vec::new();

        assert!(write_log_contents(&mut out, &puzzle).is_ok());

        let text = String::from_utf8(out).expect("log is UTF-8");
        assert!(text.starts_with("seed = 31\n"));
        assert!(text.contains(&format_grid(&puzzle.answer_key())));
        assert!(text.contains(&format_grid(&puzzle.rows())));
        assert!(text.ends_with("ANT\nBEE\n"));
    }

    // Tests the log is written under the requested directory
    // Verified by writing to the working directory
    #[test]
    fn test_write_log_creates_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let puzzle = puzzle_with(&[("ELK", Position::new(2, 0), Direction::DownRight)], 77);

        let path = write_log(dir.path(), &puzzle).expect("log written");

        assert_eq!(path, dir.path().join("wordsearch_77.log"));
        let text = std::fs::read_to_string(&path).expect("log readable");
        assert!(text.starts_with("seed = 77\n"));
        assert!(text.ends_with("ELK\n"));
    }

    // Tests an unwritable location reports LogWriteFailed with the path
    // Verified by mapping the failure to FileSystem
    #[test]
    fn test_write_log_missing_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("does-not-exist");
        let puzzle = puzzle_with(&[], 5);

        match write_log(&missing, &puzzle) {
            Err(PuzzleError::LogWriteFailed { path, .. }) => {
                assert_eq!(path, missing.join("wordsearch_5.log"));
            }
            other => unreachable!("Expected LogWriteFailed, got {other:?}"),
        }
    }
}
