//! Tests for grid and word list layout

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use wordsearch::algorithm::finalizer::{Puzzle, finalize};
    use wordsearch::algorithm::placement::{Placement, try_place};
    use wordsearch::io::configuration::ANSWER_KEY_HEADER;
    use wordsearch::io::render::{format_grid, format_word_list, word_column_width, write_puzzle};
    use wordsearch::spatial::{Direction, Grid, Position};

    fn small_puzzle() -> Puzzle {
        let mut grid = Grid::new(4, '-');
        assert!(try_place(&mut grid, "OWL", Direction::Down, Position::new(0, 0)).is_ok());
        let mut rng = StdRng::seed_from_u64(9);

        Puzzle {
            seed: 9,
            grid: finalize(grid, &mut rng),
            placements: vec![Placement {
                word: "OWL".to_string(),
                start: Position::new(0, 0),
                direction: Direction::Down,
            }],
            dropped: Vec::new(),
            total_errors: 0,
        }
    }

    // Tests cells are space separated with one line per row
    // Verified by joining cells without separators
    #[test]
    fn test_format_grid() {
        let rows = vec![vec!['A', 'B'], vec!['C', 'D']];

        assert_eq!(format_grid(&rows), "A B\nC D");
        assert_eq!(format_grid(&[]), "");
    }

    // Tests the column width is one more than the longest accepted word
    // Verified by using the grid size as the width
    #[test]
    fn test_word_column_width() {
        assert_eq!(word_column_width(20), 19);
        assert_eq!(word_column_width(5), 4);
    }

    // Tests words are right-aligned and wrap after the column count
    // Verified by left-aligning words
    #[test]
    fn test_format_word_list() {
        let words = ["CAT", "DOG", "SUN", "OWL"];

        assert_eq!(
            format_word_list(&words, 4, 3),
            " CAT DOG SUN\n OWL"
        );
        assert_eq!(format_word_list(&[], 4, 3), "");
    }

    // Tests the printed layout: key, blank gap, puzzle, then the word list
    // Verified by printing the puzzle before the key
    #[test]
    fn test_write_puzzle_layout() {
        let puzzle = small_puzzle();
        let mut out = Vec::new();

        assert!(write_puzzle(&mut out, &puzzle).is_ok());

        let text = String::from_utf8(out).expect("output is UTF-8");
        let expected = format!(
            "{ANSWER_KEY_HEADER}\nO - - -\nW - - -\nL - - -\n- - - -\n\n\n\n{}\n\nOWL\n",
            format_grid(&puzzle.rows())
        );
        assert_eq!(text, expected);
    }
}
