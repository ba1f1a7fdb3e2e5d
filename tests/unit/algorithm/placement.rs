//! Tests for validate-then-commit word placement

#[cfg(test)]
mod tests {
    use wordsearch::algorithm::placement::{Placement, find_conflict, try_place};
    use wordsearch::spatial::{Direction, Grid, Position};

    // Tests a clean placement writes every letter uppercase along the path
    // Verified by committing only the first letter
    #[test]
    fn test_try_place_commits_uppercase_letters() {
        let mut grid = Grid::new(6, '-');

        let result = try_place(&mut grid, "cat", Direction::DownRight, Position::new(1, 1));

        assert!(result.is_ok());
        assert_eq!(grid.cell_at(1, 1).ok(), Some('C'));
        assert_eq!(grid.cell_at(2, 2).ok(), Some('A'));
        assert_eq!(grid.cell_at(3, 3).ok(), Some('T'));
        assert_eq!(grid.word_cell_count(), 3);
    }

    // Tests a conflicting path leaves the grid byte-for-byte unchanged
    // Verified by committing letters during the validation pass
    #[test]
    fn test_conflict_leaves_grid_unchanged() {
        let mut grid = Grid::new(6, '-');
        grid.commit(0, 3, 'Z');
        let before = grid.clone();

        let conflict = try_place(&mut grid, "HOUSE", Direction::Right, Position::new(0, 0))
            .expect_err("'S' cannot overwrite 'Z'");

        assert_eq!(grid, before);
        assert_eq!(conflict.position, Position::new(0, 3));
        assert_eq!(conflict.letter, 'S');
        assert_eq!(conflict.existing, Some('Z'));
    }

    // Tests words may cross where they agree on the shared letter
    // Verified by rejecting any non-empty cell
    #[test]
    fn test_crossing_on_shared_letter() {
        let mut grid = Grid::new(5, '-');
        assert!(try_place(&mut grid, "DOG", Direction::Right, Position::new(1, 0)).is_ok());
        assert!(try_place(&mut grid, "TOP", Direction::Down, Position::new(0, 1)).is_ok());

        assert_eq!(grid.cell_at(1, 1).ok(), Some('O'));
        assert_eq!(grid.word_cell_count(), 5);
    }

    // Tests a path leaving the grid is reported instead of written
    // Verified by skipping bounds-aware acceptance
    #[test]
    fn test_out_of_grid_path_is_a_conflict() {
        let mut grid = Grid::new(4, '-');
        let before = grid.clone();

        let conflict = try_place(&mut grid, "WORDS", Direction::Right, Position::new(0, 1))
            .expect_err("path runs off the right edge");
        assert_eq!(conflict.existing, None);
        assert_eq!(grid, before);

        let upwards = find_conflict(&grid, "UP", Direction::Up, Position::new(0, 0));
        assert!(upwards.is_some());
    }

    // Tests the reverse reading direction writes letters backwards in column order
    // Verified by stepping columns forward for Left
    #[test]
    fn test_backward_placement() {
        let mut grid = Grid::new(5, '-');
        assert!(try_place(&mut grid, "ABC", Direction::Left, Position::new(4, 4)).is_ok());

        assert_eq!(grid.cell_at(4, 4).ok(), Some('A'));
        assert_eq!(grid.cell_at(4, 3).ok(), Some('B'));
        assert_eq!(grid.cell_at(4, 2).ok(), Some('C'));
    }

    // Tests a placement record enumerates its cells in letter order
    // Verified by reversing the cell iterator
    #[test]
    fn test_placement_cells() {
        let placement = Placement {
            word: "OWL".to_string(),
            start: Position::new(2, 0),
            direction: Direction::UpRight,
        };

        assert_eq!(placement.len(), 3);
        assert!(!placement.is_empty());
        let cells: Vec<Position> = placement.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(2, 0),
                Position::new(1, 1),
                Position::new(0, 2)
            ]
        );
    }
}
