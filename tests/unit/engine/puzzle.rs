//! Tests for the puzzle facade

#[cfg(test)]
mod tests {
    use tiltboard::board::tile::{TileColor, TileKind};
    use tiltboard::engine::puzzle::Puzzle;
    use tiltboard::engine::tilt::Direction;
    use tiltboard::io::error::PuzzleError;

    fn puzzle(starting: &[&str], ending: &[&str]) -> Puzzle {
        match Puzzle::from_symbols(starting, ending) {
            Ok(puzzle) => puzzle,
            Err(_) => unreachable!(),
        }
    }

    // Tests construction variants agree on dimensions and contents
    #[test]
    fn test_construction_variants() {
        let Ok(empty) = Puzzle::new(2, 3) else {
            unreachable!()
        };
        assert_eq!((empty.rows(), empty.cols()), (2, 3));
        assert_eq!(empty.tile_count(), 0);

        let Ok(goal_only) = Puzzle::from_ending(&["rb", ".."]) else {
            unreachable!()
        };
        assert_eq!(goal_only.tile_count(), 0);
        assert_eq!(goal_only.ending_snapshot().symbol_rows(), ["rb", ".."]);

        let full = puzzle(&["r."], &[".r"]);
        assert_eq!(full.tile_count(), 1);
    }

    // Tests adding and deleting tiles through the facade
    #[test]
    fn test_add_and_delete_tiles() {
        let Ok(mut puzzle) = Puzzle::new(2, 2) else {
            unreachable!()
        };
        assert!(puzzle.add_tile(0, 0, TileColor::Red, TileKind::Normal).is_ok());
        assert!(puzzle.add_tile(1, 1, TileColor::Blue, TileKind::Fixed).is_ok());
        assert_eq!(puzzle.tile_count(), 2);

        assert!(puzzle.delete_tile(0, 0).is_ok());
        assert!(matches!(
            puzzle.delete_tile(1, 1),
            Err(PuzzleError::Protected { row: 1, col: 1 })
        ));
        assert_eq!(puzzle.tile_count(), 1);
    }

    // Tests deleting a glued tile drops its membership too
    #[test]
    fn test_delete_discards_glue_membership() {
        let mut puzzle = puzzle(&["rg"], &[".."]);
        assert!(puzzle.glue(0, 0).is_ok());
        assert_eq!(puzzle.glue_registry().group_count(), 1);

        assert!(puzzle.delete_tile(0, 0).is_ok());
        assert!(puzzle.delete_tile(0, 1).is_ok());
        assert_eq!(puzzle.glue_registry().group_count(), 0);
    }

    // Tests facade gluing picks up occupied orthogonal neighbors only
    #[test]
    fn test_glue_binds_orthogonal_neighbors() {
        let mut puzzle = puzzle(&[".b.", "brb", ".b."], &["...", "...", "..."]);
        assert!(puzzle.glue(1, 1).is_ok());

        let registry = puzzle.glue_registry();
        assert_eq!(registry.group_count(), 1);
        let glued = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(|&(row, col)| {
                puzzle
                    .tile_at(row, col)
                    .ok()
                    .flatten()
                    .is_some_and(|tile| registry.is_glued(tile.id))
            })
            .count();
        assert_eq!(glued, 5, "anchor plus four orthogonal neighbors");
    }

    // Tests gluing an empty cell is reported
    #[test]
    fn test_glue_rejects_empty_cells() {
        let mut puzzle = puzzle(&["r."], &[".."]);
        assert!(matches!(
            puzzle.glue(0, 1),
            Err(PuzzleError::NotFound { row: 0, col: 1 })
        ));
        assert!(matches!(
            puzzle.unglue(0, 0),
            Err(PuzzleError::NotGlued { row: 0, col: 0 })
        ));
    }

    // Tests relocation through the facade keeps glue consistent on absorption
    #[test]
    fn test_relocate_onto_a_hole_discards_membership() {
        let mut puzzle = puzzle(&["rg.o"], &["...."]);
        assert!(puzzle.glue(0, 0).is_ok());
        assert!(puzzle.relocate((0, 1), (0, 3)).is_ok());

        assert_eq!(puzzle.tile_count(), 2, "red tile and the hole remain");
        let survivors = puzzle
            .tile_at(0, 0)
            .ok()
            .flatten()
            .map(|tile| puzzle.glue_registry().is_glued(tile.id));
        assert_eq!(survivors, Some(true), "the red tile keeps its membership");
    }

    // Tests tilt symbols drive the engine and invalid ones are rejected
    #[test]
    fn test_tilt_symbol_parses_before_tilting() {
        let mut puzzle = puzzle(&["..r"], &["r.."]);
        assert!(matches!(
            puzzle.tilt_symbol('q'),
            Err(PuzzleError::InvalidDirection { symbol: 'q' })
        ));
        let report = puzzle.tilt_symbol('l');
        assert!(report.is_ok_and(|report| report.moves == 2));
        assert!(puzzle.is_goal());
    }

    // Tests auto tilt reports the direction it applied
    #[test]
    fn test_auto_tilt_solves_a_one_move_board() {
        let mut puzzle = puzzle(&["rg."], &[".rg"]);
        assert_eq!(puzzle.misplaced_count(), 2);
        assert_eq!(puzzle.auto_tilt(), Direction::Right);
        assert_eq!(puzzle.misplaced_count(), 0);
        assert!(puzzle.is_goal());
    }

    // Tests the immovability analysis is reachable through the facade
    #[test]
    fn test_fixed_positions_through_the_facade() {
        let puzzle = puzzle(&["B.", ".r"], &["..", ".."]);
        assert_eq!(puzzle.fixed_positions(), vec![(0, 0)]);
    }

    // Tests holes form through the facade and absorb during tilts
    #[test]
    fn test_make_hole_and_tilt_absorption() {
        let mut puzzle = puzzle(&["r.."], &["..."]);
        assert!(puzzle.make_hole(0, 2).is_ok());
        assert_eq!(puzzle.tile_count(), 2);

        let report = puzzle.tilt(Direction::Right);
        assert_eq!(report.absorptions, 1);
        assert_eq!(puzzle.tile_count(), 1);
        assert_eq!(puzzle.snapshot().symbol_rows(), ["..o"]);
    }

    // Tests exchange swaps the playable board with its goal layout
    #[test]
    fn test_exchange_swaps_board_and_goal() {
        let mut puzzle = puzzle(&["r.", ".o"], &[".b", "g."]);
        puzzle.exchange();

        assert_eq!(puzzle.snapshot().symbol_rows(), [".b", "g."]);
        assert_eq!(puzzle.ending_snapshot().symbol_rows(), ["r.", ".o"]);
        assert!(
            puzzle
                .tile_at(1, 0)
                .ok()
                .flatten()
                .is_some_and(|tile| tile.color == TileColor::Green)
        );

        puzzle.exchange();
        assert_eq!(puzzle.snapshot().symbol_rows(), ["r.", ".o"]);
        assert_eq!(puzzle.ending_snapshot().symbol_rows(), [".b", "g."]);
    }

    // Tests glue groups go dormant across an exchange and return with it
    #[test]
    fn test_exchange_round_trip_preserves_glue_membership() {
        let mut puzzle = puzzle(&["rg.", "..."], &["...", "..."]);
        assert!(puzzle.glue(0, 0).is_ok());

        puzzle.exchange();
        assert_eq!(puzzle.tile_count(), 0, "the goal side was empty");
        assert_eq!(puzzle.glue_registry().group_count(), 1);

        puzzle.exchange();
        // The pair still tilts as a rigid body
        puzzle.tilt(Direction::Right);
        assert_eq!(puzzle.snapshot().symbol_rows(), [".rg", "..."]);
    }

    // Tests reset clears tiles and groups but keeps the goal
    #[test]
    fn test_reset_clears_board_and_glue_but_keeps_the_goal() {
        let mut puzzle = puzzle(&["rg"], &["gr"]);
        assert!(puzzle.glue(0, 0).is_ok());
        puzzle.reset();

        assert_eq!(puzzle.tile_count(), 0);
        assert_eq!(puzzle.glue_registry().group_count(), 0);
        assert_eq!(puzzle.ending_snapshot().symbol_rows(), ["gr"]);
        assert_eq!(puzzle.misplaced_count(), 2);
    }

    // Tests cell queries propagate bounds errors
    #[test]
    fn test_tile_at_rejects_out_of_bounds_indices() {
        let puzzle = puzzle(&["r."], &[".."]);
        assert!(matches!(
            puzzle.tile_at(3, 3),
            Err(PuzzleError::OutOfBounds { .. })
        ));
        assert!(puzzle.tile_at(0, 1).is_ok_and(|tile| tile.is_none()));
    }
}
