//! Tests for arena construction, check outcomes and board resets

#[cfg(test)]
mod tests {

    use tilematch::ArenaError;
    use tilematch::io::board::parse_board;
    use tilematch::matching::{Arena, ArenaConfig, MatchOutcome};
    use tilematch::session::RecordingHooks;
    use tilematch::spatial::{Grid, Position};

    fn arena(board: &str) -> Arena<RecordingHooks> {
        let grid = parse_board(board).unwrap_or_else(|error| unreachable!("bad board: {error}"));
        Arena::new(grid, ArenaConfig::default(), RecordingHooks::new())
            .unwrap_or_else(|error| unreachable!("bad arena: {error}"))
    }

    #[test]
    fn test_default_config_threshold() {
        assert_eq!(ArenaConfig::default().required_tiles_in_line, 3);
        assert_eq!(arena("RGB").required_tiles_in_line(), 3);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let Ok(grid) = Grid::new(3, 3) else {
            unreachable!("3x3 grid should be valid");
        };

        let result = Arena::new(
            grid,
            ArenaConfig {
                required_tiles_in_line: 0,
            },
            RecordingHooks::new(),
        );

        assert!(matches!(result, Err(ArenaError::InvalidParameter { .. })));
    }

    #[test]
    fn test_single_tile_threshold_rejected() {
        let Ok(grid) = Grid::new(2, 3) else {
            unreachable!("2x3 grid should be valid");
        };

        let result = Arena::new(
            grid,
            ArenaConfig {
                required_tiles_in_line: 1,
            },
            RecordingHooks::new(),
        );

        assert!(matches!(result, Err(ArenaError::InvalidParameter { .. })));
    }

    #[test]
    fn test_outcome_any() {
        assert!(!MatchOutcome::default().any());
        assert!(
            MatchOutcome {
                rows: true,
                ..MatchOutcome::default()
            }
            .any()
        );
        assert!(
            MatchOutcome {
                columns: true,
                ..MatchOutcome::default()
            }
            .any()
        );
    }

    // Verified by requesting a spawn regardless of the match result
    #[test]
    fn test_spawn_requested_only_without_matches() {
        let mut matching = arena("YYY");
        let mut stale = arena("YBY");

        assert!(!matching.check_for_matches(false).spawn_requested);
        assert!(stale.check_for_matches(false).spawn_requested);
        assert_eq!(matching.hooks().spawn_requests, 0);
        assert_eq!(stale.hooks().spawn_requests, 1);
    }

    #[test]
    fn test_second_check_after_clear_requests_spawn() {
        let mut arena = arena("BBB\nRGY");

        let first = arena.check_for_matches(false);
        let second = arena.check_for_matches(false);

        assert!(first.rows);
        assert!(!second.any());
        assert!(second.spawn_requested);
        assert_eq!(arena.hooks().points, vec![0]);
    }

    #[test]
    fn test_empty_cells_after_reset() {
        let mut arena = arena("RG\nBY");

        assert!(arena.get_empty_cells().is_empty());
        arena.remove_all_tiles();

        assert_eq!(
            arena.get_empty_cells(),
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );
        assert_eq!(arena.hooks().removed.len(), 4);
    }

    #[test]
    fn test_grid_mut_and_into_parts() {
        let mut arena = arena("R.");
        let tile = arena.grid_mut().take(Position::new(0, 0));

        let (grid, hooks) = arena.into_parts();

        assert!(tile.is_some());
        assert_eq!(grid.empty_count(), 2);
        // Direct grid edits bypass the hooks
        assert!(hooks.removed.is_empty());
    }
}
