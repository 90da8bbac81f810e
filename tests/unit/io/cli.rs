//! Tests for argument parsing and the check/simulate commands

#[cfg(test)]
mod tests {

    use std::fs;

    use clap::Parser;
    use tilematch::io::board::load_board;
    use tilematch::io::cli::{Cli, Command, CommandRunner};

    fn run(args: &[&str]) -> tilematch::Result<String> {
        let cli = Cli::try_parse_from(args.iter().copied())
            .unwrap_or_else(|error| unreachable!("arguments should parse: {error}"));
        let mut runner = CommandRunner::new(cli, Vec::new());
        runner.process()?;
        Ok(String::from_utf8_lossy(&runner.into_output()).into_owned())
    }

    #[test]
    fn test_simulate_defaults() {
        let Ok(cli) = Cli::try_parse_from(["tilematch", "simulate"]) else {
            unreachable!("defaults should parse");
        };

        assert_eq!(cli.verbose, 0);
        let Command::Simulate(args) = cli.command else {
            unreachable!("expected simulate command");
        };
        let config = args.game_config();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.required_tiles_in_line, 3);
        assert_eq!(config.seed, 42);
        assert!(!args.quiet);
    }

    #[test]
    fn test_verbosity_counts_flags() {
        let Ok(cli) = Cli::try_parse_from(["tilematch", "-vv", "check", "board.txt"]) else {
            unreachable!("arguments should parse");
        };

        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn test_missing_command_rejected() {
        assert!(Cli::try_parse_from(["tilematch"]).is_err());
    }

    #[test]
    fn test_check_reports_and_writes_outputs() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let board = dir.path().join("board.txt");
        let result_board = dir.path().join("out").join("result.txt");
        let png = dir.path().join("out").join("result.png");
        if fs::write(&board, "BBBB\nRGYR\n").is_err() {
            unreachable!("board file should be writable");
        }

        let board_arg = board.to_string_lossy().into_owned();
        let output_arg = result_board.to_string_lossy().into_owned();
        let png_arg = png.to_string_lossy().into_owned();

        let output = run(&[
            "tilematch",
            "check",
            &board_arg,
            "--output",
            &output_arg,
            "--png",
            &png_arg,
        ]);

        let Ok(output) = output else {
            unreachable!("check should succeed");
        };
        assert!(output.contains("rows matched: yes"));
        assert!(output.contains("columns matched: no"));
        assert!(output.contains("tiles removed: 4"));
        assert!(output.contains("points: 1"));
        assert!(output.contains("spawn requested: no"));
        assert!(output.ends_with("....\nRGYR\n"));
        assert!(png.exists());
        assert!(load_board(&result_board).is_ok_and(|grid| grid.empty_count() == 4));
    }

    #[test]
    fn test_check_without_match_requests_spawn_unless_suppressed() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let board = dir.path().join("board.txt");
        if fs::write(&board, "RGB\n").is_err() {
            unreachable!("board file should be writable");
        }
        let board_arg = board.to_string_lossy().into_owned();

        let plain = run(&["tilematch", "check", &board_arg]);
        let suppressed = run(&["tilematch", "check", &board_arg, "--suppress-spawn"]);

        assert!(plain.is_ok_and(|output| output.contains("spawn requested: yes")));
        assert!(suppressed.is_ok_and(|output| output.contains("spawn requested: no")));
    }

    #[test]
    fn test_check_missing_board_fails() {
        let result = run(&["tilematch", "check", "definitely/not/here.txt"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_simulate_quiet_run() {
        let output = run(&[
            "tilematch",
            "simulate",
            "--quiet",
            "--seed",
            "3",
            "--width",
            "5",
            "-H",
            "4",
            "--rounds",
            "25",
        ]);

        let Ok(output) = output else {
            unreachable!("simulation should succeed");
        };
        assert!(output.starts_with("moves: "));
        assert!(output.contains("score: "));
        // Four board rows of five cells follow the summary
        let board_rows: Vec<&str> = output.lines().skip(3).collect();
        assert_eq!(board_rows.len(), 4);
        assert!(board_rows.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_simulate_stops_once_board_is_full() {
        // Runs of three never fit on a 2x2 board, so every move only spawns
        let output = run(&[
            "tilematch", "simulate", "--quiet", "--width", "2", "-H", "2", "--rounds", "50",
        ]);

        let Ok(output) = output else {
            unreachable!("simulation should succeed");
        };
        assert!(output.starts_with("moves: 2\n"));
        assert!(output.contains("tiles removed: 0\n"));
        assert!(!output.contains('.'));
    }

    #[test]
    fn test_single_tile_threshold_rejected() {
        let result = run(&["tilematch", "simulate", "--quiet", "--threshold", "1"]);

        assert!(matches!(
            result,
            Err(tilematch::ArenaError::InvalidParameter {
                parameter: "required_tiles_in_line",
                ..
            })
        ));
    }

    #[test]
    fn test_simulate_rejects_bad_palette() {
        let result = run(&["tilematch", "simulate", "--quiet", "--colors", "9"]);

        assert!(result.is_err());
    }
}
