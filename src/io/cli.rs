//! Command-line interface for checking boards and simulating games

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;

use crate::io::board::{format_board, load_board, save_board};
use crate::io::configuration::{
    CELL_PIXELS, DEFAULT_HEIGHT, DEFAULT_PALETTE_SIZE, DEFAULT_REQUIRED_TILES_IN_LINE,
    DEFAULT_ROUNDS, DEFAULT_SEED, DEFAULT_TILES_PER_SPAWN, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::RoundProgress;
use crate::matching::{Arena, ArenaConfig};
use crate::session::{Game, GameConfig, RecordingHooks};
use crate::spatial::Grid;

#[derive(Parser, Debug)]
#[command(name = "tilematch")]
#[command(author, version, about = "Check tile-matching boards and simulate games")]
/// Command-line arguments for the tilematch tool
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a board file and run a single match check
    Check(CheckArgs),
    /// Play a seeded game where every move spawns random tiles
    Simulate(SimulateArgs),
}

/// Arguments of the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Board text file (`.` empty, `R G B Y P O` colors)
    #[arg(value_name = "BOARD")]
    pub board: PathBuf,

    /// Minimum run length that scores
    #[arg(short, long, default_value_t = DEFAULT_REQUIRED_TILES_IN_LINE)]
    pub threshold: usize,

    /// Never request a spawn, even when nothing matched
    #[arg(short, long)]
    pub suppress_spawn: bool,

    /// Write the resulting board to this text file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export the resulting board as PNG
    #[arg(long)]
    pub png: Option<PathBuf>,
}

/// Arguments of the `simulate` command
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Random seed for reproducible games
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Board width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Minimum run length that scores
    #[arg(short, long, default_value_t = DEFAULT_REQUIRED_TILES_IN_LINE)]
    pub threshold: usize,

    /// Tiles placed per spawn
    #[arg(short = 'n', long, default_value_t = DEFAULT_TILES_PER_SPAWN)]
    pub spawn: usize,

    /// Number of tile colors in play
    #[arg(short, long, default_value_t = DEFAULT_PALETTE_SIZE)]
    pub colors: usize,

    /// Maximum number of moves
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: usize,

    /// Write the final board to this text file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export the final board as PNG
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SimulateArgs {
    /// Game configuration described by these arguments
    pub const fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            required_tiles_in_line: self.threshold,
            tiles_per_spawn: self.spawn,
            palette_size: self.colors,
            seed: self.seed,
        }
    }
}

/// Executes the parsed command, writing its report to `out`
pub struct CommandRunner<W> {
    cli: Cli,
    out: W,
}

impl<W: Write> CommandRunner<W> {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli, out: W) -> Self {
        Self { cli, out }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a board cannot be
    /// loaded, or an output file cannot be written
    pub fn process(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::Check(args) => {
                let report = run_check(args)?;
                self.out.write_all(report.as_bytes())?;
            }
            Command::Simulate(args) => {
                let report = run_simulation(args)?;
                self.out.write_all(report.as_bytes())?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Consume the runner, returning its output sink
    pub fn into_output(self) -> W {
        self.out
    }
}

fn run_check(args: &CheckArgs) -> Result<String> {
    let grid = load_board(&args.board)?;
    info!(
        path = %args.board.display(),
        width = grid.width(),
        height = grid.height(),
        cells = grid.cell_count(),
        empty = grid.empty_count(),
        "loaded board"
    );

    let mut arena = Arena::new(
        grid,
        ArenaConfig {
            required_tiles_in_line: args.threshold,
        },
        RecordingHooks::new(),
    )?;
    let outcome = arena.check_for_matches(args.suppress_spawn);
    let (grid, hooks) = arena.into_parts();

    let mut report = String::new();
    report.push_str(&format!("rows matched: {}\n", yes_no(outcome.rows)));
    report.push_str(&format!("columns matched: {}\n", yes_no(outcome.columns)));
    report.push_str(&format!("tiles removed: {}\n", hooks.removed.len()));
    report.push_str(&format!("points: {}\n", hooks.total_points()));
    report.push_str(&format!(
        "spawn requested: {}\n",
        yes_no(outcome.spawn_requested)
    ));
    report.push_str(&format_board(&grid));

    write_outputs(&grid, args.output.as_ref(), args.png.as_ref())?;
    Ok(report)
}

fn run_simulation(args: &SimulateArgs) -> Result<String> {
    let mut game = Game::new(args.game_config())?;
    let progress = RoundProgress::new(args.rounds, !args.quiet);

    for _ in 0..args.rounds {
        let report = game.resolve_move()?;
        progress.advance(report.score);

        if !report.matched() && game.is_board_full() {
            info!(moves = game.moves(), "board full, no moves left");
            break;
        }
    }
    progress.finish(game.score());

    let mut report = String::new();
    report.push_str(&format!("moves: {}\n", game.moves()));
    report.push_str(&format!(
        "tiles removed: {}\n",
        game.arena().hooks().tiles_removed()
    ));
    report.push_str(&format!("score: {}\n", game.score()));
    report.push_str(&format_board(game.arena().grid()));

    write_outputs(game.arena().grid(), args.output.as_ref(), args.png.as_ref())?;
    Ok(report)
}

fn write_outputs(grid: &Grid, text: Option<&PathBuf>, png: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = text {
        save_board(grid, path)?;
    }
    if let Some(path) = png {
        export_grid_as_png(grid, path, CELL_PIXELS)?;
    }
    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
