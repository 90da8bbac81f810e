//! Game orchestration: arena, score and spawner wired together
//!
//! A move is resolved by checking the arena for matches. When nothing
//! matched, the arena asks for a spawn; the game places new tiles and runs a
//! second check with spawning suppressed, so tiles that happen to complete a
//! line are cleared without triggering another spawn.

use tracing::info;

use crate::io::configuration::{
    DEBUG_POINTS_STEP, DEFAULT_HEIGHT, DEFAULT_PALETTE_SIZE, DEFAULT_REQUIRED_TILES_IN_LINE,
    DEFAULT_SEED, DEFAULT_TILES_PER_SPAWN, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::matching::{Arena, ArenaConfig, MatchOutcome};
use crate::session::hooks::{ScoreSink, SpawnTrigger, TileRemoval};
use crate::session::score::Score;
use crate::session::spawner::Spawner;
use crate::spatial::{Color, Grid, Position, Tile};

/// Game parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Minimum run length that scores
    pub required_tiles_in_line: usize,
    /// Tiles placed per spawn
    pub tiles_per_spawn: usize,
    /// Number of colors spawned tiles are drawn from
    pub palette_size: usize,
    /// Seed for the spawner
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            required_tiles_in_line: DEFAULT_REQUIRED_TILES_IN_LINE,
            tiles_per_spawn: DEFAULT_TILES_PER_SPAWN,
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Hooks the game injects into its arena
#[derive(Debug, Clone, Default)]
pub struct GameHooks {
    score: Score,
    spawn_pending: bool,
    tiles_removed: usize,
}

impl GameHooks {
    /// Accumulated score
    pub const fn score(&self) -> &Score {
        &self.score
    }

    /// Tiles removed since the game started
    pub const fn tiles_removed(&self) -> usize {
        self.tiles_removed
    }

    /// Consume a pending spawn request
    pub const fn take_spawn_request(&mut self) -> bool {
        let pending = self.spawn_pending;
        self.spawn_pending = false;
        pending
    }
}

impl TileRemoval for GameHooks {
    fn remove_tile(&mut self, _tile: Tile, _position: Position) {
        self.tiles_removed += 1;
    }
}

impl ScoreSink for GameHooks {
    fn add_points(&mut self, delta: u32) {
        self.score.add_points(delta);
    }
}

impl SpawnTrigger for GameHooks {
    fn request_spawn(&mut self) {
        self.spawn_pending = true;
    }
}

/// What a move or forced spawn did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Result of the initial check (`None` for forced spawns)
    pub outcome: Option<MatchOutcome>,
    /// Cells filled by the spawner
    pub spawned: Vec<Position>,
    /// Result of the suppressed check after spawning, if a spawn happened
    pub after_spawn: Option<MatchOutcome>,
    /// Score once the move settled
    pub score: i64,
}

impl MoveReport {
    /// Check if any check during this move removed tiles
    pub fn matched(&self) -> bool {
        self.outcome.is_some_and(|outcome| outcome.any())
            || self.after_spawn.is_some_and(|outcome| outcome.any())
    }
}

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    arena: Arena<GameHooks>,
    spawner: Spawner,
    moves: usize,
}

impl Game {
    /// Start a game on an empty board
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid
    pub fn new(config: GameConfig) -> Result<Self> {
        let grid = Grid::new(config.width, config.height)?;
        Self::from_grid(grid, config)
    }

    /// Start a game on an existing board
    ///
    /// `config.width` and `config.height` are ignored in favor of the grid's.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold, spawn size or palette size is invalid
    pub fn from_grid(grid: Grid, config: GameConfig) -> Result<Self> {
        let last_id = grid.occupied().map(|(_, tile)| tile.id.0).max().unwrap_or(0);
        let spawner = Spawner::new(config.seed, config.tiles_per_spawn, config.palette_size)?
            .with_ids_after(last_id);
        let arena = Arena::new(
            grid,
            ArenaConfig {
                required_tiles_in_line: config.required_tiles_in_line,
            },
            GameHooks::default(),
        )?;

        Ok(Self {
            arena,
            spawner,
            moves: 0,
        })
    }

    /// Settle the board after a player move
    ///
    /// # Errors
    ///
    /// Returns an error if the spawner fails to place a tile
    pub fn resolve_move(&mut self) -> Result<MoveReport> {
        self.moves += 1;

        let outcome = self.arena.check_for_matches(false);
        let (spawned, after_spawn) = if self.arena.hooks_mut().take_spawn_request() {
            let (spawned, after) = self.spawn_and_settle()?;
            (spawned, Some(after))
        } else {
            (Vec::new(), None)
        };

        Ok(MoveReport {
            outcome: Some(outcome),
            spawned,
            after_spawn,
            score: self.score(),
        })
    }

    /// Push new tiles regardless of the board state
    ///
    /// # Errors
    ///
    /// Returns an error if the spawner fails to place a tile
    pub fn force_spawn(&mut self) -> Result<MoveReport> {
        let (spawned, after) = self.spawn_and_settle()?;
        Ok(MoveReport {
            outcome: None,
            spawned,
            after_spawn: Some(after),
            score: self.score(),
        })
    }

    fn spawn_and_settle(&mut self) -> Result<(Vec<Position>, MatchOutcome)> {
        let empty = self.arena.get_empty_cells();
        let spawned = self.spawner.spawn(self.arena.grid_mut(), empty)?;
        let after = self.arena.check_for_matches(true);
        Ok((spawned, after))
    }

    /// Draw new colors for the next spawn
    pub fn reroll_next_colors(&mut self) {
        self.spawner.reroll();
    }

    /// Debug: grant a fixed number of points
    pub fn add_bonus(&mut self) {
        self.adjust_score(DEBUG_POINTS_STEP);
    }

    /// Debug: take away a fixed number of points
    pub fn subtract_bonus(&mut self) {
        self.adjust_score(-DEBUG_POINTS_STEP);
    }

    fn adjust_score(&mut self, delta: i64) {
        info!(delta, "debug score adjustment");
        self.arena.hooks_mut().score.adjust(delta);
    }

    /// Clear the whole board without scoring
    pub fn reset(&mut self) {
        self.arena.remove_all_tiles();
    }

    /// Check if no empty cell is left for spawning
    pub fn is_board_full(&self) -> bool {
        self.arena.grid().is_full()
    }

    /// Current score
    pub const fn score(&self) -> i64 {
        self.arena.hooks().score().points()
    }

    /// The arena this game plays on
    pub const fn arena(&self) -> &Arena<GameHooks> {
        &self.arena
    }

    /// Colors the next spawn will place
    pub fn next_colors(&self) -> &[Color] {
        self.spawner.next_colors()
    }

    /// Moves resolved so far
    pub const fn moves(&self) -> usize {
        self.moves
    }
}
