//! Arena: the grid plus the operations the game drives it with

use tracing::{debug, info};

use crate::io::configuration::DEFAULT_REQUIRED_TILES_IN_LINE;
use crate::io::error::Result;
use crate::matching::matcher::LineMatcher;
use crate::session::hooks::ArenaHooks;
use crate::spatial::{Axis, Grid, Position};

/// Arena parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Minimum run length that scores and is removed
    pub required_tiles_in_line: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            required_tiles_in_line: DEFAULT_REQUIRED_TILES_IN_LINE,
        }
    }
}

/// Which axes produced matches during one check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// At least one row run was removed
    pub rows: bool,
    /// At least one column run was removed
    pub columns: bool,
    /// The spawn trigger was called
    pub spawn_requested: bool,
}

impl MatchOutcome {
    /// Check if either axis matched
    pub const fn any(&self) -> bool {
        self.rows || self.columns
    }
}

/// Grid owner that detects matches and reports to its hooks
#[derive(Debug, Clone)]
pub struct Arena<H> {
    grid: Grid,
    matcher: LineMatcher,
    hooks: H,
}

impl<H: ArenaHooks> Arena<H> {
    /// Create an arena over `grid`, reporting to `hooks`
    ///
    /// # Errors
    ///
    /// Returns an error if the configured threshold is below two
    pub fn new(grid: Grid, config: ArenaConfig, hooks: H) -> Result<Self> {
        let matcher = LineMatcher::new(config.required_tiles_in_line)?;
        Ok(Self {
            grid,
            matcher,
            hooks,
        })
    }

    /// Scan rows, then columns, removing every qualifying run
    ///
    /// Column scanning sees the grid after row removals. When nothing matched
    /// the spawn trigger is called, unless `suppress_spawn_on_no_match` is set
    /// (used for checks issued right after a spawn).
    pub fn check_for_matches(&mut self, suppress_spawn_on_no_match: bool) -> MatchOutcome {
        let rows = self
            .matcher
            .scan_axis(&mut self.grid, Axis::Row, &mut self.hooks);
        let columns = self
            .matcher
            .scan_axis(&mut self.grid, Axis::Column, &mut self.hooks);

        let spawn_requested = !suppress_spawn_on_no_match && !rows && !columns;
        if spawn_requested {
            self.hooks.request_spawn();
        }

        MatchOutcome {
            rows,
            columns,
            spawn_requested,
        }
    }

    /// Empty cells in row-major order
    pub fn get_empty_cells(&self) -> Vec<Position> {
        let empty = self.grid.empty_positions();
        debug!(count = empty.len(), "found empty cells");
        empty
    }

    /// Take every tile off the board without scoring
    pub fn remove_all_tiles(&mut self) {
        info!("removing all tiles from arena");

        let occupied: Vec<Position> = self.grid.occupied().map(|(position, _)| position).collect();
        for position in occupied {
            if let Some(tile) = self.grid.take(position) {
                self.hooks.remove_tile(tile, position);
            }
        }
    }
}

impl<H> Arena<H> {
    /// Current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for collaborators that place tiles
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Injected hooks
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the injected hooks
    pub const fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Minimum run length that scores
    pub const fn required_tiles_in_line(&self) -> usize {
        self.matcher.required_tiles_in_line()
    }

    /// Split the arena back into its grid and hooks
    pub fn into_parts(self) -> (Grid, H) {
        (self.grid, self.hooks)
    }
}
