//! Run-length line scanning and run resolution
//!
//! Each line is walked once, comparing every cell with its predecessor. A
//! streak of equal colors is flushed as soon as it is broken (by a different
//! color or an empty cell) or the line ends. Flushed streaks that reach the
//! threshold are resolved immediately, so later comparisons in the same pass
//! already see the emptied cells.

use tracing::debug;

use crate::io::configuration::{DEFAULT_REQUIRED_TILES_IN_LINE, MIN_REQUIRED_TILES_IN_LINE};
use crate::io::error::{Result, invalid_parameter};
use crate::matching::run::{CompareState, LineMatch, compare_cells};
use crate::session::hooks::ArenaHooks;
use crate::spatial::{Axis, Grid};

/// Detects and resolves same-color runs along one axis at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatcher {
    required_tiles_in_line: usize,
}

impl Default for LineMatcher {
    fn default() -> Self {
        Self {
            required_tiles_in_line: DEFAULT_REQUIRED_TILES_IN_LINE,
        }
    }
}

impl LineMatcher {
    /// Create a matcher with the given threshold
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is below two
    pub fn new(required_tiles_in_line: usize) -> Result<Self> {
        if required_tiles_in_line < MIN_REQUIRED_TILES_IN_LINE {
            return Err(invalid_parameter(
                "required_tiles_in_line",
                &required_tiles_in_line,
                &format!("a run needs at least {MIN_REQUIRED_TILES_IN_LINE} tiles"),
            ));
        }
        Ok(Self {
            required_tiles_in_line,
        })
    }

    /// Minimum run length that scores
    pub const fn required_tiles_in_line(&self) -> usize {
        self.required_tiles_in_line
    }

    /// Scan every line along `axis`, resolving qualifying runs as they end
    ///
    /// Returns whether at least one run was resolved.
    pub fn scan_axis<H: ArenaHooks>(&self, grid: &mut Grid, axis: Axis, hooks: &mut H) -> bool {
        let mut matched = false;

        for line in 0..grid.line_count(axis) {
            matched |= self.scan_line(grid, axis, line, hooks);
        }

        matched
    }

    fn scan_line<H: ArenaHooks>(
        &self,
        grid: &mut Grid,
        axis: Axis,
        line: usize,
        hooks: &mut H,
    ) -> bool {
        let last = grid.line_len(axis).saturating_sub(1);
        let mut matched = false;
        let mut streak = 1;
        let mut start = 0;

        for index in 1..=last {
            let state = compare_cells(
                grid.get(Grid::position_on(axis, line, index)),
                grid.get(Grid::position_on(axis, line, index - 1)),
            );

            if state == CompareState::Same {
                streak += 1;

                if index == last && streak >= self.required_tiles_in_line {
                    matched = true;
                    self.resolve(
                        grid,
                        LineMatch {
                            axis,
                            line,
                            start,
                            end: index,
                        },
                        hooks,
                    );
                }
            } else {
                if streak >= self.required_tiles_in_line {
                    matched = true;
                    self.resolve(
                        grid,
                        LineMatch {
                            axis,
                            line,
                            start,
                            end: index - 1,
                        },
                        hooks,
                    );
                }

                streak = 1;
                start = index;
            }
        }

        matched
    }

    /// Score a run and take its tiles out of the grid
    pub fn resolve<H: ArenaHooks>(&self, grid: &mut Grid, run: LineMatch, hooks: &mut H) {
        debug!(
            axis = %run.axis,
            line = run.line,
            start = run.start,
            end = run.end,
            total = run.len(),
            "removing matched run"
        );

        hooks.add_points(run.points(self.required_tiles_in_line));

        for position in run.positions() {
            if let Some(tile) = grid.take(position) {
                hooks.remove_tile(tile, position);
            }
        }
    }
}
