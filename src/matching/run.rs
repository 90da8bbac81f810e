//! Neighbor classification and matched-run descriptors

use crate::spatial::{Axis, Grid, Position, Tile};

/// Relation between two neighboring cells along a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareState {
    /// At least one of the cells is empty
    Empty,
    /// Both cells are occupied with different colors
    Different,
    /// Both cells are occupied with the same color
    Same,
}

/// Classify a pair of neighboring cells
///
/// Emptiness wins over color: two empty cells are `Empty`, never `Same`.
pub fn compare_cells(a: Option<&Tile>, b: Option<&Tile>) -> CompareState {
    match (a, b) {
        (Some(a), Some(b)) if a.color == b.color => CompareState::Same,
        (Some(_), Some(_)) => CompareState::Different,
        _ => CompareState::Empty,
    }
}

/// A contiguous same-color run selected for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// Axis the run lies on
    pub axis: Axis,
    /// Row index for row runs, column index for column runs
    pub line: usize,
    /// First index along the line (inclusive)
    pub start: usize,
    /// Last index along the line (inclusive)
    pub end: usize,
}

impl LineMatch {
    /// Number of tiles covered by the run
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Runs always cover at least one cell
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Points awarded for this run: distance of its length from the threshold
    pub fn points(&self, required_tiles_in_line: usize) -> u32 {
        u32::try_from(required_tiles_in_line.abs_diff(self.len())).unwrap_or(u32::MAX)
    }

    /// Grid positions covered by the run, in scan order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let axis = self.axis;
        let line = self.line;
        (self.start..=self.end).map(move |index| Grid::position_on(axis, line, index))
    }
}
