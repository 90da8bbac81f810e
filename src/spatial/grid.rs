//! Fixed-size arena grid of optional tiles
//!
//! The grid is sized once at construction and never resized. Cells are stored
//! in an `Array2` indexed `[row, column]`; the public API speaks in
//! [`Position`] (`x` = column, `y` = row) and [`Axis`] lines so callers never
//! deal with the storage order.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{ArenaError, Result, invalid_parameter};
use crate::spatial::tiles::Tile;

/// A grid cell: `None` when empty, otherwise the occupying tile
pub type Cell = Option<Tile>;

/// Cell coordinates within the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index, left to right
    pub x: usize,
    /// Row index, top to bottom
    pub y: usize,
}

impl Position {
    /// Create a position from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Scan direction for line matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal lines, one per row
    Row,
    /// Vertical lines, one per column
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Arena grid holding at most one tile per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::from_elem((height, width), None),
        })
    }

    /// Build a grid from cells listed in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or `cells` does not hold
    /// exactly `width * height` entries
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        validate_dimensions(width, height)?;

        let expected = width * height;
        if cells.len() != expected {
            return Err(ArenaError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let cells = Array2::from_shape_vec((height, width), cells).map_err(|_shape_error| {
            ArenaError::CellCountMismatch {
                expected,
                actual: width * height,
            }
        })?;

        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a position lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width() && position.y < self.height()
    }

    /// Tile at a position, `None` when empty or out of bounds
    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.cells.get([position.y, position.x]).and_then(Option::as_ref)
    }

    /// Check if a cell is empty (out-of-bounds positions are not cells)
    pub fn is_empty_at(&self, position: Position) -> bool {
        matches!(self.cells.get([position.y, position.x]), Some(None))
    }

    /// Put a tile into a cell, returning the tile it displaced
    ///
    /// # Errors
    ///
    /// Returns an error if the position lies outside the grid
    pub fn place(&mut self, position: Position, tile: Tile) -> Result<Option<Tile>> {
        let dimensions = (self.width(), self.height());
        let cell = self
            .cells
            .get_mut([position.y, position.x])
            .ok_or(ArenaError::OutOfBounds {
                position: [position.x, position.y],
                dimensions,
            })?;
        Ok(cell.replace(tile))
    }

    /// Take the tile out of a cell, leaving it empty
    pub fn take(&mut self, position: Position) -> Option<Tile> {
        self.cells
            .get_mut([position.y, position.x])
            .and_then(Option::take)
    }

    /// Number of lines scanned along an axis
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height(),
            Axis::Column => self.width(),
        }
    }

    /// Number of cells in each line along an axis
    pub fn line_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.width(),
            Axis::Column => self.height(),
        }
    }

    /// Position of the `index`-th cell of line `line` along `axis`
    pub const fn position_on(axis: Axis, line: usize, index: usize) -> Position {
        match axis {
            Axis::Row => Position::new(index, line),
            Axis::Column => Position::new(line, index),
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.is_empty_at(position))
            .collect()
    }

    /// Occupied cells with their tiles in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.positions()
            .filter_map(|position| self.get(position).map(|tile| (position, tile)))
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(invalid_parameter(
                parameter,
                &value,
                &"grid dimensions must be positive",
            ));
        }
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("grid dimensions are limited to {MAX_GRID_DIMENSION}"),
            ));
        }
    }
    Ok(())
}
