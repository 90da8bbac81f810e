//! Spatial data structures for the arena
//!
//! This module contains:
//! - The fixed-size grid of cells and its coordinate types
//! - Tile handles and the color palette

/// Grid storage, positions and scan axes
pub mod grid;
/// Tile handles and colors
pub mod tiles;

pub use grid::{Axis, Cell, Grid, Position};
pub use tiles::{Color, Tile, TileId};
