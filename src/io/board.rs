//! Plain-text board format
//!
//! One line per row, one character per cell: `.` for empty, a color symbol
//! (`R G B Y P O`, case-insensitive) for a tile. Blank lines and surrounding
//! whitespace are ignored. Tiles are numbered from 1 in row-major order.

use std::path::Path;

use crate::io::error::{ArenaError, Result, invalid_board};
use crate::spatial::{Cell, Color, Grid, Tile};

/// Symbol for an empty cell
pub const EMPTY_SYMBOL: char = '.';

/// Parse a board from text
///
/// # Errors
///
/// Returns an error if:
/// - The text contains no rows
/// - Rows differ in width
/// - A character is neither `.` nor a color symbol
/// - The resulting dimensions exceed the grid limits
pub fn parse_board(text: &str) -> Result<Grid> {
    let mut cells: Vec<Cell> = Vec::new();
    let mut width = None;
    let mut height = 0;
    let mut next_id = 1;

    for (line_index, raw_line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let row = raw_line.trim();
        if row.is_empty() {
            continue;
        }

        let row_width = row.chars().count();
        match width {
            None => width = Some(row_width),
            Some(expected) if expected != row_width => {
                return Err(invalid_board(
                    line_number,
                    &format!("expected {expected} cells, found {row_width}"),
                ));
            }
            Some(_) => {}
        }

        for symbol in row.chars() {
            if symbol == EMPTY_SYMBOL {
                cells.push(None);
                continue;
            }
            let color = Color::from_symbol(symbol).ok_or_else(|| {
                invalid_board(line_number, &format!("unknown cell symbol '{symbol}'"))
            })?;
            cells.push(Some(Tile::new(next_id, color)));
            next_id += 1;
        }

        height += 1;
    }

    let width = width.ok_or_else(|| invalid_board(1, &"board has no rows"))?;
    Grid::from_cells(width, height, cells)
}

/// Render a board in the text format understood by [`parse_board`]
pub fn format_board(grid: &Grid) -> String {
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for (index, position) in grid.positions().enumerate() {
        if index > 0 && position.x == 0 {
            text.push('\n');
        }
        text.push(grid.get(position).map_or(EMPTY_SYMBOL, |tile| tile.color.symbol()));
    }
    text.push('\n');
    text
}

/// Load a board file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse
pub fn load_board(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|e| ArenaError::FileSystem {
        path: path.to_path_buf(),
        operation: "read board",
        source: e,
    })?;
    parse_board(&text)
}

/// Write a board file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn save_board(grid: &Grid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ArenaError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    std::fs::write(path, format_board(grid)).map_err(|e| ArenaError::FileSystem {
        path: path.to_path_buf(),
        operation: "write board",
        source: e,
    })
}
