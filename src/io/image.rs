//! PNG export of a board with transparent empty cells

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::error::{ArenaError, Result, invalid_parameter};
use crate::spatial::{Grid, Position};

/// Export the grid as a PNG, drawing each cell as a `cell_pixels` square
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path, cell_pixels: u32) -> Result<()> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cells must be at least one pixel wide",
        ));
    }

    let width = image_extent(grid.width(), cell_pixels, "width")?;
    let height = image_extent(grid.height(), cell_pixels, "height")?;

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let column = (px / cell_pixels) as usize;
        let row = (py / cell_pixels) as usize;
        grid.get(Position::new(column, row))
            .map_or(Rgba([0, 0, 0, 0]), |tile| Rgba(tile.color.rgba()))
    });

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| ArenaError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| ArenaError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

fn image_extent(cells: usize, cell_pixels: u32, parameter: &'static str) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(cell_pixels))
        .ok_or_else(|| invalid_parameter(parameter, &cells, &"image would be too large"))
}
