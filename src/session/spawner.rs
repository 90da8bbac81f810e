//! Seeded tile spawner with a preview of upcoming colors

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::io::configuration::MIN_PALETTE_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Color, Grid, Position, Tile};

/// Places new tiles into empty cells
///
/// The colors of the next spawn are drawn in advance so they can be shown
/// to the player. Identical seeds produce identical sequences.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: StdRng,
    palette: Vec<Color>,
    next_colors: Vec<Color>,
    next_id: u32,
}

impl Spawner {
    /// Create a spawner using the first `palette_size` colors
    ///
    /// # Errors
    ///
    /// Returns an error if `tiles_per_spawn` is zero or `palette_size` is
    /// outside `2..=6`
    pub fn new(seed: u64, tiles_per_spawn: usize, palette_size: usize) -> Result<Self> {
        if tiles_per_spawn == 0 {
            return Err(invalid_parameter(
                "tiles_per_spawn",
                &tiles_per_spawn,
                &"a spawn must place at least one tile",
            ));
        }
        if !(MIN_PALETTE_SIZE..=Color::ALL.len()).contains(&palette_size) {
            return Err(invalid_parameter(
                "palette_size",
                &palette_size,
                &format!(
                    "palette must hold between {MIN_PALETTE_SIZE} and {} colors",
                    Color::ALL.len()
                ),
            ));
        }

        let palette: Vec<Color> = Color::ALL.iter().copied().take(palette_size).collect();
        let mut spawner = Self {
            rng: StdRng::seed_from_u64(seed),
            palette,
            next_colors: vec![Color::Red; tiles_per_spawn],
            next_id: 1,
        };
        spawner.reroll();
        Ok(spawner)
    }

    /// Continue tile ids after the given one, so spawned ids never collide
    /// with tiles already on a loaded board
    pub fn with_ids_after(mut self, last_id: u32) -> Self {
        self.next_id = last_id.saturating_add(1);
        self
    }

    /// Colors the next spawn will place, in placement order
    pub fn next_colors(&self) -> &[Color] {
        &self.next_colors
    }

    /// Colors this spawner draws from
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Draw a fresh preview
    pub fn reroll(&mut self) {
        for slot in &mut self.next_colors {
            let index = self.rng.random_range(0..self.palette.len());
            if let Some(&color) = self.palette.get(index) {
                *slot = color;
            }
        }
    }

    /// Place the previewed colors on random cells taken from `empty`
    ///
    /// Candidates that are occupied, outside the grid or repeated are skipped,
    /// so no cell is filled twice and no tile is overwritten. Places
    /// fewer tiles when too few candidates remain, then draws a fresh preview.
    /// Returns the filled positions in placement order.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid rejects a placement
    pub fn spawn(&mut self, grid: &mut Grid, mut empty: Vec<Position>) -> Result<Vec<Position>> {
        let mut seen = HashSet::with_capacity(empty.len());
        empty.retain(|&position| grid.is_empty_at(position) && seen.insert(position));

        let mut placed = Vec::with_capacity(self.next_colors.len().min(empty.len()));
        for &color in &self.next_colors {
            if empty.is_empty() {
                break;
            }
            let position = empty.swap_remove(self.rng.random_range(0..empty.len()));
            grid.place(position, Tile::new(self.next_id, color))?;
            self.next_id = self.next_id.saturating_add(1);
            placed.push(position);
        }

        info!(count = placed.len(), "spawned tiles");
        self.reroll();
        Ok(placed)
    }
}
