//! Collaborator contracts the arena reports to
//!
//! The arena owns the grid; everything that happens as a consequence of a
//! match (scoring, reacting to removed tiles, refilling the board) is
//! delegated through these traits. Implementations are injected when the
//! arena is built.

use crate::spatial::{Position, Tile};

/// Receives tiles taken out of the grid
pub trait TileRemoval {
    /// Called once per removed tile, after its cell has been emptied
    fn remove_tile(&mut self, tile: Tile, position: Position);
}

/// Accumulates points earned by matched runs
pub trait ScoreSink {
    /// Add a non-negative delta to the running total
    fn add_points(&mut self, delta: u32);
}

/// Asked to refill the board when a check found nothing
pub trait SpawnTrigger {
    /// Request that new tiles be placed into empty cells
    fn request_spawn(&mut self);
}

/// Every collaborator the arena needs, as a single bound
pub trait ArenaHooks: TileRemoval + ScoreSink + SpawnTrigger {}

impl<T> ArenaHooks for T where T: TileRemoval + ScoreSink + SpawnTrigger {}

/// Hooks that remember every call, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHooks {
    /// Removed tiles with the cell they were taken from
    pub removed: Vec<(Tile, Position)>,
    /// Point deltas, one per resolved run
    pub points: Vec<u32>,
    /// Number of spawn requests received
    pub spawn_requests: usize,
}

impl RecordingHooks {
    /// Create empty hooks
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all recorded point deltas
    pub fn total_points(&self) -> u64 {
        self.points.iter().map(|&delta| u64::from(delta)).sum()
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.removed.clear();
        self.points.clear();
        self.spawn_requests = 0;
    }
}

impl TileRemoval for RecordingHooks {
    fn remove_tile(&mut self, tile: Tile, position: Position) {
        self.removed.push((tile, position));
    }
}

impl ScoreSink for RecordingHooks {
    fn add_points(&mut self, delta: u32) {
        self.points.push(delta);
    }
}

impl SpawnTrigger for RecordingHooks {
    fn request_spawn(&mut self) {
        self.spawn_requests += 1;
    }
}
