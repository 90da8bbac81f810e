//! Game constants and runtime configuration defaults

/// Minimum run length that scores when nothing else is configured
pub const DEFAULT_REQUIRED_TILES_IN_LINE: usize = 3;
/// Shortest run that can form a match
pub const MIN_REQUIRED_TILES_IN_LINE: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1024;

/// Default board width used by the simulator
pub const DEFAULT_WIDTH: usize = 8;
/// Default board height used by the simulator
pub const DEFAULT_HEIGHT: usize = 8;

/// Tiles placed by a single spawn
pub const DEFAULT_TILES_PER_SPAWN: usize = 3;

/// Number of palette colors used for spawned tiles
pub const DEFAULT_PALETTE_SIZE: usize = 4;
/// Smallest palette that can still produce mismatches
pub const MIN_PALETTE_SIZE: usize = 2;

/// Points granted or taken by a single debug adjustment
pub const DEBUG_POINTS_STEP: i64 = 100;

/// Fixed seed for reproducible simulations
pub const DEFAULT_SEED: u64 = 42;

/// Default number of moves played by the simulator
pub const DEFAULT_ROUNDS: usize = 200;

// Output settings
/// Edge length in pixels of one cell in exported images
pub const CELL_PIXELS: u32 = 16;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
