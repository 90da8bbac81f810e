//! Line-matching core for grid-based tile-matching puzzles
//!
//! An [`Arena`](matching::Arena) owns a fixed grid of colored tiles. Checking
//! it scans every row, then every column, for runs of equal colors at least
//! as long as the configured threshold, removes them and reports points,
//! removed tiles and spawn requests to injected collaborators. The
//! [`session`] module supplies those collaborators for a playable game.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Match detection and the arena entry points
pub mod matching;
/// Collaborators and game orchestration
pub mod session;
/// Grid and tile data structures
pub mod spatial;

pub use io::error::{ArenaError, Result};
