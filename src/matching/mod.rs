//! Line matching: detection, resolution and the arena entry points

/// Arena owning the grid and exposing check, query and reset operations
pub mod arena;
/// Run-length scanner that resolves qualifying runs
pub mod matcher;
/// Neighbor classification and run descriptors
pub mod run;

pub use arena::{Arena, ArenaConfig, MatchOutcome};
pub use matcher::LineMatcher;
pub use run::{CompareState, LineMatch, compare_cells};
