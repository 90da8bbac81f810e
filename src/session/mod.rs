//! Game session: collaborator contracts and the types that fulfil them

/// Game orchestration over an arena
pub mod game;
/// Traits the arena reports removals, points and spawn requests through
pub mod hooks;
/// Cumulative score
pub mod score;
/// Random tile spawner
pub mod spawner;

pub use game::{Game, GameConfig, GameHooks, MoveReport};
pub use hooks::{ArenaHooks, RecordingHooks, ScoreSink, SpawnTrigger, TileRemoval};
pub use score::Score;
pub use spawner::Spawner;
