//! Cumulative score

use crate::session::hooks::ScoreSink;

/// Running point total
///
/// Signed so debug adjustments can take it below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    points: i64,
}

impl Score {
    /// Start from zero
    pub const fn new() -> Self {
        Self { points: 0 }
    }

    /// Current total
    pub const fn points(&self) -> i64 {
        self.points
    }

    /// Apply a signed adjustment
    pub const fn adjust(&mut self, delta: i64) {
        self.points = self.points.saturating_add(delta);
    }
}

impl ScoreSink for Score {
    fn add_points(&mut self, delta: u32) {
        self.adjust(i64::from(delta));
    }
}
