//! Progress display for simulated games

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Moves: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the moves of one simulation
///
/// A disabled tracker draws nothing, so callers never need to branch on
/// quiet mode.
pub struct RoundProgress {
    bar: Option<ProgressBar>,
}

impl RoundProgress {
    /// Create a tracker for `total` moves
    pub fn new(total: usize, enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(ROUND_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Record one finished move and the score after it
    pub fn advance(&self, score: i64) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            bar.set_message(format!("score {score}"));
        }
    }

    /// Stop drawing, leaving the final state on screen
    pub fn finish(&self, score: i64) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("final score {score}"));
        }
    }
}
