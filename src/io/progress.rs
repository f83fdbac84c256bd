//! Tick progress display for headless runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TICK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Ticks: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over simulated ticks, hidden when quiet
pub struct TickProgress {
    bar: ProgressBar,
}

impl TickProgress {
    /// Create a bar for `ticks` ticks
    pub fn new(ticks: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(ticks as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(TICK_STYLE.clone());
        Self { bar }
    }

    /// Record a finished tick along with the current connectivity figures
    pub fn tick(&self, connected_rooms: usize, total_rooms: usize) {
        self.bar.inc(1);
        self.bar
            .set_message(format!("{connected_rooms}/{total_rooms} rooms connected"));
    }

    /// Ticks recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once the run is over
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
