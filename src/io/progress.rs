//! Progress display for auto-solve runs
//!
//! One bar per layout for small batches, collapsing to a single batch bar
//! when many files are processed at once.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static SOLVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Layouts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for layout solve runs
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    solve_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            solve_bar: None,
        }
    }

    /// Initialize progress bars based on layout count
    pub fn initialize(&mut self, layout_count: usize) {
        if layout_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(layout_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start the solve bar for one layout
    pub fn start_layout(&mut self, path: &Path, iterations: usize) {
        let bar = ProgressBar::new(iterations as u64);
        bar.set_style(SOLVE_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.solve_bar = Some(self.multi_progress.add(bar));
    }

    /// Report one auto-tilt iteration and the remaining misplacement
    pub fn update_iteration(&self, iteration: usize, misplaced: usize) {
        if let Some(ref bar) = self.solve_bar {
            bar.set_position(iteration as u64);
            bar.set_message(format!("{misplaced} misplaced"));
        }
    }

    /// Finish the current layout's bar and bump the batch counter
    pub fn complete_layout(&mut self, solved: bool) {
        if let Some(bar) = self.solve_bar.take() {
            bar.finish_with_message(if solved { "goal reached" } else { "iterations exhausted" });
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All layouts processed");
        }
        let _ = self.multi_progress.clear();
    }
}
