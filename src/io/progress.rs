//! Progress display for word placement

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Words: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks placed words against the target count
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar shown yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar for `target_words` placements
    pub fn initialize(&mut self, target_words: usize) {
        let bar = ProgressBar::new(target_words as u64);
        bar.set_style(PLACEMENT_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report the placed count and the errors spent so far
    pub fn update(&self, placed: usize, errors: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(placed as u64);
            bar.set_message(format!("({errors} errors)"));
        }
    }

    /// Current bar position, if a bar is shown
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Remove the bar from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
