//! Batch progress display for rendering many keys

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Keys: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many keys of a batch have been rendered
pub struct ProgressManager {
    bar: ProgressBar,
    rendered: usize,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            rendered: 0,
            skipped: 0,
        }
    }

    /// Size the bar for a batch of keys
    pub fn initialize(&mut self, key_count: usize) {
        self.bar.set_length(key_count as u64);
        self.bar.set_position(0);
        self.rendered = 0;
        self.skipped = 0;
    }

    /// Record a rendered key
    pub fn complete_key(&mut self, file_name: &str) {
        self.rendered += 1;
        self.bar.set_message(file_name.to_string());
        self.bar.inc(1);
    }

    /// Record a key whose output already existed
    pub fn skip_key(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Number of keys rendered so far
    pub const fn rendered(&self) -> usize {
        self.rendered
    }

    /// Number of keys skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Replace the bar with a summary line
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} rendered, {} skipped",
            self.rendered, self.skipped
        ));
    }
}
