//! Progress display for batches of generated layouts

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Layouts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks a batch of layout variants on a single bar
pub struct ProgressManager {
    bar: ProgressBar,
    variant_count: usize,
    tiles_generated: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that tracks state without drawing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            variant_count: 0,
            tiles_generated: 0,
        }
    }

    /// Size the bar for `variant_count` layouts
    pub fn initialize(&mut self, variant_count: usize) {
        self.variant_count = variant_count;
        self.tiles_generated = 0;
        self.bar.set_length(variant_count as u64);
        self.bar.set_position(0);
    }

    /// Announce the layout about to be generated
    pub fn start_variant(&self, index: usize, name: &str) {
        self.bar
            .set_message(format!("{name} ({}/{})", index + 1, self.variant_count));
    }

    /// Count a finished layout and report how long it took
    pub fn complete_variant(&mut self, index: usize, tiles: usize, elapsed: Duration) {
        self.tiles_generated += tiles;
        self.bar.set_message(format!(
            "layout {}/{}: {tiles} tiles in {:.1} ms",
            index + 1,
            self.variant_count,
            elapsed.as_secs_f64() * 1000.0
        ));
        self.bar.inc(1);
    }

    /// Current status line
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Total tiles across finished layouts
    pub const fn tiles_generated(&self) -> usize {
        self.tiles_generated
    }

    /// Layouts finished so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} tiles across {} layouts",
            self.tiles_generated, self.variant_count
        ));
    }
}
