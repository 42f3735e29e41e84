//! Batch progress display across raster files

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

/// Pipeline stages reported for each file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and decoding the raster
    Loading,
    /// Extracting adjacency and coloring
    Coloring,
    /// Writing images and tables
    Exporting,
}

impl Stage {
    const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Coloring => "coloring",
            Self::Exporting => "exporting",
        }
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of files with a per-file stage message
pub struct ProgressManager {
    bar: ProgressBar,
    current: String,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no files
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            current: String::new(),
        }
    }

    /// Set the number of files in the batch
    pub fn initialize(&mut self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
    }

    /// Announce the file now being processed
    pub fn start_file(&mut self, path: &Path) {
        self.current = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.set_stage(Stage::Loading);
    }

    /// Report the stage of the current file
    pub fn set_stage(&self, stage: Stage) {
        self.bar
            .set_message(format!("{} ({})", self.current, stage.label()));
    }

    /// Mark the current file as finished
    pub fn complete_file(&mut self) {
        self.bar.inc(1);
        self.current.clear();
        self.bar.set_message(String::new());
    }

    /// Number of files completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of files in the batch
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
