//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Processing steps reported for each file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding and resizing the source
    Loading,
    /// Running the pixel transform
    Dithering,
    /// Encoding the result
    Writing,
    /// Finished
    Done,
}

impl Stage {
    /// Number of steps a file goes through
    pub const COUNT: u64 = 3;

    /// Steps completed when this stage is reached
    pub const fn position(self) -> u64 {
        match self {
            Self::Loading => 0,
            Self::Dithering => 1,
            Self::Writing => 2,
            Self::Done => Self::COUNT,
        }
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Dithering => "dithering",
            Self::Writing => "writing",
            Self::Done => "done",
        }
    }
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for small batches and adds an overall file counter
/// once the batch is larger than the number of visible bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// (`filename`, `stage`) per file index, for the rolling window display
    file_states: Vec<(String, Stage)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>9} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Create a manager whose bars are never drawn
    pub fn hidden() -> Self {
        let manager = Self::new();
        manager
            .multi_progress
            .set_draw_target(indicatif::ProgressDrawTarget::hidden());
        manager
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(Stage::COUNT);
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Report the stage a file has reached
    pub fn set_stage(&mut self, index: usize, path: &Path, stage: Stage) {
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), Stage::Loading));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            *state = (display_name, stage);
        }

        if stage == Stage::Done {
            if let Some(ref batch_bar) = self.batch_bar {
                batch_bar.inc(1);
            }
        }
        self.update_bars();
    }

    /// Number of files whose processing has finished
    pub fn completed(&self) -> usize {
        self.file_states
            .iter()
            .filter(|(_, stage)| *stage == Stage::Done)
            .count()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recently started files in the available bars
    fn update_bars(&self) {
        let active_files: Vec<&(String, Stage)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active_files
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_files = active_files.get(start_idx..).unwrap_or(&[]);

        for (bar, (name, stage)) in self.file_bars.iter().zip(visible_files) {
            bar.set_position(stage.position());
            bar.set_message(stage.label());
            bar.set_prefix(name.clone());
        }

        for bar in self.file_bars.iter().skip(visible_files.len()) {
            bar.set_position(0);
            bar.set_message("");
            bar.set_prefix("");
        }
    }
}
