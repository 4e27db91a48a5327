//! Progress bar display for model collection and bundle writing

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Longest file path shown next to the file bar.
const MAX_DISPLAY_PATH: usize = 50;

/// Progress display for a pack run
pub struct ProgressDisplay {
    /// Models decoded so far
    model_pb: ProgressBar,
    /// Files written into the bundle (created once the manifest is known)
    file_pb: Option<ProgressBar>,
    hidden: bool,
}

impl ProgressDisplay {
    /// Create a new progress display with total model count
    pub fn new(total_models: u64) -> Self {
        Self::with_target(total_models, ProgressDrawTarget::stderr())
    }

    /// A display that draws nothing, for quiet and non-interactive runs
    pub fn hidden(total_models: u64) -> Self {
        Self::with_target(total_models, ProgressDrawTarget::hidden())
    }

    fn with_target(total_models: u64, target: ProgressDrawTarget) -> Self {
        let hidden = target.is_hidden();
        let model_pb = ProgressBar::with_draw_target(Some(total_models), target);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} models {msg}") {
            model_pb.set_style(style.progress_chars("#>-"));
        }

        Self {
            model_pb,
            file_pb: None,
            hidden,
        }
    }

    /// Record one decoded model
    pub fn inc_model(&self, model_name: &str) {
        self.model_pb.set_message(model_name.to_string());
        self.model_pb.inc(1);
    }

    /// Initialize file progress bar with total file count
    pub fn init_file_progress(&mut self, total_files: u64) {
        self.model_pb.finish_and_clear();

        let file_pb = if self.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total_files)
        };
        if let Ok(style) =
            ProgressStyle::default_bar().template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
        {
            file_pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
        }
        file_pb.set_length(total_files);
        self.file_pb = Some(file_pb);
    }

    /// Update file progress
    pub fn update_file(&self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.set_message(truncate_path(file_path));
            file_pb.inc(1);
        }
    }

    /// Finish all bars
    pub fn finish(&self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.finish_and_clear();
        }
        self.model_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.abandon();
        }
        self.model_pb.abandon();
    }
}

/// Keep the tail of long paths, on a character boundary.
fn truncate_path(path: &str) -> String {
    let count = path.chars().count();
    if count <= MAX_DISPLAY_PATH {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (MAX_DISPLAY_PATH - 3)).collect();
    format!("...{tail}")
}
