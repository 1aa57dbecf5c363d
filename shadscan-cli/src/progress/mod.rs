//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for volume segmentation
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for `total_volumes` volumes
    pub fn init_volumes(&mut self, total_volumes: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_volumes);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} volumes {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a segmented volume
    pub fn volume_completed(&self, file_name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Segmented: {file_name}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_volumes(10);
        assert!(reporter.progress_bar.is_none());
        reporter.volume_completed("vol1.txt");
        reporter.finish();
    }

    #[test]
    fn test_reporter_counts_volumes() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_volumes(2);
        reporter.volume_completed("vol1.txt");
        reporter.volume_completed("vol2.txt");
        assert_eq!(reporter.progress_bar.as_ref().unwrap().position(), 2);
        reporter.finish();
    }
}
