use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::types::CheckResult;

/// Progress reporting for a batch run.
///
/// The engine notifies this after every completed check; when disabled
/// (quiet mode, tests) every call is a no-op.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self { bar: None, enabled }
    }

    pub fn start_batch(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_urls as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} URLs checked ({eta}) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        self.bar = Some(pb);
    }

    /// Called once per completed check, in completion order.
    pub fn on_result(&self, completed: usize, result: &CheckResult) {
        if let Some(ref pb) = self.bar {
            pb.set_position(completed as u64);
            pb.set_message(result.classification.to_string());
        }
    }

    pub fn finish_batch(&self, ok_count: usize, total_count: usize) {
        if let Some(ref pb) = self.bar {
            let message = if ok_count == total_count {
                "✓ All URLs OK".to_string()
            } else {
                format!("✓ Batch complete ({ok_count}/{total_count} OK)")
            };
            pb.finish_with_message(message);
        }
    }

    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.bar {
            pb.finish_and_clear();
        }
    }
}
