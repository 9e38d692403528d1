//! Progress reporting for table enrichment

use colored::Colorize;
use duet_application::ProgressNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports row progress with a fancy progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_row_start(&self, current: usize, total: usize) {
        let mut guard = self.bar.lock().unwrap();
        let bar = guard.get_or_insert_with(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(Self::bar_style());
            bar.set_prefix("Enriching");
            bar
        });
        bar.set_position((current - 1) as u64);
        bar.set_message(format!("row {}/{}", current, total));
    }

    fn on_table_complete(&self, total: usize) {
        if let Some(bar) = self.bar.lock().unwrap().take() {
            bar.set_position(total as u64);
            bar.finish_with_message(format!("{}", "done".green()));
        }
    }
}
