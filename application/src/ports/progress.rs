//! Progress notification port
//!
//! Defines the interface for reporting progress during table enrichment.

/// Callback for progress updates during table enrichment
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (progress bar, plain text, etc.). Callbacks are invoked
/// synchronously on the processing thread and must not block.
pub trait ProgressNotifier: Send + Sync {
    /// Called once per row, before that row's processing begins.
    ///
    /// `current` is 1-indexed against the original row order and strictly
    /// increasing across the run.
    fn on_row_start(&self, current: usize, total: usize);

    /// Called once after every row has reached a terminal outcome.
    fn on_table_complete(&self, _total: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_row_start(&self, _current: usize, _total: usize) {}
}
