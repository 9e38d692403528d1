//! Progress display adapters

pub mod reporter;

pub use reporter::ProgressReporter;
