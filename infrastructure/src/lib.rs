//! Infrastructure layer for duet
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod table_io;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEnrichmentConfig, FileModelConfig, FileOutputConfig,
    FileProviderConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiGateway;
pub use table_io::{CsvRowSink, TableIoError, read_csv, read_csv_str, write_csv};
