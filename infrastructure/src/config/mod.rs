//! Configuration loading and raw file structures

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileConfig, FileEnrichmentConfig, FileModelConfig, FileOutputConfig, FileProviderConfig,
};
pub use loader::ConfigLoader;
