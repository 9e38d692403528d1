//! Prompt assembly for the two roles

pub mod template;

pub use template::EnrichmentPromptTemplate;
