//! Output section

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[output]` section: optional streaming sink and conversation trace paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Stream each processed row to this CSV file as it resolves.
    pub stream_path: Option<PathBuf>,
    /// Write the role-tagged conversation trace to this JSONL file.
    pub trace_path: Option<PathBuf>,
}
