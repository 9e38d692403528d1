//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for duet
#[derive(Parser, Debug)]
#[command(name = "duet")]
#[command(author, version, about = "Row-wise LLM data enrichment with a planner/executor duo")]
#[command(long_about = r#"
duet enriches a CSV table row by row using two cooperating LLM roles:
a Planner that formulates and judges each enrichment, and an Executor
that produces candidate attribute values.

Each row is retried up to the configured budget until the Planner accepts
the Executor's result; the outcome lands in an `ai_decision` column
(valid / invalid / error) next to the enriched attributes.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./duet.toml       Project-level config
3. ~/.config/duet/config.toml   Global config

Example:
  duet customers.csv "add each customer's most likely nationality"
  duet -m gpt-4o --max-retries 5 people.csv "add a country field with evidence"
  duet --stream partial.csv big.csv "add gender"
"#)]
pub struct Cli {
    /// Path to the input CSV file
    pub input: PathBuf,

    /// The enrichment command applied to every row
    pub command: String,

    /// Where to write the enriched CSV (default: <input>_enriched.csv)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Model to use for both roles
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Attempt budget per row (1 = no retries)
    #[arg(long, value_name = "N")]
    pub max_retries: Option<usize>,

    /// Stream each processed row to this CSV file as it resolves
    #[arg(long, value_name = "PATH")]
    pub stream: Option<PathBuf>,

    /// Write the role-tagged conversation trace to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub trace: Option<PathBuf>,

    /// Verbosity level (-v = show conversation, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and the header banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// Resolve the output path, defaulting to `<input stem>_enriched.csv`
    /// next to the input file.
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        self.input.with_file_name(format!("{stem}_enriched.csv"))
    }
}
