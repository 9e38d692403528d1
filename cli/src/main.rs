//! CLI entrypoint for duet
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use duet_application::{
    CompositeConversationLogger, ConversationLogger, EnrichTableUseCase, LlmGateway,
    NoConversationLogger, NoProgress, ProgressNotifier, RowSink,
};
use duet_domain::{Command, Model};
use duet_infrastructure::{
    ConfigLoader, CsvRowSink, JsonlConversationLogger, OpenAiGateway, read_csv, write_csv,
};
use duet_presentation::{Cli, ConsoleConversationLogger, ConsoleFormatter, ProgressReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 | 1 => EnvFilter::new("warn"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting duet");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    // CLI flags override file configuration
    let model: Model = match &cli.model {
        Some(name) => name.parse().unwrap(),
        None => config.model.parse(),
    };
    let mut params = config.enrichment.to_params();
    if let Some(max_retries) = cli.max_retries {
        params = params.with_max_retries(max_retries.max(1));
    }

    // Fail fast on a blank command, before touching the table or the network
    let Some(command) = Command::try_new(cli.command.clone()) else {
        bail!("Enrichment command must not be empty");
    };

    let table = read_csv(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    if table.is_empty() {
        bail!("Input table {} has no data rows", cli.input.display());
    }

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(OpenAiGateway::new(&config.provider)?);

    // Streaming sink (CLI flag wins over config)
    let stream_path = cli.stream.clone().or(config.output.stream_path.clone());
    let sink = match &stream_path {
        Some(path) => Some(
            CsvRowSink::create(path)
                .with_context(|| format!("Failed to create stream file {}", path.display()))?,
        ),
        None => None,
    };

    // Conversation trace: colored console at -v, JSONL file when requested
    let mut loggers: Vec<Box<dyn ConversationLogger>> = Vec::new();
    if cli.verbose >= 1 && !cli.quiet {
        loggers.push(Box::new(ConsoleConversationLogger));
    }
    let trace_path = cli.trace.clone().or(config.output.trace_path.clone());
    if let Some(path) = &trace_path
        && let Some(jsonl) = JsonlConversationLogger::new(path)
    {
        loggers.push(Box::new(jsonl));
    }
    let logger: Box<dyn ConversationLogger> = if loggers.is_empty() {
        Box::new(NoConversationLogger)
    } else {
        Box::new(CompositeConversationLogger::new(loggers))
    };

    if !cli.quiet {
        println!();
        println!("Input:   {} ({} rows)", cli.input.display(), table.row_count());
        println!("Command: {}", command);
        println!("Model:   {}", model);
        println!();
    }

    // Progress bar unless quiet or the conversation log is already printing
    let progress: Box<dyn ProgressNotifier> = if cli.quiet || cli.verbose >= 1 {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    // Create use case with injected gateway
    let use_case = EnrichTableUseCase::new(gateway, model, params);

    let enriched = use_case
        .execute_with_observers(
            &table,
            &command,
            progress.as_ref(),
            logger.as_ref(),
            sink.as_ref().map(|s| s as &dyn RowSink),
        )
        .await?;

    // Write the enriched table
    let output_path = cli.output_path();
    write_csv(enriched.table(), &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!();
    println!("{}", ConsoleFormatter::format_summary(&enriched));
    if !cli.quiet {
        println!();
        println!("{}", ConsoleFormatter::format_preview(&enriched, 5));
    }
    println!();
    println!("Output written to {}", output_path.display());
    if let Some(path) = &stream_path {
        println!("Streamed rows in {}", path.display());
    }
    if let Some(path) = &trace_path {
        println!("Conversation trace in {}", path.display());
    }

    Ok(())
}
