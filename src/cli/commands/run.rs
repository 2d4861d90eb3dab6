use crate::cli::Cli;
use crate::core::BatchSummary;
use crate::processing::{
    process_directory, ConsoleProgressReporter, DefaultProcessingConfig, NoOpProgressReporter,
    ProgressReporter,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration struct for the run command
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub workers: Option<usize>,
    pub quiet: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            input_dir: cli.input_dir.clone(),
            output_dir: cli.output_dir.clone(),
            workers: cli.workers,
            quiet: cli.quiet,
        }
    }
}

impl RunConfig {
    /// ワーカー数の指定がなければ既定値を使う
    pub fn processing_config(&self) -> DefaultProcessingConfig {
        match self.workers {
            Some(workers) => DefaultProcessingConfig::default().with_worker_count(workers),
            None => DefaultProcessingConfig::default(),
        }
    }
}

/// Execute the batch, choosing the reporter from the quiet flag
pub async fn execute_run(config: RunConfig) -> Result<BatchSummary> {
    if config.quiet {
        execute_run_with_reporter(config, NoOpProgressReporter::new()).await
    } else {
        execute_run_with_reporter(config, ConsoleProgressReporter::new()).await
    }
}

/// Generic run execution with any progress reporter
pub async fn execute_run_with_reporter<R>(config: RunConfig, reporter: R) -> Result<BatchSummary>
where
    R: ProgressReporter + 'static,
{
    let processing_config = config.processing_config();
    tracing::debug!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        workers = ?config.workers,
        "starting batch"
    );

    let summary = process_directory(
        &config.input_dir,
        &config.output_dir,
        processing_config,
        reporter,
    )
    .await
    .with_context(|| format!("Batch over {} aborted", config.input_dir.display()))?;

    tracing::info!(
        total = summary.total_items,
        succeeded = summary.succeeded,
        failed = summary.failed(),
        "batch finished"
    );
    Ok(summary)
}
