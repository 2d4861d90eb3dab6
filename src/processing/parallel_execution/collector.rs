// Collector - 結果集計と進捗報告

use crate::core::{BatchSummary, ItemOutcome};
use crate::processing::reporting::ProgressReporter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// アイテム結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub completed: usize,
    pub succeeded: usize,
    pub load_failures: usize,
    pub processing_failures: usize,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Success { .. } => self.succeeded += 1,
            ItemOutcome::LoadFailed { .. } => self.load_failures += 1,
            ItemOutcome::Failed { .. } => self.processing_failures += 1,
        }
        self.completed += 1;
    }

    pub fn into_summary(self, elapsed: Duration) -> BatchSummary {
        BatchSummary::from_counts(
            self.completed,
            self.succeeded,
            self.load_failures,
            self.processing_failures,
            elapsed,
        )
    }
}

/// Collector: 完了順に結果を受け取り、1件ごとに進捗を報告
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<ItemOutcome>,
    total_items: usize,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<OutcomeTally>
where
    R: ProgressReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut tally = OutcomeTally::default();

        while let Some(outcome) = result_rx.recv().await {
            match &outcome {
                ItemOutcome::Success { output, .. } => {
                    debug!(output = %output.display(), "edge map written");
                }
                ItemOutcome::LoadFailed { source, reason } => {
                    debug!(%source, %reason, "failed to load image");
                    reporter.report_load_failure(source).await;
                }
                ItemOutcome::Failed { source, error } => {
                    debug!(%source, %error, "failed to process image");
                    reporter.report_error(source, error).await;
                }
            }

            tally.record(&outcome);
            reporter.report_progress(tally.completed, total_items).await;
        }

        tally
    })
}
