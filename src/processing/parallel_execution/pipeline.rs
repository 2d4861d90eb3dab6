// Pipeline - Producer-Consumer パイプライン
// ワーカープールの生成・投入・完了待ち・破棄までを1回の呼び出しで行う

use super::collector::spawn_result_collector;
use super::consumer::{spawn_consumers, WorkerBackends};
use super::producer::spawn_producer;
use crate::core::{BatchError, BatchSummary, ItemOutcome, WorkItem};
use crate::edge_detection::EdgeDetector;
use crate::image_loader::ImageLoaderBackend;
use crate::processing::config::ProcessingConfig;
use crate::processing::reporting::ProgressReporter;
use crate::storage::ImageWriterBackend;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

pub struct ProcessingPipeline<L, D, W> {
    backends: WorkerBackends<L, D, W>,
}

impl<L, D, W> ProcessingPipeline<L, D, W>
where
    L: ImageLoaderBackend + 'static,
    D: EdgeDetector + 'static,
    W: ImageWriterBackend + 'static,
{
    pub fn new(loader: Arc<L>, detector: Arc<D>, writer: Arc<W>) -> Self {
        Self {
            backends: WorkerBackends {
                loader,
                detector,
                writer,
            },
        }
    }

    /// 作業アイテム一覧をワーカープールで処理
    ///
    /// 全アイテムの完了（と進捗報告）を待ってから戻る。
    /// アイテム単位の失敗はサマリーに数えられるだけで、エラーにはならない。
    pub async fn execute<C, R>(
        &self,
        items: Vec<WorkItem>,
        config: &C,
        reporter: Arc<R>,
    ) -> Result<BatchSummary, BatchError>
    where
        C: ProcessingConfig + ?Sized,
        R: ProgressReporter + ?Sized + 'static,
    {
        config.validate()?;

        let start_time = Instant::now();
        let total_items = items.len();
        let worker_count = config.worker_count();

        let (work_tx, work_rx) = mpsc::channel::<WorkItem>(config.channel_buffer_size());
        let (result_tx, result_rx) = mpsc::channel::<ItemOutcome>(config.channel_buffer_size());

        info!(
            total_items,
            worker_count,
            loader = self.backends.loader.strategy_name(),
            detector = self.backends.detector.name(),
            "dispatching batch"
        );
        reporter.report_started(total_items).await;

        let producer_handle = spawn_producer(items, work_tx);
        let consumer_handles =
            spawn_consumers(self.backends.clone(), work_rx, result_tx, worker_count);
        let collector_handle = spawn_result_collector(result_rx, total_items, Arc::clone(&reporter));

        let dispatched = producer_handle.await?;

        let mut processed = 0;
        for handle in consumer_handles {
            processed += handle.await?;
        }

        let tally = collector_handle.await?;

        if dispatched != total_items || processed != total_items || tally.completed != total_items {
            return Err(BatchError::channel(format!(
                "expected {total_items} items, dispatched {dispatched}, processed {processed}, collected {}",
                tally.completed
            )));
        }

        let summary = tally.into_summary(start_time.elapsed());
        reporter.report_completed(&summary).await;

        Ok(summary)
    }
}
