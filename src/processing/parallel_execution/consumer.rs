// Consumer - 固定数ワーカープール

use crate::core::{ItemError, ItemOutcome, WorkItem};
use crate::edge_detection::EdgeDetector;
use crate::image_loader::ImageLoaderBackend;
use crate::processing::worker::process_item;
use crate::storage::ImageWriterBackend;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

/// ワーカーが共有する処理バックエンド一式
pub struct WorkerBackends<L, D, W> {
    pub loader: Arc<L>,
    pub detector: Arc<D>,
    pub writer: Arc<W>,
}

impl<L, D, W> Clone for WorkerBackends<L, D, W> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            detector: Arc::clone(&self.detector),
            writer: Arc::clone(&self.writer),
        }
    }
}

/// 単一Consumerワーカー
///
/// キューが空になって閉じるまでアイテムを取り出し続け、処理した件数を返す。
/// デコード・エンコードはブロッキングスレッドで実行し、パニックもアイテム単位の失敗として扱う。
pub fn spawn_single_consumer<L, D, W>(
    worker_id: usize,
    backends: WorkerBackends<L, D, W>,
    work_rx: Arc<Mutex<mpsc::Receiver<WorkItem>>>,
    result_tx: mpsc::Sender<ItemOutcome>,
) -> tokio::task::JoinHandle<usize>
where
    L: ImageLoaderBackend + 'static,
    D: EdgeDetector + 'static,
    W: ImageWriterBackend + 'static,
{
    tokio::spawn(async move {
        debug!(worker_id, "worker started");
        let mut processed = 0;

        loop {
            // 次の作業を取得
            let item = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(item) => item,
                    None => break,
                }
            };

            debug!(worker_id, source = %item.source(), "processing item");
            let source = item.source().clone();
            let task_backends = backends.clone();
            let outcome = match tokio::task::spawn_blocking(move || {
                process_item(
                    task_backends.loader.as_ref(),
                    task_backends.detector.as_ref(),
                    task_backends.writer.as_ref(),
                    &item,
                )
            })
            .await
            {
                Ok(outcome) => outcome,
                Err(join_error) => ItemOutcome::Failed {
                    source,
                    error: ItemError::panicked(join_error).to_string(),
                },
            };
            processed += 1;

            if result_tx.send(outcome).await.is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }

        debug!(worker_id, processed, "worker finished");
        processed
    })
}

/// Consumers: ちょうど `worker_count` 個のワーカーを起動
///
/// 全ワーカーが終了した時点で結果チャンネルの送信側がすべてドロップされる。
pub fn spawn_consumers<L, D, W>(
    backends: WorkerBackends<L, D, W>,
    work_rx: mpsc::Receiver<WorkItem>,
    result_tx: mpsc::Sender<ItemOutcome>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<usize>>
where
    L: ImageLoaderBackend + 'static,
    D: EdgeDetector + 'static,
    W: ImageWriterBackend + 'static,
{
    let work_rx = Arc::new(Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_consumer(
                worker_id,
                backends.clone(),
                Arc::clone(&work_rx),
                result_tx.clone(),
            )
        })
        .collect()
}
