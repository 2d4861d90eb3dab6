// ProcessingEngine - 探索からワーカープール実行までのバッチドライバー

use super::config::ProcessingConfig;
use super::parallel_execution::ProcessingPipeline;
use super::reporting::ProgressReporter;
use crate::core::{BatchError, BatchSummary, WorkItem};
use crate::edge_detection::EdgeDetector;
use crate::file_scanner::FileScanner;
use crate::image_loader::ImageLoaderBackend;
use crate::storage::ImageWriterBackend;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// 依存性注入によるバッチ処理エンジン
pub struct ProcessingEngine<L, D, W, C, R> {
    loader: Arc<L>,
    detector: Arc<D>,
    writer: Arc<W>,
    config: C,
    reporter: Arc<R>,
}

impl<L, D, W, C, R> ProcessingEngine<L, D, W, C, R>
where
    L: ImageLoaderBackend + 'static,
    D: EdgeDetector + 'static,
    W: ImageWriterBackend + 'static,
    C: ProcessingConfig,
    R: ProgressReporter + 'static,
{
    /// コンストラクタインジェクション
    pub fn new(loader: L, detector: D, writer: W, config: C, reporter: R) -> Self {
        Self {
            loader: Arc::new(loader),
            detector: Arc::new(detector),
            writer: Arc::new(writer),
            config,
            reporter: Arc::new(reporter),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 入力ディレクトリの画像をすべてエッジマップに変換して出力ディレクトリへ書き出す
    ///
    /// 出力ディレクトリを用意してから探索を完了させ、対象が0件ならワーカープールを起動せずに戻る。
    /// 探索の失敗だけがエラーとして返り、アイテム単位の失敗はサマリーに数えられる。
    pub async fn process_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<BatchSummary, BatchError> {
        self.config.validate()?;

        FileScanner::prepare_output_dir(output_dir)?;
        let images = FileScanner::scan_directory(input_dir)?;
        debug!(
            input = %input_dir.display(),
            found = images.len(),
            "discovery finished"
        );

        self.reporter.report_discovered(images.len()).await;
        if images.is_empty() {
            return Ok(BatchSummary::empty());
        }

        let items = images
            .into_iter()
            .map(|source| WorkItem::new(source, output_dir))
            .collect();

        self.pipeline()
            .execute(items, &self.config, Arc::clone(&self.reporter))
            .await
    }

    fn pipeline(&self) -> ProcessingPipeline<L, D, W> {
        ProcessingPipeline::new(
            Arc::clone(&self.loader),
            Arc::clone(&self.detector),
            Arc::clone(&self.writer),
        )
    }
}
