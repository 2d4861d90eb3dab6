pub mod cli;
pub mod core;
pub mod edge_detection;
pub mod file_scanner;
pub mod image_loader;
pub mod logging;
pub mod processing;
pub mod storage;

pub use crate::core::{BatchError, BatchSummary, ImagePath, ItemError, ItemOutcome, WorkItem};

use processing::{
    DefaultProcessingConfig, NoOpProgressReporter, ProcessingConfig, ProcessingEngine,
    ProgressReporter,
};
use std::path::Path;

// DIコンテナの役割を果たすジェネリックなApp構造体
// バックエンドを所有し、エンジン作成時にクローンして渡す
pub struct App<L, D, W>
where
    L: image_loader::ImageLoaderBackend,
    D: edge_detection::EdgeDetector,
    W: storage::ImageWriterBackend,
{
    pub loader: L,
    pub detector: D,
    pub writer: W,
}

impl<L, D, W> App<L, D, W>
where
    L: image_loader::ImageLoaderBackend + Clone + 'static,
    D: edge_detection::EdgeDetector + Clone + 'static,
    W: storage::ImageWriterBackend + Clone + 'static,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(loader: L, detector: D, writer: W) -> Self {
        Self {
            loader,
            detector,
            writer,
        }
    }

    /// カスタム設定で処理エンジンを作成
    pub fn create_processing_engine<C, R>(
        &self,
        config: C,
        reporter: R,
    ) -> ProcessingEngine<L, D, W, C, R>
    where
        C: ProcessingConfig,
        R: ProgressReporter + 'static,
    {
        ProcessingEngine::new(
            self.loader.clone(),
            self.detector.clone(),
            self.writer.clone(),
            config,
            reporter,
        )
    }

    /// 静音でディレクトリを処理（バックグラウンド用）
    pub async fn run_quiet(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        config: DefaultProcessingConfig,
    ) -> Result<BatchSummary, BatchError> {
        self.create_processing_engine(config, NoOpProgressReporter::new())
            .process_directory(input_dir, output_dir)
            .await
    }
}
