// 高レベル公開API
// 標準バックエンドを組み合わせたエンジンを簡単に作成するための便利な関数

use super::config::DefaultProcessingConfig;
use super::engine::ProcessingEngine;
use super::reporting::ProgressReporter;
use crate::core::{BatchError, BatchSummary};
use crate::edge_detection::canny::CannyDetector;
use crate::image_loader::standard::StandardImageLoader;
use crate::storage::local::LocalImageWriter;
use std::path::Path;

/// 標準構成（image デコーダ・Canny・ローカル書き出し）のエンジン
pub type StandardEngine<R> = ProcessingEngine<
    StandardImageLoader,
    CannyDetector,
    LocalImageWriter,
    DefaultProcessingConfig,
    R,
>;

/// 標準構成のエンジンを作成
pub fn create_standard_engine<R>(config: DefaultProcessingConfig, reporter: R) -> StandardEngine<R>
where
    R: ProgressReporter + 'static,
{
    ProcessingEngine::new(
        StandardImageLoader::new(),
        CannyDetector::new(),
        LocalImageWriter::new(),
        config,
        reporter,
    )
}

/// 標準構成でディレクトリを一括処理
pub async fn process_directory<R>(
    input_dir: &Path,
    output_dir: &Path,
    config: DefaultProcessingConfig,
    reporter: R,
) -> Result<BatchSummary, BatchError>
where
    R: ProgressReporter + 'static,
{
    create_standard_engine(config, reporter)
        .process_directory(input_dir, output_dir)
        .await
}
