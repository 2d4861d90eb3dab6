// バッチ処理システムのモジュール
// 機能別フォルダ構造によるアーキテクチャ

// 機能モジュール
pub mod config; // 設定管理
pub mod parallel_execution; // ワーカープールと結果集計
pub mod reporting; // 進捗報告
pub mod worker; // 単一アイテム処理

// 高レベルAPI
pub mod api;
pub mod engine;

#[cfg(test)]
pub mod tests;

// 公開API - 各機能から再エクスポート
pub use api::{create_standard_engine, process_directory, StandardEngine};
pub use config::{default_worker_count, DefaultProcessingConfig, ProcessingConfig};
pub use engine::ProcessingEngine;
pub use parallel_execution::ProcessingPipeline;
pub use reporting::{ConsoleProgressReporter, NoOpProgressReporter, ProgressReporter};
pub use worker::process_item;
