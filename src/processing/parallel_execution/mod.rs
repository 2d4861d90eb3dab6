// 並列実行機能
// Producer-Consumer パターンによる固定数ワーカープール

pub mod collector;
pub mod consumer;
pub mod pipeline;
pub mod producer;

// 公開API
pub use collector::{spawn_result_collector, OutcomeTally};
pub use consumer::{spawn_consumers, spawn_single_consumer, WorkerBackends};
pub use pipeline::ProcessingPipeline;
pub use producer::spawn_producer;
