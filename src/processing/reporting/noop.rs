// 何もしない進捗報告実装（テスト・ベンチマーク用）

use super::traits::ProgressReporter;
use crate::core::{BatchSummary, ImagePath};
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_discovered(&self, _total_items: usize) {}

    async fn report_started(&self, _total_items: usize) {}

    async fn report_progress(&self, _completed: usize, _total: usize) {}

    async fn report_load_failure(&self, _source: &ImagePath) {}

    async fn report_error(&self, _source: &ImagePath, _error: &str) {}

    async fn report_completed(&self, _summary: &BatchSummary) {}
}
