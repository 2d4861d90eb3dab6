// 呼び出しを記録するレポーター
// ライブラリ内部のテストモックはテストビルドにしか存在しないため、統合テスト側で用意する

use async_trait::async_trait;
use edge_batch::processing::ProgressReporter;
use edge_batch::{BatchSummary, ImagePath};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    Discovered(usize),
    Started(usize),
    Progress(usize, usize),
    LoadFailure(ImagePath),
    Error(ImagePath, String),
    Completed(BatchSummary),
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn progress_ticks(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Progress(completed, _) => Some(completed),
                _ => None,
            })
            .collect()
    }

    pub fn load_failures(&self) -> Vec<ImagePath> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::LoadFailure(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressReporter for RecordingReporter {
    async fn report_discovered(&self, total_items: usize) {
        self.push(ReportEvent::Discovered(total_items));
    }

    async fn report_started(&self, total_items: usize) {
        self.push(ReportEvent::Started(total_items));
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.push(ReportEvent::Progress(completed, total));
    }

    async fn report_load_failure(&self, source: &ImagePath) {
        self.push(ReportEvent::LoadFailure(source.clone()));
    }

    async fn report_error(&self, source: &ImagePath, error: &str) {
        self.push(ReportEvent::Error(source.clone(), error.to_string()));
    }

    async fn report_completed(&self, summary: &BatchSummary) {
        self.push(ReportEvent::Completed(summary.clone()));
    }
}
