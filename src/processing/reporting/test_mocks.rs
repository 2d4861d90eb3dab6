// テスト用の進捗報告モック実装

use super::traits::ProgressReporter;
use crate::core::{BatchSummary, ImagePath};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockProgressReporter {
    pub discovered_calls: Arc<Mutex<Vec<usize>>>,
    pub started_calls: Arc<Mutex<Vec<usize>>>,
    pub progress_calls: Arc<Mutex<Vec<(usize, usize)>>>,
    pub load_failure_calls: Arc<Mutex<Vec<ImagePath>>>,
    pub error_calls: Arc<Mutex<Vec<(ImagePath, String)>>>,
    pub completed_called: Arc<Mutex<Option<BatchSummary>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_count(&self) -> usize {
        self.progress_calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ProgressReporter for MockProgressReporter {
    async fn report_discovered(&self, total_items: usize) {
        self.discovered_calls.lock().unwrap().push(total_items);
    }

    async fn report_started(&self, total_items: usize) {
        self.started_calls.lock().unwrap().push(total_items);
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.progress_calls.lock().unwrap().push((completed, total));
    }

    async fn report_load_failure(&self, source: &ImagePath) {
        self.load_failure_calls.lock().unwrap().push(source.clone());
    }

    async fn report_error(&self, source: &ImagePath, error: &str) {
        self.error_calls
            .lock()
            .unwrap()
            .push((source.clone(), error.to_string()));
    }

    async fn report_completed(&self, summary: &BatchSummary) {
        *self.completed_called.lock().unwrap() = Some(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_progress_reporter_trait() {
        let reporter = MockProgressReporter::new();
        let source = ImagePath::new("/path/to/file.jpg");

        reporter.report_discovered(2).await;
        reporter.report_started(2).await;
        reporter.report_progress(1, 2).await;
        reporter.report_load_failure(&source).await;
        reporter.report_progress(2, 2).await;
        reporter.report_completed(&BatchSummary::empty()).await;

        assert_eq!(*reporter.discovered_calls.lock().unwrap(), vec![2]);
        assert_eq!(*reporter.progress_calls.lock().unwrap(), vec![(1, 2), (2, 2)]);
        assert_eq!(*reporter.load_failure_calls.lock().unwrap(), vec![source]);
        assert!(reporter.completed_called.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_progress_reporter_as_trait_object() {
        let reporter = MockProgressReporter::new();
        let reporter_ref: &dyn ProgressReporter = &reporter;

        reporter_ref
            .report_error(&ImagePath::new("test.jpg"), "test error")
            .await;

        let error_calls = reporter.error_calls.lock().unwrap();
        assert_eq!(error_calls.len(), 1);
        assert_eq!(error_calls[0].1, "test error");
    }
}
