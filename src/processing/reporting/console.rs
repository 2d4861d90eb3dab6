// コンソール出力による進捗報告実装

use super::traits::ProgressReporter;
use crate::core::{BatchSummary, ImagePath};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// `indicatif` のプログレスバーと失敗行を出力する
///
/// 出力を抑止したい場合は `NoOpProgressReporter` を使う。
#[derive(Default)]
pub struct ConsoleProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn create_progress_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            bar.set_style(style.progress_chars("##-"));
        }
        bar
    }

    fn current_bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|guard| guard.clone())
    }

    /// バーが表示中ならその上に、なければ標準出力に1行出す
    ///
    /// 端末以外ではバーが非表示になり `println` が何も出さないため直接出力する。
    fn print_line(&self, line: String) {
        match self.current_bar() {
            Some(bar) if !bar.is_hidden() => bar.println(line),
            _ => println!("{line}"),
        }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_discovered(&self, total_items: usize) {
        if total_items == 0 {
            println!("No images found in the input directory!");
        } else {
            println!("Found {total_items} images to process.");
        }
    }

    async fn report_started(&self, total_items: usize) {
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(Self::create_progress_bar(total_items as u64));
        }
    }

    async fn report_progress(&self, completed: usize, _total: usize) {
        if let Some(bar) = self.current_bar() {
            bar.set_position(completed as u64);
        }
    }

    async fn report_load_failure(&self, source: &ImagePath) {
        self.print_line(format!("Failed to load {source}"));
    }

    async fn report_error(&self, source: &ImagePath, error: &str) {
        self.print_line(format!("Error processing {source}: {error}"));
    }

    async fn report_completed(&self, summary: &BatchSummary) {
        if let Some(bar) = self.bar.lock().ok().and_then(|mut guard| guard.take()) {
            bar.finish();
        }
        println!("Processing complete!");
        println!(
            "Elapsed: {:.2}s ({:.1} ms/image)",
            summary.total_processing_time_ms as f64 / 1000.0,
            summary.average_time_per_item_ms
        );
    }
}
