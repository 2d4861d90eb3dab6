// 進捗報告のトレイト定義

use crate::core::{BatchSummary, ImagePath};

/// 進捗報告を抽象化するトレイト
#[async_trait::async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 探索で見つかった画像数の報告（0件の場合も呼ばれる）
    async fn report_discovered(&self, total_items: usize);

    /// ワーカープールへの投入開始
    async fn report_started(&self, total_items: usize);

    /// 1アイテム完了ごとの報告（成功・失敗を問わず完了順に呼ばれる）
    async fn report_progress(&self, completed: usize, total: usize);

    /// デコード失敗の報告
    async fn report_load_failure(&self, source: &ImagePath);

    /// デコード以外の処理失敗の報告
    async fn report_error(&self, source: &ImagePath, error: &str);

    /// バッチ完了の報告
    async fn report_completed(&self, summary: &BatchSummary);
}
