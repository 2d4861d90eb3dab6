// 設定管理のトレイト定義

use crate::core::BatchError;

/// バッチ処理の設定を抽象化するトレイト
pub trait ProcessingConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 設定値の検証
    fn validate(&self) -> Result<(), BatchError> {
        if self.worker_count() == 0 {
            return Err(BatchError::configuration("worker count must be at least 1"));
        }
        if self.channel_buffer_size() == 0 {
            return Err(BatchError::configuration(
                "channel buffer size must be at least 1",
            ));
        }
        Ok(())
    }
}
