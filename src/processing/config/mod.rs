// バッチ処理の設定管理
//
// 設定ファイルは持たない。ワーカー数とバッファサイズのみを扱う。

pub mod default;
pub mod traits;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use default::{default_worker_count, DefaultProcessingConfig};
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
