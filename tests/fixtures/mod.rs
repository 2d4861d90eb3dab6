// 統合テスト用のユーティリティ
// テスト画像の生成と記録用レポーター

pub mod mocks;

// 公開API
pub use mocks::*;
pub use test_data::*;
