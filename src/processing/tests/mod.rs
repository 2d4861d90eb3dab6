// テストユーティリティ
// 単体テストで共有する画像生成ヘルパー


pub use test_data::*;
