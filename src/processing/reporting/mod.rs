// 進捗報告
//
// 利用者向けのコンソール出力はすべてこのトレイト経由で行う。

pub mod console;
pub mod noop;
pub mod traits;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use console::ConsoleProgressReporter;
pub use noop::NoOpProgressReporter;
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
