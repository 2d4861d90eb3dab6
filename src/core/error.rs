// バッチ処理のカスタムエラー型定義
//
// BatchError はバッチ全体を止めるエラー、ItemError は1アイテムだけを止めるエラー。

use std::path::{Path, PathBuf};
use thiserror::Error;

/// バッチ全体に関わる致命的なエラー
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to scan input directory {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("input path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("channel error: {message}")]
    Channel { message: String },

    #[error("worker task failed: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl BatchError {
    pub fn discovery(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Discovery {
            path: path.into(),
            source,
        }
    }

    pub fn output_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel {
            message: message.into(),
        }
    }
}

impl From<tokio::task::JoinError> for BatchError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }
}

/// 1アイテムの処理中に発生するエラー
///
/// バッチには伝播せず、ワーカー内で `ItemOutcome` に変換される。
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Failed to load {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("edge map is {actual:?} but input was {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("failed to write {}: {}", path.display(), describe_chain(source))]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("worker panicked: {message}")]
    Panicked { message: String },
}

impl ItemError {
    pub fn decode(path: &Path, source: anyhow::Error) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: anyhow::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// spawn_blocking の JoinError からパニック内容を取り出す
    pub fn panicked(error: tokio::task::JoinError) -> Self {
        let message = if error.is_panic() {
            let payload = error.into_panic();
            if let Some(text) = payload.downcast_ref::<&str>() {
                (*text).to_string()
            } else if let Some(text) = payload.downcast_ref::<String>() {
                text.clone()
            } else {
                "unknown panic payload".to_string()
            }
        } else {
            error.to_string()
        };

        Self::Panicked { message }
    }

    /// デコード失敗かどうか
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// 利用者向けの失敗理由
    ///
    /// デコード失敗は原因チェーンを重複なしで並べる。
    pub fn reason(&self) -> String {
        match self {
            Self::Decode { source, .. } => describe_chain(source),
            other => other.to_string(),
        }
    }
}

/// エラーチェーンを ": " で連結する
///
/// `image` のエラーのように Display が原因を含む場合、同じ文言が続くので省く。
pub fn describe_chain(error: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in error.chain() {
        let message = cause.to_string();
        if parts.last().is_some_and(|previous| previous.contains(&message)) {
            continue;
        }
        parts.push(message);
    }
    parts.join(": ")
}
