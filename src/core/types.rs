// バッチ処理に関連するデータ型定義

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 出力ファイル名に付与するサフィックス
pub const OUTPUT_NAME_SUFFIX: &str = "_edges";

/// 処理対象の画像ファイルパス
///
/// 探索時に作成され、以降は読み取り専用。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImagePath(PathBuf);

impl ImagePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// 拡張子を除いたファイル名
    pub fn stem(&self) -> &OsStr {
        self.0.file_stem().unwrap_or_default()
    }

    /// ドット付きの拡張子（大文字小文字は元のまま）。拡張子がなければ空
    pub fn suffix(&self) -> OsString {
        match self.0.extension() {
            Some(ext) => {
                let mut suffix = OsString::from(".");
                suffix.push(ext);
                suffix
            }
            None => OsString::new(),
        }
    }

    /// 小文字化した拡張子（ドットなし）
    pub fn normalized_extension(&self) -> Option<String> {
        self.0
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

impl fmt::Display for ImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ImagePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ImagePath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

/// 1件分の作業単位（入力画像と出力先ディレクトリの組）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    source: ImagePath,
    destination: PathBuf,
}

impl WorkItem {
    pub fn new(source: ImagePath, destination: impl Into<PathBuf>) -> Self {
        Self {
            source,
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &ImagePath {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// `<destination>/<stem>_edges<suffix>`
    ///
    /// 入力ファイル名だけから決まる。同じ stem+suffix を持つ入力は同じ出力先になり、
    /// 後から書いた方が残る。
    pub fn output_path(&self) -> PathBuf {
        let mut file_name = OsString::from(self.source.stem());
        file_name.push(OUTPUT_NAME_SUFFIX);
        file_name.push(self.source.suffix());
        self.destination.join(file_name)
    }
}

/// 個別アイテムの処理結果
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Success {
        source: ImagePath,
        output: PathBuf,
        dimensions: (u32, u32),
    },
    /// デコード段階での失敗
    LoadFailed { source: ImagePath, reason: String },
    /// フィルタ・エンコード・書き込み段階での失敗
    Failed { source: ImagePath, error: String },
}

impl ItemOutcome {
    pub fn source(&self) -> &ImagePath {
        match self {
            Self::Success { source, .. }
            | Self::LoadFailed { source, .. }
            | Self::Failed { source, .. } => source,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// バッチ全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total_items: usize,
    pub succeeded: usize,
    pub load_failures: usize,
    pub processing_failures: usize,
    pub total_processing_time_ms: u64,
    pub average_time_per_item_ms: f64,
}

impl BatchSummary {
    /// 対象ファイルがなかった場合のサマリー
    pub fn empty() -> Self {
        Self {
            total_items: 0,
            succeeded: 0,
            load_failures: 0,
            processing_failures: 0,
            total_processing_time_ms: 0,
            average_time_per_item_ms: 0.0,
        }
    }

    pub fn from_counts(
        total_items: usize,
        succeeded: usize,
        load_failures: usize,
        processing_failures: usize,
        elapsed: Duration,
    ) -> Self {
        let total_processing_time_ms = elapsed.as_millis() as u64;
        let average_time_per_item_ms = if total_items > 0 {
            elapsed.as_secs_f64() * 1000.0 / total_items as f64
        } else {
            0.0
        };

        Self {
            total_items,
            succeeded,
            load_failures,
            processing_failures,
            total_processing_time_ms,
            average_time_per_item_ms,
        }
    }

    pub fn failed(&self) -> usize {
        self.load_failures + self.processing_failures
    }

    /// 完了したアイテム数（成功・失敗の合計）
    pub fn completed(&self) -> usize {
        self.succeeded + self.failed()
    }
}
