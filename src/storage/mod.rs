use anyhow::Result;
use image::GrayImage;
use mockall::automock;
use std::path::Path;

pub mod local;

/// エッジマップの書き出し先バックエンドのトレイト
#[automock]
pub trait ImageWriterBackend: Send + Sync {
    /// 画像を指定パスへ書き出す
    ///
    /// コンテナ形式は出力パスの拡張子から決まる。既存ファイルは上書きする。
    fn write(&self, image: &GrayImage, path: &Path) -> Result<()>;
}
