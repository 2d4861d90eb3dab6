use anyhow::Result;
use image::GrayImage;
use mockall::automock;
use std::path::Path;

pub mod standard;

/// 画像読み込みバックエンドのトレイト
///
/// ワーカーのブロッキングスレッドから呼ばれるため同期APIとする。
#[automock]
pub trait ImageLoaderBackend: Send + Sync {
    /// ファイルパスから8bitグレースケール画像として読み込む
    ///
    /// 読めない・壊れている・未対応形式の場合はエラーを返す。
    fn load_grayscale(&self, path: &Path) -> Result<GrayImage>;

    /// 読み込み戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}
