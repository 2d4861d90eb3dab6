use image::GrayImage;
use mockall::automock;

pub mod canny;

/// エッジ検出フィルタのトレイト
///
/// 出力は入力と同じ幅・高さの8bit単チャンネル画像。
#[automock]
pub trait EdgeDetector: Send + Sync {
    /// グレースケール画像からエッジマップを生成
    fn detect(&self, image: &GrayImage) -> GrayImage;

    /// フィルタ名を取得
    fn name(&self) -> &'static str;
}
