use super::ImageLoaderBackend;
use anyhow::{Context, Result};
use image::{GrayImage, ImageReader};
use std::path::Path;

/// `image` クレートによる標準の画像ローダー
///
/// 形式は拡張子ではなくファイル内容から判定する。
#[derive(Clone, Debug, Default)]
pub struct StandardImageLoader;

impl StandardImageLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoaderBackend for StandardImageLoader {
    fn load_grayscale(&self, path: &Path) -> Result<GrayImage> {
        let image = ImageReader::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Failed to read image header: {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode image: {}", path.display()))?;

        Ok(image.to_luma8())
    }

    fn strategy_name(&self) -> &'static str {
        "Standard grayscale"
    }
}
