use super::ImageWriterBackend;
use anyhow::{Context, Result};
use image::{GrayImage, ImageFormat};
use std::path::Path;

/// ローカルファイルシステムへの書き出し
#[derive(Clone, Debug, Default)]
pub struct LocalImageWriter;

impl LocalImageWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ImageWriterBackend for LocalImageWriter {
    fn write(&self, image: &GrayImage, path: &Path) -> Result<()> {
        // 拡張子の大文字小文字は区別しない
        let format = ImageFormat::from_path(path)
            .with_context(|| format!("Unsupported output format: {}", path.display()))?;

        image
            .save_with_format(path, format)
            .with_context(|| format!("Failed to write image: {}", path.display()))?;

        Ok(())
    }
}
