use super::EdgeDetector;
use image::GrayImage;

/// ヒステリシス閾値（低）
pub const LOW_THRESHOLD: f32 = 100.0;
/// ヒステリシス閾値（高）
pub const HIGH_THRESHOLD: f32 = 200.0;

/// `imageproc` の Canny 法によるエッジ検出
#[derive(Clone, Debug)]
pub struct CannyDetector {
    low_threshold: f32,
    high_threshold: f32,
}

impl Default for CannyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CannyDetector {
    pub fn new() -> Self {
        Self {
            low_threshold: LOW_THRESHOLD,
            high_threshold: HIGH_THRESHOLD,
        }
    }

    pub fn thresholds(&self) -> (f32, f32) {
        (self.low_threshold, self.high_threshold)
    }
}

impl EdgeDetector for CannyDetector {
    fn detect(&self, image: &GrayImage) -> GrayImage {
        imageproc::edges::canny(image, self.low_threshold, self.high_threshold)
    }

    fn name(&self) -> &'static str {
        "Canny"
    }
}
