//! Image pre-processing applied before OCR.
//!
//! Quality-of-input filters only; the extraction contract does not depend
//! on them.

use image::DynamicImage;
use tracing::debug;

use crate::models::config::PreprocessConfig;

/// Pre-OCR filters: downscale, contrast, grayscale, binarization.
pub struct ImagePreprocessor {
    grayscale: bool,
    contrast: f32,
    threshold: Option<u8>,
    max_size: u32,
}

impl ImagePreprocessor {
    /// Create a preprocessor with default settings.
    pub fn new() -> Self {
        Self {
            grayscale: true,
            contrast: 0.0,
            threshold: None,
            max_size: 2048,
        }
    }

    /// Build a preprocessor from configuration.
    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            grayscale: config.grayscale,
            contrast: config.contrast,
            threshold: config.threshold,
            max_size: config.max_size,
        }
    }

    /// Set the contrast adjustment.
    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Set the binarization threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the maximum image dimension.
    pub fn with_max_size(mut self, size: u32) -> Self {
        self.max_size = size;
        self
    }

    /// Apply the configured filters.
    pub fn apply(&self, image: DynamicImage) -> DynamicImage {
        let (width, height) = (image.width(), image.height());
        let mut image = image;

        if width.max(height) > self.max_size {
            image = image.resize(
                self.max_size,
                self.max_size,
                image::imageops::FilterType::Lanczos3,
            );
            debug!(
                "Downscaled {}x{} to {}x{}",
                width,
                height,
                image.width(),
                image.height()
            );
        }

        if self.contrast != 0.0 {
            image = image.adjust_contrast(self.contrast);
        }

        if self.grayscale || self.threshold.is_some() {
            let mut gray = image.to_luma8();
            if let Some(threshold) = self.threshold {
                for pixel in gray.pixels_mut() {
                    pixel.0[0] = if pixel.0[0] >= threshold { 255 } else { 0 };
                }
            }
            image = DynamicImage::ImageLuma8(gray);
        }

        image
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}
