//! OCR provider abstraction.
//!
//! The field extractor only needs a string of recognized text per image.
//! Providers supply it either by invoking the system `tesseract` binary
//! or by uploading the image to a remote OCR service; the choice is made
//! by configuration at process start.

mod preprocess;
mod remote;
mod tesseract;

pub use preprocess::ImagePreprocessor;
pub use remote::RemoteProvider;
pub use tesseract::TesseractProvider;

use std::path::Path;

use async_trait::async_trait;

use crate::error::OcrError;
use crate::models::config::{OcrConfig, ProviderKind};

/// A source of recognized text for one image.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Provider name for logging and summaries.
    fn name(&self) -> &'static str;

    /// Recognize text in the image at `path`.
    async fn recognize(&self, path: &Path) -> Result<String, OcrError>;
}

/// Create the provider selected by the configuration.
pub fn create_provider(config: &OcrConfig) -> Result<Box<dyn OcrProvider>, OcrError> {
    match config.provider {
        ProviderKind::Tesseract => Ok(Box::new(
            TesseractProvider::new().with_language(&config.language),
        )),
        ProviderKind::Remote => Ok(Box::new(RemoteProvider::new(
            &config.endpoint,
            config.timeout_secs,
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_create_provider_from_default_config() {
        let provider = create_provider(&OcrConfig::default()).unwrap();
        assert_eq!(provider.name(), "tesseract");
    }

    #[test]
    fn test_create_remote_provider() {
        let config = OcrConfig {
            provider: ProviderKind::Remote,
            ..OcrConfig::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "remote");
    }
}
