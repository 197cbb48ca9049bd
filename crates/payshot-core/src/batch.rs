//! Sequential batch processing of screenshot images.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{OcrError, PayshotError, Result};
use crate::models::config::{PayshotConfig, ProviderKind};
use crate::models::record::{Batch, TransactionRecord};
use crate::ocr::{ImagePreprocessor, OcrProvider, create_provider};
use crate::receipt::{ReceiptParser, RuleBasedParser};

/// Processes images one at a time, in selection order.
///
/// Each image's OCR call and field extraction complete before the next
/// image begins, so the resulting [`Batch`] stays index-aligned with the
/// input list. An OCR failure never aborts the run; the affected image
/// gets an all-`Error` record and processing continues.
pub struct BatchProcessor {
    provider: Box<dyn OcrProvider>,
    parser: RuleBasedParser,
    preprocessor: Option<ImagePreprocessor>,
}

impl BatchProcessor {
    /// Create a processor from an explicit provider and parser.
    pub fn new(provider: Box<dyn OcrProvider>, parser: RuleBasedParser) -> Self {
        Self {
            provider,
            parser,
            preprocessor: None,
        }
    }

    /// Build a processor from configuration.
    pub fn from_config(config: &PayshotConfig) -> Result<Self> {
        if config.ocr.provider == ProviderKind::Remote && config.ocr.endpoint.is_empty() {
            return Err(PayshotError::Config(
                "remote OCR endpoint is not set".to_string(),
            ));
        }

        let provider = create_provider(&config.ocr)?;
        let parser = RuleBasedParser::from_config(&config.extraction);
        let preprocessor = config
            .ocr
            .preprocess
            .enabled
            .then(|| ImagePreprocessor::from_config(&config.ocr.preprocess));

        Ok(Self {
            provider,
            parser,
            preprocessor,
        })
    }

    /// Enable image pre-processing ahead of OCR.
    pub fn with_preprocessor(mut self, preprocessor: ImagePreprocessor) -> Self {
        self.preprocessor = Some(preprocessor);
        self
    }

    /// Name of the configured OCR provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Recognize and extract one image.
    ///
    /// OCR failures are contained here: the returned record is fully
    /// sentineled instead of propagating the error.
    pub async fn process_image(&self, path: &Path) -> TransactionRecord {
        match self.recognize(path).await {
            Ok(text) => {
                debug!(
                    "OCR produced {} characters for {}",
                    text.len(),
                    path.display()
                );
                self.parser.parse(&text)
            }
            Err(e) => {
                warn!("OCR failed for {}: {}", path.display(), e);
                TransactionRecord::failed()
            }
        }
    }

    /// Process every image strictly in order.
    pub async fn process_all(&self, paths: &[PathBuf]) -> Batch {
        let mut batch = Batch::new();
        for path in paths {
            let record = self.process_image(path).await;
            batch.push(record);
        }
        batch
    }

    async fn recognize(&self, path: &Path) -> std::result::Result<String, OcrError> {
        match &self.preprocessor {
            Some(preprocessor) => {
                let image =
                    image::open(path).map_err(|e| OcrError::InvalidImage(e.to_string()))?;
                let processed = preprocessor.apply(image);

                let temp = tempfile::Builder::new()
                    .prefix("payshot-")
                    .suffix(".png")
                    .tempfile()?;
                processed
                    .save(temp.path())
                    .map_err(|e| OcrError::InvalidImage(e.to_string()))?;

                self.provider.recognize(temp.path()).await
            }
            None => self.provider.recognize(path).await,
        }
    }
}
