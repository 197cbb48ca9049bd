//! Tesseract OCR provider.
//!
//! Invokes the system `tesseract` binary on an image file and captures
//! the recognized text from stdout.

use std::path::Path;
use std::process::Command;

use async_trait::async_trait;
use tracing::debug;

use super::OcrProvider;
use crate::error::OcrError;

/// OCR provider backed by the system `tesseract` binary.
pub struct TesseractProvider {
    language: String,
}

impl TesseractProvider {
    /// Create a provider with the default language (`eng`).
    pub fn new() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }

    /// Set the Tesseract language code.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    fn run_tesseract(&self, image_path: &Path) -> Result<String, OcrError> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(OcrError::Recognition(format!(
                    "tesseract failed: {}",
                    stderr.trim()
                )))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(OcrError::ProviderNotAvailable(
                    "tesseract not found (install tesseract-ocr)".to_string(),
                ))
            }
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}

impl Default for TesseractProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrProvider for TesseractProvider {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn recognize(&self, path: &Path) -> Result<String, OcrError> {
        debug!("Running tesseract on {}", path.display());
        self.run_tesseract(path)
    }
}
