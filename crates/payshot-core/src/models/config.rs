//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::receipt::rules::LineShape;

/// Main configuration for the payshot pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PayshotConfig {
    /// OCR provider configuration.
    pub ocr: OcrConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Spreadsheet export configuration.
    pub export: ExportConfig,
}

impl Default for PayshotConfig {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            extraction: ExtractionConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

/// Which OCR collaborator to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// System `tesseract` binary.
    Tesseract,
    /// Remote HTTP OCR service.
    Remote,
}

/// OCR provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Selected OCR provider.
    pub provider: ProviderKind,

    /// Tesseract language code.
    pub language: String,

    /// Endpoint of the remote OCR service.
    pub endpoint: String,

    /// Request timeout for the remote provider, in seconds.
    pub timeout_secs: u64,

    /// Image pre-processing applied before OCR.
    pub preprocess: PreprocessConfig,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Tesseract,
            language: "eng".to_string(),
            endpoint: "http://localhost:5000/ocr".to_string(),
            timeout_secs: 30,
            preprocess: PreprocessConfig::default(),
        }
    }
}

/// Pre-OCR image filters. Quality-of-input only; disabling them does not
/// change the extraction contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Apply any pre-processing at all.
    pub enabled: bool,

    /// Convert to grayscale.
    pub grayscale: bool,

    /// Contrast adjustment; 0.0 leaves the image unchanged.
    pub contrast: f32,

    /// Binarization threshold (0-255); `null` disables thresholding.
    pub threshold: Option<u8>,

    /// Maximum image dimension (longer side) before downscaling.
    pub max_size: u32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            grayscale: true,
            contrast: 0.0,
            threshold: None,
            max_size: 2048,
        }
    }
}

/// Amount rule-set selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmountStrategy {
    /// Line scan with whole-text fallback.
    LineScan,
    /// Currency glyph followed by an integer numeral.
    CurrencySymbol,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Which amount rule set to evaluate.
    pub amount_strategy: AmountStrategy,

    /// Accepted shape for the line above an anchor line.
    pub line_shape: LineShape,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            amount_strategy: AmountStrategy::LineScan,
            line_shape: LineShape::Tolerant,
        }
    }
}

/// Spreadsheet export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Worksheet name.
    pub sheet_name: String,

    /// Emit a leading index column.
    pub include_index: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Transaction Data".to_string(),
            include_index: true,
        }
    }
}

impl PayshotConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = PayshotConfig::default();

        assert_eq!(config.ocr.provider, ProviderKind::Tesseract);
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(config.extraction.amount_strategy, AmountStrategy::LineScan);
        assert_eq!(config.extraction.line_shape, LineShape::Tolerant);
        assert_eq!(config.export.sheet_name, "Transaction Data");
        assert!(!config.ocr.preprocess.enabled);
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PayshotConfig::default();
        config.ocr.provider = ProviderKind::Remote;
        config.ocr.preprocess.enabled = true;
        config.ocr.preprocess.threshold = Some(160);
        config.save(&path).unwrap();

        let loaded = PayshotConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ocr.provider, ProviderKind::Remote);
        assert!(loaded.ocr.preprocess.enabled);
        assert_eq!(loaded.ocr.preprocess.threshold, Some(160));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ocr": {"provider": "remote"}}"#).unwrap();

        let config = PayshotConfig::from_file(&path).unwrap();
        assert_eq!(config.ocr.provider, ProviderKind::Remote);
        assert_eq!(config.ocr.language, "eng");
    }
}
