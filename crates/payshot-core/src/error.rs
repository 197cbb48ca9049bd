//! Error types for the payshot-core library.

use thiserror::Error;

/// Main error type for the payshot library.
#[derive(Error, Debug)]
pub enum PayshotError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The configured provider cannot run (missing binary, bad setup).
    #[error("OCR provider not available: {0}")]
    ProviderNotAvailable(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Transport failure talking to a remote OCR service.
    #[error("OCR request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote OCR service replied with something unusable.
    #[error("malformed OCR response: {0}")]
    MalformedResponse(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to spreadsheet export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Export was requested on an empty batch; no file is produced.
    #[error("nothing to export: the batch is empty")]
    EmptyBatch,

    /// Workbook generation failed.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for the payshot library.
pub type Result<T> = std::result::Result<T, PayshotError>;
