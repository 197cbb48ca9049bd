//! Core library for payment screenshot data extraction.
//!
//! This crate provides:
//! - OCR provider abstraction (system Tesseract binary or a remote HTTP service)
//! - Optional image pre-processing ahead of OCR
//! - Rule-based field extraction (amount, UPI transaction id, date/time)
//! - Sequential batch processing with per-image failure containment
//! - Excel export of extraction batches

pub mod batch;
pub mod error;
pub mod export;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use batch::BatchProcessor;
pub use error::{ExportError, OcrError, PayshotError, Result};
pub use export::XlsxExporter;
pub use models::config::PayshotConfig;
pub use models::record::{Batch, FieldValue, TransactionRecord};
pub use ocr::{ImagePreprocessor, OcrProvider, RemoteProvider, TesseractProvider, create_provider};
pub use receipt::{ReceiptParser, RuleBasedParser};
