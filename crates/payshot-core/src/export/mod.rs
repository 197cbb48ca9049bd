//! Spreadsheet export for extraction batches.

mod xlsx;

pub use xlsx::XlsxExporter;
