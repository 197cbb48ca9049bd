//! Excel workbook generation.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::info;

use crate::error::ExportError;
use crate::models::config::ExportConfig;
use crate::models::record::Batch;

/// Writes a batch to an XLSX workbook, one row per record, in batch
/// order. Refuses empty batches so no zero-row file is ever produced.
pub struct XlsxExporter {
    sheet_name: String,
    include_index: bool,
}

impl XlsxExporter {
    /// Create an exporter with the default sheet name and an index column.
    pub fn new() -> Self {
        Self {
            sheet_name: "Transaction Data".to_string(),
            include_index: true,
        }
    }

    /// Build an exporter from configuration.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            sheet_name: config.sheet_name.clone(),
            include_index: config.include_index,
        }
    }

    /// Set the worksheet name.
    pub fn with_sheet_name(mut self, name: &str) -> Self {
        self.sheet_name = name.to_string();
        self
    }

    /// Enable or disable the leading index column.
    pub fn with_index(mut self, include: bool) -> Self {
        self.include_index = include;
        self
    }

    /// Write the workbook to `path`.
    pub fn export(&self, batch: &Batch, path: &Path) -> Result<(), ExportError> {
        let mut workbook = self.build(batch)?;
        workbook.save(path)?;
        info!("Exported {} records to {}", batch.len(), path.display());
        Ok(())
    }

    /// Generate the workbook in memory.
    pub fn export_buffer(&self, batch: &Batch) -> Result<Vec<u8>, ExportError> {
        let mut workbook = self.build(batch)?;
        Ok(workbook.save_to_buffer()?)
    }

    fn build(&self, batch: &Batch) -> Result<Workbook, ExportError> {
        if batch.is_empty() {
            return Err(ExportError::EmptyBatch);
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        let header_format = Format::new().set_bold().set_align(FormatAlign::Center);

        let mut col = 0u16;
        if self.include_index {
            worksheet.write_with_format(0, col, "Index", &header_format)?;
            col += 1;
        }
        worksheet.write_with_format(0, col, "Amount", &header_format)?;
        worksheet.write_with_format(0, col + 1, "UPI Transaction ID", &header_format)?;
        worksheet.write_with_format(0, col + 2, "Date & Time", &header_format)?;

        worksheet.set_column_width(col, 14)?;
        worksheet.set_column_width(col + 1, 22)?;
        worksheet.set_column_width(col + 2, 24)?;

        for (i, record) in batch.iter().enumerate() {
            let row = (i + 1) as u32;
            let mut col = 0u16;

            if self.include_index {
                worksheet.write(row, col, i as u32)?;
                col += 1;
            }
            worksheet.write(row, col, record.amount.as_str())?;
            worksheet.write(row, col + 1, record.transaction_id.as_str())?;
            worksheet.write(row, col + 2, record.date_time.as_str())?;
        }

        Ok(workbook)
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new()
    }
}
