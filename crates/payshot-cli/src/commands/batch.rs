//! Batch command - process multiple screenshots sequentially and export.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};

use payshot_core::error::ExportError;
use payshot_core::models::record::Batch;
use payshot_core::{BatchProcessor, XlsxExporter};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Workbook path (default: transaction_data_<timestamp>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the workbook export
    #[arg(long)]
    no_export: bool,

    /// Also write a per-file CSV summary (summary.csv)
    #[arg(long)]
    summary: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::extract::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(
                ext.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "webp" | "tiff" | "tif" | "bmp"
            )
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching images found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} images to process",
        style("ℹ").blue(),
        files.len()
    );

    let processor = BatchProcessor::from_config(&config)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} images")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Strictly sequential: each image finishes before the next begins, so
    // the batch stays index-aligned with the file list.
    let mut batch = Batch::new();
    for path in &files {
        let record = processor.process_image(path).await;
        batch.push(record);
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    print_table(&files, &batch);

    let failed = batch.iter().filter(|r| r.is_failed()).count();
    println!();
    println!(
        "{} Processed {} images in {:?}",
        style("✓").green(),
        batch.len(),
        start.elapsed()
    );
    if failed > 0 {
        println!("   {} failed OCR", style(failed).red());
    }

    if args.summary {
        let summary_path = PathBuf::from("summary.csv");
        write_summary(&summary_path, &files, &batch)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    if !args.no_export {
        let output_path = args.output.clone().unwrap_or_else(default_workbook_name);
        let exporter = XlsxExporter::from_config(&config.export);

        match exporter.export(&batch, &output_path) {
            Ok(()) => println!(
                "{} Workbook written to {}",
                style("✓").green(),
                output_path.display()
            ),
            Err(ExportError::EmptyBatch) => {
                println!(
                    "{} No data to export. Run extraction on at least one image first.",
                    style("⚠").yellow()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn default_workbook_name() -> PathBuf {
    PathBuf::from(format!(
        "transaction_data_{}.xlsx",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn print_table(files: &[PathBuf], batch: &Batch) {
    println!();
    println!(
        "{:<6} {:<12} {:<22} {:<24} File",
        "Index", "Amount", "UPI Transaction ID", "Date & Time"
    );

    for (i, (file, record)) in files.iter().zip(batch.iter()).enumerate() {
        println!(
            "{:<6} {:<12} {:<22} {:<24} {}",
            i,
            record.amount.as_str(),
            record.transaction_id.as_str(),
            record.date_time.as_str(),
            file.file_name().and_then(|s| s.to_str()).unwrap_or("?")
        );
    }
}

fn write_summary(path: &PathBuf, files: &[PathBuf], batch: &Batch) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "index",
        "file",
        "status",
        "amount",
        "upi_transaction_id",
        "date_time",
    ])?;

    for (i, (file, record)) in files.iter().zip(batch.iter()).enumerate() {
        let index = i.to_string();
        let file_name = file.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let status = if record.is_failed() { "error" } else { "ok" };

        wtr.write_record([
            index.as_str(),
            file_name,
            status,
            record.amount.as_str(),
            record.transaction_id.as_str(),
            record.date_time.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
