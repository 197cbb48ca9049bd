//! Extract command - pull fields from a single screenshot.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use payshot_core::BatchProcessor;
use payshot_core::models::config::PayshotConfig;
use payshot_core::models::record::TransactionRecord;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input screenshot (PNG/JPEG)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let processor = BatchProcessor::from_config(&config)?;
    debug!("Using {} OCR provider", processor.provider_name());

    let record = processor.process_image(&args.input).await;

    if record.is_failed() {
        eprintln!(
            "{} OCR failed for {} (run with -v for details)",
            style("⚠").yellow(),
            args.input.display()
        );
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Text => format_record(&record),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration from an explicit path, or fall back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<PayshotConfig> {
    Ok(if let Some(path) = config_path {
        PayshotConfig::from_file(std::path::Path::new(path))?
    } else {
        PayshotConfig::default()
    })
}

fn format_record(record: &TransactionRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Amount:             {}\n", record.amount));
    output.push_str(&format!("UPI transaction ID: {}\n", record.transaction_id));
    output.push_str(&format!("Date & time:        {}\n", record.date_time));

    output
}
