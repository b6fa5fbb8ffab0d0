use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use literature_huffman::config::CompressionConfig;
use literature_huffman::Compressor;

#[derive(Debug, Parser)]
#[command(name = "literature-huffman")]
#[command(about = "Huffman-code a text file into a code table and a packed bit stream")]
struct Args {
    /// Text file to compress
    input: PathBuf,

    /// JSON config file; command-line paths override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    codes: Option<PathBuf>,

    #[arg(long)]
    output: Option<PathBuf>,

    /// Write statistics as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let start = Instant::now();

    let mut config = match &args.config {
        Some(path) => CompressionConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CompressionConfig::default(),
    };
    if let Some(codes) = args.codes {
        config.codes_path = codes;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if args.report.is_some() {
        config.report_path = args.report;
    }

    let compressor = Compressor::new(config);
    let result = compressor
        .compress_file(&args.input)
        .with_context(|| format!("compressing {}", args.input.display()))?;
    compressor.write_outputs(&result)?;

    let stats = &result.stats;
    println!("Before: {}KB", stats.original_size / 1000);
    println!("After: {}KB", stats.compressed_size / 1000);
    println!("Ratio: {:.2}%", stats.ratio * 100.0);
    println!("Time (ms): {}ms", start.elapsed().as_millis());
    Ok(())
}
