//! literature-huffman: Huffman coding for plain-text documents.
//!
//! - [`priority_queue`]: array-backed binary min-heap
//! - [`huffman`]: frequency counting, tree construction and code assignment
//! - [`bit_packer`] / [`codes_file`]: byte packing and code table output
//!
//! [`Compressor`] ties these together and reports size statistics.

pub mod bit_packer;
pub mod codes_file;
pub mod config;
pub mod error;
pub mod huffman;
pub mod priority_queue;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::bit_packer::PackedBits;
use crate::config::CompressionConfig;
use crate::error::{CompressError, Result};
use crate::huffman::HuffmanCoding;

/// Output of one compression run.
#[derive(Debug, Clone)]
pub struct CompressedOutput {
    pub coding: HuffmanCoding,
    pub packed: PackedBits,
    pub stats: CompressionStats,
}

/// Size statistics of a compression run
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CompressionStats {
    /// UTF-8 size of the input text in bytes
    pub original_size: usize,
    /// Size of the packed bit stream in bytes
    pub compressed_size: usize,
    pub ratio: f64,
    pub bit_len: usize,
    pub padding_bits: u8,
    pub distinct_symbols: usize,
    /// Shannon entropy in bits per symbol
    pub entropy_bits: f64,
    /// Encoded bits per symbol
    pub average_code_len: f64,
}

/// The main compressor engine
pub struct Compressor {
    config: CompressionConfig,
}

impl Compressor {
    /// Create a new compressor with the given configuration
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Huffman-code `text` and pack the resulting bits into bytes
    pub fn compress_text(&self, text: &str) -> Result<CompressedOutput> {
        let symbols = huffman::symbols_from_text(text);
        let coding = huffman::encode_with_capacity(&symbols, self.config.queue_capacity)?;
        let packed = bit_packer::pack(&coding.bits)?;

        let original_size = text.len();
        let ratio = if original_size == 0 {
            1.0
        } else {
            packed.bytes.len() as f64 / original_size as f64
        };
        let average_code_len = if symbols.is_empty() {
            0.0
        } else {
            coding.bits.len() as f64 / symbols.len() as f64
        };

        let stats = CompressionStats {
            original_size,
            compressed_size: packed.bytes.len(),
            ratio,
            bit_len: packed.bit_len,
            padding_bits: packed.padding_bits,
            distinct_symbols: coding.codes.len(),
            entropy_bits: compute_entropy(&symbols),
            average_code_len,
        };
        info!(
            original = stats.original_size,
            compressed = stats.compressed_size,
            ratio = stats.ratio,
            "compressed text"
        );

        Ok(CompressedOutput {
            coding,
            packed,
            stats,
        })
    }

    /// Read a UTF-8 file and compress it, refusing files over `max_input_size`.
    pub fn compress_file(&self, path: impl AsRef<Path>) -> Result<CompressedOutput> {
        let path = path.as_ref();
        let size = fs::metadata(path)?.len();
        if size > self.config.max_input_size {
            return Err(CompressError::InputTooLarge {
                size,
                limit: self.config.max_input_size,
            });
        }
        debug!(path = %path.display(), size, "reading input");
        let text = fs::read_to_string(path)?;
        self.compress_text(&text)
    }

    /// Write the code table, the packed bytes and, if configured, a JSON report.
    pub fn write_outputs(&self, output: &CompressedOutput) -> Result<()> {
        let mut codes = fs::File::create(&self.config.codes_path)?;
        codes_file::write_codes(&mut codes, &output.coding.codes)?;
        fs::write(&self.config.output_path, &output.packed.bytes)?;
        debug!(
            codes = %self.config.codes_path.display(),
            output = %self.config.output_path.display(),
            "wrote outputs"
        );

        if let Some(report_path) = &self.config.report_path {
            fs::write(report_path, serde_json::to_vec_pretty(&output.stats)?)?;
        }
        Ok(())
    }
}

impl Default for Compressor {
    /// Create a compressor with default configuration
    fn default() -> Self {
        Self::new(CompressionConfig::default())
    }
}

/// Shannon entropy of `symbols` in bits per symbol
fn compute_entropy(symbols: &[huffman::Symbol]) -> f64 {
    if symbols.is_empty() {
        return 0.0;
    }
    let len = symbols.len() as f64;
    huffman::frequency_table(symbols)
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}
