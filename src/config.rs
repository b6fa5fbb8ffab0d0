//! Configuration for literature-huffman

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::priority_queue::DEFAULT_CAPACITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    pub queue_capacity: usize,
    pub max_input_size: u64,
    pub codes_path: PathBuf,
    pub output_path: PathBuf,
    pub report_path: Option<PathBuf>,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_CAPACITY,
            max_input_size: 100 * 1024 * 1024, // 100 MB
            codes_path: PathBuf::from("codes.txt"),
            output_path: PathBuf::from("output.txt"),
            report_path: None,
        }
    }
}

impl CompressionConfig {
    /// Load a JSON config file. Fields left out keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read(path.as_ref())?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
