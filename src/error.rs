//! Error types for literature-huffman

use thiserror::Error;

/// Misuse of the priority queue API.
///
/// There is no "absent element" variant: `insert` takes an owned value, so
/// a missing element cannot reach the queue.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("priority queue is empty")]
    EmptyQueue,
}

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("symbol {0:#x} is not a valid character")]
    InvalidSymbol(u32),

    #[error("input too large: {size} bytes exceeds limit of {limit}")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CompressError {
    fn from(err: serde_json::Error) -> Self {
        CompressError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompressError>;
