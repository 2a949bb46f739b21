use thiserror::Error;

/// Errors raised by vectorization, projection and body loading.
/// None of them are recovered internally; the caller adjusts its input and retries.
#[derive(Error, Debug)]
pub enum LsaError {
    /// The body has no documents
    #[error("body is empty")]
    EmptyBody,

    /// Every term was removed by stop words or the min document frequency cutoff
    #[error("dictionary is empty after filtering")]
    EmptyDictionary,

    /// Requested topic count outside `1..max`
    #[error("invalid rank {k}: must satisfy 1 <= k < {max}")]
    InvalidRank { k: usize, max: usize },

    /// Matrix with zero rows or zero columns
    #[error("degenerate matrix shape {rows}x{cols}")]
    DimensionMismatch { rows: usize, cols: usize },

    /// Topic column index out of range
    #[error("topic {topic} out of range (model has {topics} topics)")]
    InvalidTopic { topic: usize, topics: usize },

    /// Column not found in the CSV header
    #[error("missing column `{0}`")]
    MissingColumn(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LsaError>;
