//! Error types for descriptor building and similarity queries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynonymError {
    /// A similarity needed a norm that turned out to be zero.
    #[error("similarity is undefined for zero norm (left: {left_norm}, right: {right_norm})")]
    UndefinedSimilarity { left_norm: f64, right_norm: f64 },

    /// The queried word has no descriptor.
    #[error("no descriptor exists for word '{word}'")]
    UnknownWord { word: String },

    #[error("no choices were given for word '{word}'")]
    EmptyChoices { word: String },

    /// A test record line could not be parsed.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SynonymError>;
