//! Error types for loading cracking resources and parsing keys

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrackError {
    #[error("Malformed quadgram entry on line {line}: {content:?}")]
    MalformedQuadgram { line: usize, content: String },

    #[error("Quadgram table is empty (total count must be > 0)")]
    EmptyQuadgramTable,

    #[error("Invalid key {0:?} (must be a permutation of the 26 letters A-Z)")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CrackError>;
