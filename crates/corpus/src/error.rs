use std::path::PathBuf;
use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while building a corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The project root is missing or not a directory
    #[error("Invalid project root: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// A caller-supplied ignore pattern failed to compile
    #[error("Invalid ignore pattern {pattern:?}: {reason}")]
    InvalidIgnorePattern { pattern: String, reason: String },
}
