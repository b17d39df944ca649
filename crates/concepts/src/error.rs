use semscope_corpus::CorpusError;
use thiserror::Error;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, ConceptError>;

/// Errors that can abort a whole analysis run.
///
/// Per-file problems never reach this type; they are absorbed (and logged)
/// at the file boundary during corpus building.
#[derive(Error, Debug)]
pub enum ConceptError {
    /// Corpus construction failed before any work began
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),
}
