use serde::{Deserialize, Serialize};

/// One analyzed file's contribution to the corpus.
///
/// Created once during corpus building and immutable afterwards; later
/// pipeline stages only read `text`, `comments` and `documentation`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDocument {
    /// Project-relative path (unique key within a run)
    pub path: String,

    /// Raw identifier tokens in source order
    pub identifiers: Vec<String>,

    /// Raw comment text in source order
    pub comments: Vec<String>,

    /// Raw prose for documentation files, empty otherwise
    pub documentation: String,

    /// Normalized blob used for corpus scoring
    pub text: String,
}
