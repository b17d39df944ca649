//! # semscope corpus
//!
//! File discovery and corpus construction for semantic analysis.
//!
//! The [`FileScanner`] walks a project tree (gitignore-aware, with built-in
//! and caller-supplied ignore patterns) and yields candidate files in a
//! deterministic order. The [`CorpusBuilder`] extracts each file's text in
//! small batches and accumulates a term-frequency [`Corpus`] plus a
//! path-keyed [`FileDocument`] map. Both are plain values owned by the
//! build result; a fresh corpus is constructed per analysis run.

mod builder;
mod document;
mod error;
mod scanner;
mod tfidf;

pub use builder::{BuildOptions, CorpusBuild, CorpusBuilder, ScanStats};
pub use document::FileDocument;
pub use error::{CorpusError, Result};
pub use scanner::{FileScanner, ScanOutcome, MAX_FILE_SIZE_BYTES};
pub use tfidf::{is_stopword, tokenize, Corpus, ScoredTerm};
