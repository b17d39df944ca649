//! # semscope extractor
//!
//! Per-file text extraction for semantic analysis.
//!
//! Given a file's content and kind, produces a normalized text blob plus the
//! raw identifier tokens and comment strings found in it. Code files go
//! through a structural (tree-sitter) identifier pass with a regex fallback;
//! documentation files contribute their raw prose; JSON manifests contribute
//! selected metadata fields.
//!
//! Extraction is stateless: one bad file never affects another.

mod error;
mod extractor;
mod kind;
mod language;
mod pattern;
mod structural;

pub use error::{ExtractError, Result};
pub use extractor::{extract, split_identifier_into_words, ExtractOptions, Extraction};
pub use kind::FileKind;
pub use language::Language;
pub use pattern::PatternExtractor;
pub use structural::StructuralExtractor;
