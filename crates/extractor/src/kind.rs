use crate::language::Language;
use std::path::Path;

/// How a file participates in the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Source code: comment scan plus identifier extraction
    Code(Language),
    /// Prose (markdown, plain text, README-like names): raw content
    Documentation,
    /// Structured metadata (JSON manifests): selected fields
    Metadata,
    /// Anything else: contributes nothing
    Other,
}

impl FileKind {
    /// Classify a file by its path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.to_lowercase().contains("readme") {
                return FileKind::Documentation;
            }
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return FileKind::Other;
        };

        match ext.to_lowercase().as_str() {
            "md" | "mdx" | "txt" => FileKind::Documentation,
            "json" => FileKind::Metadata,
            _ => match Language::from_extension(ext) {
                Language::Unknown => FileKind::Other,
                lang => FileKind::Code(lang),
            },
        }
    }
}
