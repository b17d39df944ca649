use crate::document::FileDocument;
use crate::error::Result;
use crate::scanner::FileScanner;
use crate::tfidf::Corpus;
use semscope_extractor::{extract, ExtractOptions, FileKind};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Files processed per batch before yielding to the runtime.
const BATCH_SIZE: usize = 20;

/// Options controlling corpus construction
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Glob-style exclusion patterns merged with built-in defaults
    pub ignore_paths: Vec<String>,
    /// Hard cap on the number of files analyzed
    pub max_files: usize,
    /// Feed comment text into each file's scoring blob
    pub include_comments: bool,
    /// Feed split identifier words into each file's scoring blob
    pub include_identifiers: bool,
    /// Include documentation files (markdown, README) at all
    pub include_docs: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            ignore_paths: Vec::new(),
            max_files: 500,
            include_comments: true,
            include_identifiers: true,
            include_docs: true,
        }
    }
}

/// Counters describing what a build actually processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Candidate files found by the scanner
    pub candidates: usize,
    /// Files that contributed a non-empty document
    pub analyzed: usize,
    /// Files skipped for exceeding the size ceiling
    pub skipped_oversize: usize,
    /// Candidate list was truncated to `max_files`
    pub truncated: bool,
}

/// A built corpus: the term-frequency structure, the per-file documents,
/// and the stats of the run. Both maps are read-only for later stages.
#[derive(Debug)]
pub struct CorpusBuild {
    pub corpus: Corpus,
    pub documents: BTreeMap<String, FileDocument>,
    pub stats: ScanStats,
}

/// Builds the term-frequency corpus for one project tree
pub struct CorpusBuilder {
    root: PathBuf,
    options: BuildOptions,
}

impl CorpusBuilder {
    pub fn new(root: impl AsRef<Path>, options: BuildOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Discover candidate files and build the corpus.
    ///
    /// Fails only on setup problems (bad root, bad ignore pattern); every
    /// per-file error is logged and absorbed at that file's boundary.
    pub async fn build(&self) -> Result<CorpusBuild> {
        let scanner = FileScanner::new(&self.root, &self.options.ignore_paths)?;
        let outcome = scanner.scan();

        let mut files = outcome.files;
        let mut stats = ScanStats {
            candidates: files.len(),
            skipped_oversize: outcome.skipped_oversize,
            ..ScanStats::default()
        };

        if files.len() > self.options.max_files {
            log::warn!(
                "Limiting analysis to {} files out of {}",
                self.options.max_files,
                files.len()
            );
            files.truncate(self.options.max_files);
            stats.truncated = true;
        }

        let extract_options = ExtractOptions {
            include_comments: self.options.include_comments,
            include_identifiers: self.options.include_identifiers,
        };

        let mut corpus = Corpus::new();
        let mut documents = BTreeMap::new();

        for batch in files.chunks(BATCH_SIZE) {
            for path in batch {
                if let Some(document) = self.process_file(path, extract_options).await {
                    stats.analyzed += 1;
                    corpus.add_document(&document.text);
                    documents.insert(document.path.clone(), document);
                }
            }
            // Batch boundary: purely a scheduling courtesy, no ordering
            // or correctness significance.
            tokio::task::yield_now().await;
        }

        Ok(CorpusBuild {
            corpus,
            documents,
            stats,
        })
    }

    /// Extract one file into a document; `None` means zero contribution.
    async fn process_file(
        &self,
        path: &Path,
        extract_options: ExtractOptions,
    ) -> Option<FileDocument> {
        let kind = FileKind::from_path(path);
        if kind == FileKind::Other {
            return None;
        }
        if kind == FileKind::Documentation && !self.options.include_docs {
            return None;
        }

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Skipping unreadable file {}: {e}", path.display());
                return None;
            }
        };

        let extraction = extract(&content, kind, extract_options);
        if extraction.text.trim().is_empty() {
            return None;
        }

        let rel_path = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        Some(FileDocument {
            path: rel_path,
            identifiers: extraction.identifiers,
            comments: extraction.comments,
            documentation: extraction.documentation,
            text: extraction.text,
        })
    }
}
