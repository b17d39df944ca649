use crate::error::{CorpusError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Files above this size are skipped with a warning.
pub const MAX_FILE_SIZE_BYTES: u64 = 1_048_576; // 1 MiB

/// Directories that never contribute, regardless of caller patterns.
const IGNORED_SCOPES: &[&str] = &[
    // VCS / tooling
    ".git",
    ".hg",
    ".svn",
    ".idea",
    ".vscode",
    // caches / builds
    "node_modules",
    "dist",
    "build",
    "coverage",
    "target",
    ".cache",
    ".venv",
    "__pycache__",
    // data / vendor
    "vendor",
    "third_party",
    "third-party",
];

/// Generated bundles that would drown the corpus in minified noise.
const NOISE_SUFFIXES: &[&str] = &[".min.js", ".bundle.js"];

/// Extensions of files whose content feeds the corpus.
const CONTENT_EXTENSIONS: &[&str] = &[
    "rs", "py", "pyw", "js", "jsx", "mjs", "cjs", "ts", "tsx", "md", "mdx", "txt",
];

/// Scanner for finding analyzable files in a project
pub struct FileScanner {
    root: PathBuf,
    extra_ignores: GlobSet,
}

/// Result of a scan: candidate files plus what was skipped
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Candidate files, sorted by path for deterministic downstream order
    pub files: Vec<PathBuf>,
    /// Files skipped for exceeding the size ceiling
    pub skipped_oversize: usize,
}

impl FileScanner {
    /// Create a scanner rooted at `root`, with caller-supplied glob-style
    /// ignore patterns merged on top of the built-in defaults.
    pub fn new(root: impl AsRef<Path>, ignore_patterns: &[String]) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(CorpusError::InvalidRoot(root));
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in ignore_patterns {
            let glob = Glob::new(pattern).map_err(|e| CorpusError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            builder.add(glob);
        }
        let extra_ignores = builder
            .build()
            .map_err(|e| CorpusError::InvalidIgnorePattern {
                pattern: String::new(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            root,
            extra_ignores,
        })
    }

    /// Scan the tree for candidate files (.gitignore aware)
    pub fn scan(&self) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        let root = self.root.clone();
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true);
        builder.filter_entry(move |entry| !FileScanner::is_ignored_scope(entry.path(), &root));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if !Self::is_candidate(path) {
                        continue;
                    }
                    if self.matches_extra_ignore(path) {
                        continue;
                    }

                    if let Ok(meta) = entry.metadata() {
                        if meta.len() > MAX_FILE_SIZE_BYTES {
                            log::warn!(
                                "Skipping large file {} ({} bytes > {})",
                                path.display(),
                                meta.len(),
                                MAX_FILE_SIZE_BYTES
                            );
                            outcome.skipped_oversize += 1;
                            continue;
                        }
                    }

                    outcome.files.push(path.to_path_buf());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        outcome.files.sort();
        log::info!("Found {} candidate files", outcome.files.len());
        outcome
    }

    /// Check whether a file's content feeds the corpus: source, prose,
    /// README-like names, or a package manifest.
    fn is_candidate(path: &Path) -> bool {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            let lowered = name.to_lowercase();
            if NOISE_SUFFIXES.iter().any(|suffix| lowered.ends_with(suffix)) {
                return false;
            }
            if lowered.contains("readme") || lowered == "package.json" {
                return true;
            }
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                CONTENT_EXTENSIONS.iter().any(|candidate| candidate == &ext)
            })
            .unwrap_or(false)
    }

    fn matches_extra_ignore(&self, path: &Path) -> bool {
        if self.extra_ignores.is_empty() {
            return false;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.extra_ignores.is_match(relative) || self.extra_ignores.is_match(path)
    }

    fn is_ignored_scope(path: &Path, root: &Path) -> bool {
        if let Ok(relative) = path.strip_prefix(root) {
            for component in relative.components() {
                if let std::path::Component::Normal(name) = component {
                    let lowered = name.to_string_lossy().to_lowercase();
                    if IGNORED_SCOPES.iter().any(|ignored| ignored == &lowered) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
