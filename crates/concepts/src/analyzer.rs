use crate::assembler::assemble;
use crate::error::Result;
use crate::glossary::generate_glossary;
use crate::relations::detect_relationships;
use crate::scorer::{score_concepts, ScoringOptions};
use crate::types::SemanticResult;
use semscope_corpus::{BuildOptions, CorpusBuilder};
use std::path::Path;

/// Options for one analysis run
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Feed comment text into scoring
    pub include_comments: bool,
    /// Include documentation files (markdown, README)
    pub include_docs: bool,
    /// Feed split identifier words into scoring
    pub include_identifiers: bool,
    /// Minimum accumulated score for a concept to be retained
    pub min_term_frequency: u32,
    /// Cap on retained concepts, glossary entries and location keys
    pub max_terms: usize,
    /// Hard cap on the number of files analyzed
    pub max_files: usize,
    /// Glob-style exclusions merged with built-in defaults
    pub ignore_paths: Vec<String>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            include_docs: true,
            include_identifiers: true,
            min_term_frequency: 2,
            max_terms: 100,
            max_files: 500,
            ignore_paths: Vec::new(),
        }
    }
}

/// Run the full semantic extraction pipeline on a project tree.
///
/// A single linear pass: Discover → Extract/Batch → Score → Relate →
/// Glossify → Assemble. A fresh corpus is constructed per call, so
/// concurrent analyses of different projects in one process are safe.
///
/// Fails only when setup fails (invalid root, bad ignore pattern); a
/// project with no matching files yields a complete, empty result.
pub async fn analyze_project(
    project_dir: impl AsRef<Path>,
    options: &AnalyzerOptions,
) -> Result<SemanticResult> {
    let build_options = BuildOptions {
        ignore_paths: options.ignore_paths.clone(),
        max_files: options.max_files,
        include_comments: options.include_comments,
        include_identifiers: options.include_identifiers,
        include_docs: options.include_docs,
    };
    let build = CorpusBuilder::new(&project_dir, build_options)
        .build()
        .await?;
    log::info!(
        "Corpus built: {} documents from {} candidates",
        build.stats.analyzed,
        build.stats.candidates
    );

    let scoring = ScoringOptions {
        min_term_frequency: options.min_term_frequency,
        max_terms: options.max_terms,
    };
    let concepts = score_concepts(&build.corpus, &build.documents, &scoring);
    let relations = detect_relationships(&concepts, &build.documents);
    let glossary = generate_glossary(&concepts, &build.documents, &relations, options.max_terms);

    Ok(assemble(
        &concepts,
        glossary,
        &relations,
        &build.documents,
        options.max_terms,
    ))
}
