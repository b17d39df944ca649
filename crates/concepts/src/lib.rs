//! # semscope concepts
//!
//! The semantic extraction core: turns a built corpus into weighted domain
//! concepts, a co-occurrence relationship graph, a glossary, and a
//! concept→file index.
//!
//! ## Pipeline
//!
//! ```text
//! project tree
//!     │
//!     ├──> Corpus Builder (semscope-corpus)
//!     │      └─ FileDocument map + term-frequency corpus
//!     │
//!     ├──> Concept Scorer
//!     │      ├─ per-document TF-IDF top terms
//!     │      ├─ stoplist / length / numeric filters
//!     │      └─ bigram/trigram mining
//!     │
//!     ├──> Relationship Detector (co-occurrence pairs)
//!     ├──> Glossary Generator (definitional context snippets)
//!     └──> Result Assembler (concepts, glossary, graph, locations)
//! ```
//!
//! The pass is strictly linear; no stage reads back from a later one, and
//! no state survives between runs.

mod analyzer;
mod assembler;
mod error;
mod glossary;
mod graph;
mod relations;
mod scorer;
mod types;

pub use analyzer::{analyze_project, AnalyzerOptions};
pub use assembler::assemble;
pub use error::{ConceptError, Result};
pub use glossary::generate_glossary;
pub use graph::ConceptGraph;
pub use relations::{detect_relationships, RelationMap};
pub use scorer::{score_concepts, Concept, ScoringOptions};
pub use types::{
    ConceptualModel, DomainConcept, GlossaryEntry, GraphEdge, GraphNode, RelatedConcept,
    SemanticResult,
};
