use crate::graph::ConceptGraph;
use crate::relations::RelationMap;
use crate::scorer::Concept;
use crate::types::{DomainConcept, GlossaryEntry, SemanticResult};
use semscope_corpus::FileDocument;
use std::collections::BTreeMap;

/// The conceptual model keeps only this many top concepts.
pub const GRAPH_NODE_LIMIT: usize = 20;

/// Package the pipeline's outputs into the final result.
///
/// `concepts` must already be sorted by frequency descending; the
/// assembler only slices, joins and re-shapes, it computes no new scores.
pub fn assemble(
    concepts: &[Concept],
    glossary: Vec<GlossaryEntry>,
    relations: &RelationMap,
    documents: &BTreeMap<String, FileDocument>,
    max_terms: usize,
) -> SemanticResult {
    let domain_concepts = concepts
        .iter()
        .take(max_terms)
        .map(|concept| DomainConcept {
            name: concept.name.clone(),
            frequency: concept.frequency,
            related_concepts: relations.get(&concept.name).cloned().unwrap_or_default(),
        })
        .collect();

    SemanticResult {
        domain_concepts,
        domain_glossary: glossary,
        conceptual_model: build_model(concepts, relations),
        concept_locations: build_locations(concepts, documents, max_terms),
    }
}

/// Top-20 concept graph; edges kept only where both endpoints made the
/// cut. Strictly a report artifact, intentionally smaller than the full
/// concept set.
fn build_model(concepts: &[Concept], relations: &RelationMap) -> crate::types::ConceptualModel {
    let mut graph = ConceptGraph::new();

    let top = &concepts[..concepts.len().min(GRAPH_NODE_LIMIT)];
    for concept in top {
        graph.add_concept(&concept.name, concept.frequency);
    }
    for concept in top {
        let Some(related) = relations.get(&concept.name) else {
            continue;
        };
        for relation in related {
            // add_relation drops edges whose partner is outside the top set.
            graph.add_relation(&concept.name, &relation.name, relation.strength);
        }
    }

    graph.to_model()
}

/// Concept → file paths whose normalized text contains it, same substring
/// rule as relationship detection. An empty list is valid.
fn build_locations(
    concepts: &[Concept],
    documents: &BTreeMap<String, FileDocument>,
    max_terms: usize,
) -> BTreeMap<String, Vec<String>> {
    let mut locations = BTreeMap::new();

    for concept in concepts.iter().take(max_terms) {
        let files: Vec<String> = documents
            .values()
            .filter(|doc| doc.text.contains(&concept.name))
            .map(|doc| doc.path.clone())
            .collect();
        locations.insert(concept.name.clone(), files);
    }

    locations
}
