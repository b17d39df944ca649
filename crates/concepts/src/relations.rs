use crate::scorer::Concept;
use crate::types::RelatedConcept;
use semscope_corpus::FileDocument;
use std::collections::BTreeMap;

/// A pair must co-occur in at least this many distinct files to count.
pub const MIN_PAIR_STRENGTH: u32 = 2;

/// Each concept keeps at most this many strongest partners.
pub const MAX_RELATED: usize = 5;

/// Adjacency map from concept name to its strongest partners, both
/// directions populated.
pub type RelationMap = BTreeMap<String, Vec<RelatedConcept>>;

/// Detect co-occurrence relationships between retained concepts.
///
/// Concept presence in a file is a substring match against the file's
/// normalized text, not a word-boundary match: "test" co-triggers inside
/// "latest". That loose recall is intended; downstream consumers rely on
/// it.
pub fn detect_relationships(
    concepts: &[Concept],
    documents: &BTreeMap<String, FileDocument>,
) -> RelationMap {
    // BTreeMap keeps pair iteration deterministic.
    let mut pair_counts: BTreeMap<(String, String), u32> = BTreeMap::new();

    for document in documents.values() {
        let in_file: Vec<&str> = concepts
            .iter()
            .filter(|concept| document.text.contains(&concept.name))
            .map(|concept| concept.name.as_str())
            .collect();

        for i in 0..in_file.len() {
            for j in (i + 1)..in_file.len() {
                *pair_counts
                    .entry((in_file[i].to_string(), in_file[j].to_string()))
                    .or_insert(0) += 1;
            }
        }
    }

    let mut relations: RelationMap = BTreeMap::new();
    for ((a, b), strength) in pair_counts {
        if strength < MIN_PAIR_STRENGTH {
            continue;
        }
        relations.entry(a.clone()).or_default().push(RelatedConcept {
            name: b.clone(),
            strength,
        });
        relations.entry(b).or_default().push(RelatedConcept {
            name: a,
            strength,
        });
    }

    for related in relations.values_mut() {
        related.sort_by(|x, y| {
            y.strength
                .cmp(&x.strength)
                .then_with(|| x.name.cmp(&y.name))
        });
        related.truncate(MAX_RELATED);
    }

    relations
}
