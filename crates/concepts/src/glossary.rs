use crate::relations::RelationMap;
use crate::scorer::Concept;
use crate::types::GlossaryEntry;
use semscope_corpus::FileDocument;
use std::collections::BTreeMap;

/// Fallback definition when no substantial context exists.
pub const GENERIC_DEFINITION: &str = "A key concept in this project";

/// A context must exceed the term length by this many characters to count
/// as substantial; it filters trivial one-word matches.
const CONTEXT_MARGIN: usize = 10;

/// Generate glossary entries for up to `max_entries` concepts, in the
/// given (frequency-sorted) concept order.
///
/// Reads comments and documentation paragraphs for a defining snippet;
/// reads relationships for the related-to suffix; mutates neither.
pub fn generate_glossary(
    concepts: &[Concept],
    documents: &BTreeMap<String, FileDocument>,
    relations: &RelationMap,
    max_entries: usize,
) -> Vec<GlossaryEntry> {
    concepts
        .iter()
        .take(max_entries)
        .map(|concept| build_entry(concept, documents, relations))
        .collect()
}

fn build_entry(
    concept: &Concept,
    documents: &BTreeMap<String, FileDocument>,
    relations: &RelationMap,
) -> GlossaryEntry {
    let term = concept.name.as_str();
    let mut contexts: Vec<String> = Vec::new();

    for document in documents.values() {
        for comment in &document.comments {
            if comment.contains(term) {
                contexts.push(comment.clone());
            }
        }

        // First matching paragraph per documentation file keeps
        // definitions short.
        if !document.documentation.is_empty() && document.documentation.contains(term) {
            if let Some(paragraph) = paragraphs(&document.documentation)
                .into_iter()
                .find(|para| para.contains(term))
            {
                contexts.push(paragraph);
            }
        }
    }

    let term_len = term.chars().count();
    let mut definition = contexts
        .iter()
        .filter(|ctx| ctx.chars().count() > term_len + CONTEXT_MARGIN)
        .min_by_key(|ctx| ctx.chars().count())
        .cloned()
        .unwrap_or_else(|| GENERIC_DEFINITION.to_string());

    let related_terms: Vec<String> = relations
        .get(term)
        .map(|related| related.iter().map(|r| r.name.clone()).collect())
        .unwrap_or_default();

    if !related_terms.is_empty() {
        definition.push_str(&format!(" (related to: {})", related_terms.join(", ")));
    }

    GlossaryEntry {
        term: term.to_string(),
        definition,
        related_terms,
    }
}

/// Split documentation text on blank-line boundaries; a blank line may
/// carry stray whitespace.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelatedConcept;
    use pretty_assertions::assert_eq;

    fn concept(name: &str) -> Concept {
        Concept {
            name: name.to_string(),
            frequency: 10,
        }
    }

    fn code_doc(path: &str, comments: &[&str]) -> (String, FileDocument) {
        (
            path.to_string(),
            FileDocument {
                path: path.to_string(),
                identifiers: Vec::new(),
                comments: comments.iter().map(|c| c.to_string()).collect(),
                documentation: String::new(),
                text: comments.join(" "),
            },
        )
    }

    fn prose_doc(path: &str, documentation: &str) -> (String, FileDocument) {
        (
            path.to_string(),
            FileDocument {
                path: path.to_string(),
                identifiers: Vec::new(),
                comments: Vec::new(),
                documentation: documentation.to_string(),
                text: documentation.to_string(),
            },
        )
    }

    #[test]
    fn shortest_substantial_context_wins() {
        let documents: BTreeMap<_, _> = [code_doc(
            "a.js",
            &[
                "invoice settlement happens nightly in the batch runner and retries on failure",
                "an invoice records a billed amount",
            ],
        )]
        .into_iter()
        .collect();

        let entries = generate_glossary(
            &[concept("invoice")],
            &documents,
            &RelationMap::new(),
            10,
        );

        assert_eq!(entries[0].definition, "an invoice records a billed amount");
    }

    #[test]
    fn trivial_contexts_fall_back_to_generic_definition() {
        // "invoice!" is too close to the term length to be substantial.
        let documents: BTreeMap<_, _> =
            [code_doc("a.js", &["invoice!"])].into_iter().collect();

        let entries = generate_glossary(
            &[concept("invoice")],
            &documents,
            &RelationMap::new(),
            10,
        );

        assert_eq!(entries[0].definition, GENERIC_DEFINITION);
    }

    #[test]
    fn documentation_paragraphs_provide_context() {
        let documents: BTreeMap<_, _> = [prose_doc(
            "README.md",
            "# Overview\n\nThe ledger tracks every settlement.\n\nUnrelated trailing text.",
        )]
        .into_iter()
        .collect();

        let entries =
            generate_glossary(&[concept("ledger")], &documents, &RelationMap::new(), 10);

        assert_eq!(entries[0].definition, "The ledger tracks every settlement.");
    }

    #[test]
    fn only_first_matching_paragraph_per_file_is_used() {
        let documents: BTreeMap<_, _> = [prose_doc(
            "README.md",
            "ledger mentioned early with plenty of words here.\n\nledger again.",
        )]
        .into_iter()
        .collect();

        let entries =
            generate_glossary(&[concept("ledger")], &documents, &RelationMap::new(), 10);

        assert_eq!(
            entries[0].definition,
            "ledger mentioned early with plenty of words here."
        );
    }

    #[test]
    fn related_terms_are_appended_to_the_definition() {
        let documents: BTreeMap<_, _> =
            [code_doc("a.js", &["the ledger reconciles invoices nightly"])]
                .into_iter()
                .collect();

        let mut relations = RelationMap::new();
        relations.insert(
            "ledger".to_string(),
            vec![
                RelatedConcept {
                    name: "invoice".into(),
                    strength: 4,
                },
                RelatedConcept {
                    name: "settlement".into(),
                    strength: 2,
                },
            ],
        );

        let entries = generate_glossary(&[concept("ledger")], &documents, &relations, 10);

        assert!(entries[0]
            .definition
            .ends_with("(related to: invoice, settlement)"));
        assert_eq!(entries[0].related_terms, vec!["invoice", "settlement"]);
    }

    #[test]
    fn entry_count_is_capped() {
        let documents = BTreeMap::new();
        let all = [concept("one"), concept("two"), concept("three")];
        let entries = generate_glossary(&all, &documents, &RelationMap::new(), 2);
        assert_eq!(entries.len(), 2);
    }
}
