use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A retained domain concept with its accumulated score and strongest
/// co-occurrence partners.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DomainConcept {
    pub name: String,
    /// Accumulated heuristic score, not a raw occurrence count
    pub frequency: u32,
    pub related_concepts: Vec<RelatedConcept>,
}

/// A co-occurrence partner of a concept
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedConcept {
    pub name: String,
    /// Count of distinct files where both concepts appear
    pub strength: u32,
}

/// A concept paired with a definitional snippet and related terms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
    pub related_terms: Vec<String>,
}

/// Node of the conceptual model graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub weight: u32,
}

/// Edge of the conceptual model graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Report-sized concept graph: top concepts only, edges restricted to
/// pairs where both endpoints made the cut.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConceptualModel {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// The complete output of one analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SemanticResult {
    pub domain_concepts: Vec<DomainConcept>,
    pub domain_glossary: Vec<GlossaryEntry>,
    pub conceptual_model: ConceptualModel,
    pub concept_locations: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = SemanticResult {
            domain_concepts: vec![DomainConcept {
                name: "invoice".into(),
                frequency: 12,
                related_concepts: vec![RelatedConcept {
                    name: "settlement".into(),
                    strength: 3,
                }],
            }],
            ..SemanticResult::default()
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["domainConcepts"][0]["name"], "invoice");
        assert_eq!(json["domainConcepts"][0]["relatedConcepts"][0]["strength"], 3);
        assert!(json.get("domainGlossary").is_some());
        assert!(json.get("conceptualModel").is_some());
        assert!(json.get("conceptLocations").is_some());
    }
}
