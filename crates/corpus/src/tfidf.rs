use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Closed set of articles/prepositions/conjunctions/forms-of-be. Dropped
/// from per-document term counts so they never surface as candidate
/// terms; also the rejection set for n-gram mining.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "of",
        "from", "as", "if", "is", "are", "am", "was", "were", "be", "been",
    ]
    .into_iter()
    .collect()
});

/// Check a lowercase token against the stopword set
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Term-frequency corpus across all analyzed files.
///
/// An explicit value owned by the corpus builder and read by the concept
/// scorer; no process-wide state, so independent analyses can run in the
/// same process.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<HashMap<String, usize>>,
    doc_freq: HashMap<String, usize>,
}

/// A term with its TF-IDF weight in one document
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTerm {
    pub term: String,
    pub weight: f64,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one document's normalized text. Stopwords are dropped
    /// before counting, so they carry no weight in any document.
    pub fn add_document(&mut self, text: &str) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokenize(text) {
            if is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        for term in counts.keys() {
            *self.doc_freq.entry(term.clone()).or_insert(0) += 1;
        }
        self.documents.push(counts);
    }

    /// Number of registered documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Inverse document frequency: `1 + ln(n / (1 + df))`.
    ///
    /// Raw-count tf times this idf matches the scoring the rest of the
    /// pipeline's thresholds were tuned against.
    fn idf(&self, term: &str) -> f64 {
        let df = self.doc_freq.get(term).copied().unwrap_or(0);
        1.0 + (self.documents.len() as f64 / (1 + df) as f64).ln()
    }

    /// Top terms of one document by TF-IDF weight, capped at `limit`.
    ///
    /// Ties break by term name so output never depends on map iteration
    /// order.
    pub fn top_terms(&self, doc_index: usize, limit: usize) -> Vec<ScoredTerm> {
        let Some(counts) = self.documents.get(doc_index) else {
            return Vec::new();
        };

        let mut terms: Vec<ScoredTerm> = counts
            .iter()
            .map(|(term, &count)| ScoredTerm {
                term: term.clone(),
                weight: count as f64 * self.idf(term),
            })
            .collect();

        terms.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        terms.truncate(limit);
        terms
    }
}

/// Lowercased unicode word tokens of a text blob
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|word| word.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_drops_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("Invoice settlement, nightly-batch (v2)!"),
            vec!["invoice", "settlement", "nightly", "batch", "v2"]
        );
    }

    #[test]
    fn rare_terms_outweigh_ubiquitous_terms() {
        let mut corpus = Corpus::new();
        corpus.add_document("invoice invoice ledger");
        corpus.add_document("invoice shipping");
        corpus.add_document("invoice customs");

        // "invoice" appears in all three documents, "ledger" only in one.
        let top = corpus.top_terms(0, 10);
        let ledger = top.iter().find(|t| t.term == "ledger").unwrap();
        let invoice = top.iter().find(|t| t.term == "invoice").unwrap();
        assert!(ledger.weight > invoice.weight);
    }

    #[test]
    fn idf_matches_reference_formula() {
        let mut corpus = Corpus::new();
        corpus.add_document("alpha beta");
        corpus.add_document("alpha gamma");

        // df(alpha) = 2, n = 2: idf = 1 + ln(2/3)
        let top = corpus.top_terms(0, 10);
        let alpha = top.iter().find(|t| t.term == "alpha").unwrap();
        let expected = 1.0 + (2.0f64 / 3.0).ln();
        assert!((alpha.weight - expected).abs() < 1e-12);
    }

    #[test]
    fn top_terms_ties_break_by_name() {
        let mut corpus = Corpus::new();
        corpus.add_document("zeta alpha");

        let top = corpus.top_terms(0, 10);
        assert_eq!(top[0].term, "alpha");
        assert_eq!(top[1].term, "zeta");
    }

    #[test]
    fn stopwords_never_enter_term_counts() {
        let mut corpus = Corpus::new();
        corpus.add_document("the ledger and the invoice are in the ledger");
        corpus.add_document("shipping manifest");

        let top = corpus.top_terms(0, 10);
        let names: Vec<&str> = top.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(names, vec!["ledger", "invoice"]);
    }

    #[test]
    fn limit_caps_output() {
        let mut corpus = Corpus::new();
        corpus.add_document("one two three four five");
        assert_eq!(corpus.top_terms(0, 2).len(), 2);
    }

    #[test]
    fn out_of_range_document_is_empty() {
        let corpus = Corpus::new();
        assert!(corpus.top_terms(3, 10).is_empty());
    }
}
