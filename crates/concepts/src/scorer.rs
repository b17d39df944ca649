use once_cell::sync::Lazy;
use semscope_corpus::{is_stopword, tokenize, Corpus, FileDocument};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Scale applied to a term's TF-IDF weight before accumulating it into
/// the concept's frequency score.
pub const TFIDF_SCALE: f64 = 10.0;

/// Flat score added for each observed occurrence of an accepted n-gram.
pub const NGRAM_BONUS: u32 = 5;

/// Common programming vocabulary is still accepted when its TF-IDF weight
/// reaches this bar; unusually strong weight suggests domain-specific reuse.
pub const COMMON_TERM_WEIGHT_BAR: f64 = 7.0;

/// Tokens shorter than this never become concepts.
pub const MIN_TOKEN_LEN: usize = 3;

/// Generic programming vocabulary that rarely names a domain concept.
static COMMON_PROGRAMMING_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "function", "method", "class", "object", "array", "string", "number", "boolean", "null",
        "undefined", "async", "await", "promise", "const", "let", "var", "import", "export",
        "default", "return", "true", "false", "require", "module", "console", "log", "error",
        "debug", "info", "warn", "prototype", "constructor", "callback", "parameter", "argument",
        "property", "component", "props", "state", "render", "handler", "event",
    ]
    .into_iter()
    .collect()
});

/// Knobs for concept scoring
#[derive(Debug, Clone, Copy)]
pub struct ScoringOptions {
    /// Minimum accumulated frequency for a concept to be retained
    pub min_term_frequency: u32,
    /// Per-document cap on TF-IDF candidate terms
    pub max_terms: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            min_term_frequency: 2,
            max_terms: 100,
        }
    }
}

/// A scored candidate domain term, single- or multi-word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Lowercase term; phrases space-joined
    pub name: String,
    /// Accumulated heuristic score
    pub frequency: u32,
}

/// Score the corpus into a retained concept list, sorted by frequency
/// descending with discovery order breaking ties.
///
/// An empty corpus yields an empty list; that is not an error.
pub fn score_concepts(
    corpus: &Corpus,
    documents: &BTreeMap<String, FileDocument>,
    options: &ScoringOptions,
) -> Vec<Concept> {
    let mut discovery: Vec<String> = Vec::new();
    let mut frequency: HashMap<String, u32> = HashMap::new();

    for doc_index in 0..corpus.len() {
        for scored in corpus.top_terms(doc_index, options.max_terms) {
            if !passes_term_filters(&scored.term, scored.weight) {
                continue;
            }
            if !frequency.contains_key(&scored.term) {
                discovery.push(scored.term.clone());
            }
            *frequency.entry(scored.term).or_insert(0) +=
                (scored.weight * TFIDF_SCALE).round() as u32;
        }
    }

    mine_ngrams(documents, &mut discovery, &mut frequency);

    let mut concepts: Vec<Concept> = discovery
        .into_iter()
        .filter_map(|name| {
            let freq = frequency.get(&name).copied().unwrap_or(0);
            (freq >= options.min_term_frequency).then_some(Concept {
                name,
                frequency: freq,
            })
        })
        .collect();

    // Stable sort keeps discovery order within equal frequencies.
    concepts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    log::debug!("Retained {} concepts", concepts.len());
    concepts
}

/// Candidate filters, in order. A rejection here only blocks this
/// document's contribution; the term stays if another document accepted it.
fn passes_term_filters(term: &str, weight: f64) -> bool {
    if term.chars().count() < MIN_TOKEN_LEN {
        return false;
    }
    if term.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if COMMON_PROGRAMMING_TERMS.contains(term) && weight < COMMON_TERM_WEIGHT_BAR {
        return false;
    }
    true
}

/// Mine bigrams and trigrams over the concatenation of all documents'
/// text; accepted n-grams earn a flat bonus per occurrence, cumulative.
fn mine_ngrams(
    documents: &BTreeMap<String, FileDocument>,
    discovery: &mut Vec<String>,
    frequency: &mut HashMap<String, u32>,
) {
    let all_text = documents
        .values()
        .map(|doc| doc.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let tokens = tokenize(&all_text);

    let mut significance: HashMap<String, bool> = HashMap::new();

    for window_len in [2usize, 3] {
        for window in tokens.windows(window_len) {
            let phrase = window.join(" ");
            let accepted = match significance.get(&phrase) {
                Some(&known) => known,
                None => {
                    let verdict = is_significant_ngram(window, &phrase, frequency, documents);
                    significance.insert(phrase.clone(), verdict);
                    verdict
                }
            };
            if accepted {
                if !frequency.contains_key(&phrase) {
                    discovery.push(phrase.clone());
                }
                *frequency.entry(phrase).or_insert(0) += NGRAM_BONUS;
            }
        }
    }
}

/// An n-gram is significant when it contains no stopword and either every
/// constituent word is already a scored concept with frequency above 1, or
/// the exact phrase occurs in at least two distinct documents' text.
///
/// The first rule only checks the words, not the adjacent pair, so it can
/// admit phrases never observed verbatim; that loose acceptance is kept
/// deliberately. The recurrence rule is a case-sensitive substring match
/// of the lowercased phrase against raw document text, so a phrase that
/// only ever appears capitalized is not admitted by recurrence alone;
/// concept names stay lowercase throughout and that consistency is worth
/// the reduced recall on capitalized prose.
fn is_significant_ngram(
    window: &[String],
    phrase: &str,
    frequency: &HashMap<String, u32>,
    documents: &BTreeMap<String, FileDocument>,
) -> bool {
    if window.iter().any(|token| is_stopword(token)) {
        return false;
    }

    let all_words_are_concepts = window
        .iter()
        .all(|token| frequency.get(token.as_str()).is_some_and(|&f| f > 1));
    if all_words_are_concepts {
        return true;
    }

    documents
        .values()
        .filter(|doc| doc.text.contains(phrase))
        .take(2)
        .count()
        >= 2
}
