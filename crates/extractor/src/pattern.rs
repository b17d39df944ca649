use once_cell::sync::Lazy;
use regex::Regex;

/// Declaration patterns covering the supported languages: JS/TS variable,
/// function and class declarations, Rust items, Python defs.
static DECLARATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)",
        r"function\s+([A-Za-z_$][A-Za-z0-9_$]*)",
        r"class\s+([A-Za-z_$][A-Za-z0-9_$]*)",
        r"fn\s+([A-Za-z_][A-Za-z0-9_]*)",
        r"(?:struct|enum|trait)\s+([A-Za-z_][A-Za-z0-9_]*)",
        r"def\s+([A-Za-z_][A-Za-z0-9_]*)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("declaration pattern is valid"))
    .collect()
});

/// Pattern-based identifier extractor.
///
/// Fallback for when structural parsing fails: matches declaration keywords
/// with regexes and collects the declared names. Always succeeds (possibly
/// with an empty result).
pub struct PatternExtractor;

impl PatternExtractor {
    /// Collect declared names from content
    pub fn identifiers(content: &str) -> Vec<String> {
        let mut identifiers = Vec::new();
        for pattern in DECLARATION_PATTERNS.iter() {
            for capture in pattern.captures_iter(content) {
                identifiers.push(capture[1].to_string());
            }
        }
        identifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_js_declarations() {
        let ids = PatternExtractor::identifiers(
            "const orderTotal = 1;\nfunction shipOrder() {}\nclass Warehouse {}",
        );
        assert!(ids.contains(&"orderTotal".to_string()));
        assert!(ids.contains(&"shipOrder".to_string()));
        assert!(ids.contains(&"Warehouse".to_string()));
    }

    #[test]
    fn matches_rust_and_python_declarations() {
        let ids =
            PatternExtractor::identifiers("fn apply_discount() {}\nstruct Cart;\ndef checkout():");
        assert!(ids.contains(&"apply_discount".to_string()));
        assert!(ids.contains(&"Cart".to_string()));
        assert!(ids.contains(&"checkout".to_string()));
    }

    #[test]
    fn empty_result_on_no_declarations() {
        assert!(PatternExtractor::identifiers("1 + 2").is_empty());
    }
}
