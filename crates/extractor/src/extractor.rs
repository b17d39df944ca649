use crate::kind::FileKind;
use crate::language::Language;
use crate::pattern::PatternExtractor;
use crate::structural::StructuralExtractor;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Which pieces of a file feed the normalized text blob
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub include_comments: bool,
    pub include_identifiers: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            include_identifiers: true,
        }
    }
}

/// Everything extracted from a single file
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Raw identifier tokens in source order
    pub identifiers: Vec<String>,
    /// Raw comment text in source order
    pub comments: Vec<String>,
    /// Raw prose for documentation files, empty otherwise
    pub documentation: String,
    /// Normalized blob used for corpus scoring
    pub text: String,
}

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*\*?(.*?)\*/").expect("block comment pattern is valid"));

/// Extract identifiers, comments and normalized text from one file.
///
/// Never fails: structural parse errors degrade to the pattern extractor,
/// malformed metadata contributes nothing. The debug-level log on fallback
/// is the only side effect.
pub fn extract(content: &str, kind: FileKind, options: ExtractOptions) -> Extraction {
    match kind {
        FileKind::Code(language) => extract_code(content, language, options),
        FileKind::Documentation => Extraction {
            documentation: content.to_string(),
            text: content.to_string(),
            ..Extraction::default()
        },
        FileKind::Metadata => extract_metadata(content),
        FileKind::Other => Extraction::default(),
    }
}

fn extract_code(content: &str, language: Language, options: ExtractOptions) -> Extraction {
    let mut extraction = Extraction::default();

    scan_comments(content, language, &mut extraction.comments);

    // Preferred path is the structural walk; a parse failure degrades to
    // the declaration-pattern scan and the file still contributes.
    extraction.identifiers = StructuralExtractor::new(language)
        .and_then(|mut extractor| extractor.identifiers(content))
        .unwrap_or_else(|e| {
            log::debug!("Structural extraction failed ({e}), using pattern fallback");
            PatternExtractor::identifiers(content)
        });

    let mut text = String::new();
    if options.include_comments {
        text.push_str(&extraction.comments.join(" "));
    }
    if options.include_identifiers {
        for identifier in &extraction.identifiers {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&split_identifier_into_words(identifier));
        }
    }
    extraction.text = text;
    extraction
}

/// Lightweight comment scan: line comments by prefix, C-style block
/// comments by regex. Not a tokenizer; comment-looking text inside string
/// literals is accepted as a comment.
fn scan_comments(content: &str, language: Language, comments: &mut Vec<String>) {
    let prefix = language.line_comment_prefix();
    for line in content.lines() {
        if let Some(pos) = line.find(prefix) {
            let comment = line[pos + prefix.len()..].trim_start_matches(['/', '!']).trim();
            if !comment.is_empty() {
                comments.push(comment.to_string());
            }
        }
    }

    if language.has_block_comments() {
        for capture in BLOCK_COMMENT.captures_iter(content) {
            let comment = capture[1]
                .lines()
                .map(|line| line.trim().trim_start_matches('*').trim())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !comment.is_empty() {
                comments.push(comment);
            }
        }
    }
}

fn extract_metadata(content: &str) -> Extraction {
    let mut extraction = Extraction::default();

    // Malformed metadata is skipped silently; the file contributes nothing.
    let Ok(json) = serde_json::from_str::<Value>(content) else {
        return extraction;
    };

    let mut text = String::new();
    for field in ["name", "description"] {
        if let Some(value) = json.get(field).and_then(Value::as_str) {
            text.push_str(value);
            text.push(' ');
        }
    }
    if let Some(keywords) = json.get("keywords").and_then(Value::as_array) {
        for keyword in keywords.iter().filter_map(Value::as_str) {
            text.push_str(keyword);
            text.push(' ');
        }
    }

    if let Some(scripts) = json.get("scripts").and_then(Value::as_object) {
        for script_name in scripts.keys() {
            extraction.identifiers.push(script_name.clone());
            text.push_str(script_name);
            text.push(' ');
        }
    }

    for dep_field in ["dependencies", "devDependencies", "peerDependencies"] {
        if let Some(deps) = json.get(dep_field).and_then(Value::as_object) {
            for dep_name in deps.keys() {
                extraction.identifiers.push(dep_name.clone());
            }
        }
    }

    extraction.text = text.trim_end().to_string();
    extraction
}

/// Split a camelCase/snake_case identifier into lowercase words, keeping
/// the fused token alongside the split form so both single-token and
/// decomposed matches work: `transformDataPoint` →
/// `"transformdatapoint transform data point"`.
pub fn split_identifier_into_words(identifier: &str) -> String {
    let mut split = String::new();
    let chars: Vec<char> = identifier.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            split.push(' ');
            continue;
        }
        if c.is_uppercase() {
            let after_lower = i > 0 && chars[i - 1].is_lowercase();
            let before_lower = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if after_lower || before_lower {
                split.push(' ');
            }
        }
        split.extend(c.to_lowercase());
    }

    let fused = identifier.replace('_', "").to_lowercase();
    let split = split.split_whitespace().collect::<Vec<_>>().join(" ");

    if split == fused || split.is_empty() {
        fused
    } else {
        format!("{fused} {split}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_camel_case_keeping_fused_form() {
        assert_eq!(
            split_identifier_into_words("transformDataPoint"),
            "transformdatapoint transform data point"
        );
        assert_eq!(
            split_identifier_into_words("calculateFee"),
            "calculatefee calculate fee"
        );
    }

    #[test]
    fn splits_snake_case_and_acronym_boundaries() {
        assert_eq!(
            split_identifier_into_words("order_total_cents"),
            "ordertotalcents order total cents"
        );
        assert_eq!(
            split_identifier_into_words("HTTPServer"),
            "httpserver http server"
        );
    }

    #[test]
    fn single_word_identifier_stays_fused_only() {
        assert_eq!(split_identifier_into_words("invoice"), "invoice");
        assert_eq!(split_identifier_into_words("Invoice"), "invoice");
    }

    #[test]
    fn code_extraction_collects_comments_and_identifiers() {
        let content = "// validates the transaction amount\nfunction processTransaction(amount) { return amount; }";
        let extraction = extract(
            content,
            FileKind::Code(Language::JavaScript),
            ExtractOptions::default(),
        );

        assert_eq!(
            extraction.comments,
            vec!["validates the transaction amount".to_string()]
        );
        assert!(extraction.identifiers.contains(&"processTransaction".to_string()));
        assert!(extraction.text.contains("validates the transaction amount"));
        assert!(extraction.text.contains("processtransaction process transaction"));
    }

    #[test]
    fn block_comments_are_flattened() {
        let content = "/**\n * Computes shipping cost\n * per destination zone.\n */\nfn shipping() {}";
        let extraction = extract(
            content,
            FileKind::Code(Language::Rust),
            ExtractOptions::default(),
        );

        assert!(extraction
            .comments
            .iter()
            .any(|c| c.contains("Computes shipping cost per destination zone.")));
    }

    #[test]
    fn comment_text_is_excluded_when_disabled() {
        let content = "// secret note\nconst ledgerEntry = 1;";
        let extraction = extract(
            content,
            FileKind::Code(Language::JavaScript),
            ExtractOptions {
                include_comments: false,
                include_identifiers: true,
            },
        );

        assert!(!extraction.text.contains("secret note"));
        assert!(extraction.text.contains("ledgerentry ledger entry"));
        // The raw comment list is still populated for the glossary pass.
        assert_eq!(extraction.comments, vec!["secret note".to_string()]);
    }

    #[test]
    fn broken_code_falls_back_to_pattern_extraction() {
        let content = "function shipOrder( { ((( \nconst warehouseZone = ;";
        let extraction = extract(
            content,
            FileKind::Code(Language::JavaScript),
            ExtractOptions::default(),
        );

        assert!(extraction.identifiers.contains(&"shipOrder".to_string()));
        assert!(extraction.identifiers.contains(&"warehouseZone".to_string()));
    }

    #[test]
    fn documentation_passes_through_unmodified() {
        let content = "# Billing\n\nInvoices are settled nightly.";
        let extraction = extract(content, FileKind::Documentation, ExtractOptions::default());

        assert_eq!(extraction.documentation, content);
        assert_eq!(extraction.text, content);
        assert!(extraction.identifiers.is_empty());
    }

    #[test]
    fn metadata_contributes_selected_fields() {
        let content = r#"{
            "name": "billing-service",
            "description": "invoice settlement engine",
            "keywords": ["billing", "invoices"],
            "scripts": { "reconcile": "node reconcile.js" },
            "dependencies": { "express": "^4.0.0" }
        }"#;
        let extraction = extract(content, FileKind::Metadata, ExtractOptions::default());

        assert!(extraction.text.contains("billing-service"));
        assert!(extraction.text.contains("invoice settlement engine"));
        assert!(extraction.text.contains("invoices"));
        assert!(extraction.text.contains("reconcile"));
        assert!(extraction.identifiers.contains(&"reconcile".to_string()));
        assert!(extraction.identifiers.contains(&"express".to_string()));
        // Dependency names are identifiers only, not scoring text.
        assert!(!extraction.text.contains("express"));
    }

    #[test]
    fn malformed_metadata_contributes_nothing() {
        let extraction = extract("{ not json", FileKind::Metadata, ExtractOptions::default());
        assert!(extraction.text.is_empty());
        assert!(extraction.identifiers.is_empty());
    }

    #[test]
    fn other_files_contribute_nothing() {
        let extraction = extract("binary-ish", FileKind::Other, ExtractOptions::default());
        assert!(extraction.text.is_empty());
    }
}
