use crate::error::{ExtractError, Result};
use crate::language::Language;
use tree_sitter::Parser;

/// Structural identifier extractor backed by tree-sitter.
///
/// Walks the full syntax tree and collects the text of every
/// identifier-producing node: plain identifiers, function/class names,
/// method and property names, type names. Parse failures surface as
/// errors so the caller can degrade to the pattern-based fallback.
pub struct StructuralExtractor {
    parser: Parser,
}

impl StructuralExtractor {
    /// Create a new extractor for a language
    pub fn new(language: Language) -> Result<Self> {
        if !language.supports_ast() {
            return Err(ExtractError::unsupported_language(language.as_str()));
        }

        let ts_language = language.tree_sitter_language()?;
        let mut parser = Parser::new();
        parser
            .set_language(&ts_language)
            .map_err(|e| ExtractError::tree_sitter(format!("Failed to set language: {e}")))?;

        Ok(Self { parser })
    }

    /// Parse content and collect identifier names in source order
    pub fn identifiers(&mut self, content: &str) -> Result<Vec<String>> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| ExtractError::parse("Failed to parse source code"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ExtractError::parse("Source contains syntax errors"));
        }

        let mut identifiers = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            // Grammar node kinds for names all end in "identifier":
            // identifier, type_identifier, field_identifier,
            // property_identifier, shorthand_property_identifier, ...
            if node.kind().ends_with("identifier") {
                if let Ok(text) = node.utf8_text(content.as_bytes()) {
                    if !text.is_empty() {
                        identifiers.push(text.to_string());
                    }
                }
            }

            let mut cursor = node.walk();
            // Reverse so the stack pops children in source order.
            let children: Vec<_> = node.children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }

        Ok(identifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_javascript_identifiers() {
        let mut extractor = StructuralExtractor::new(Language::JavaScript).unwrap();
        let ids = extractor
            .identifiers("function processOrder(cart) { return cart.total; }")
            .unwrap();

        assert!(ids.contains(&"processOrder".to_string()));
        assert!(ids.contains(&"cart".to_string()));
        assert!(ids.contains(&"total".to_string()));
    }

    #[test]
    fn extracts_rust_identifiers() {
        let mut extractor = StructuralExtractor::new(Language::Rust).unwrap();
        let ids = extractor
            .identifiers("struct Invoice { amount: u32 }\nfn settle(invoice: Invoice) {}")
            .unwrap();

        assert!(ids.contains(&"Invoice".to_string()));
        assert!(ids.contains(&"amount".to_string()));
        assert!(ids.contains(&"settle".to_string()));
    }

    #[test]
    fn broken_source_is_a_parse_error() {
        let mut extractor = StructuralExtractor::new(Language::JavaScript).unwrap();
        let result = extractor.identifiers("function ((((");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(StructuralExtractor::new(Language::Unknown).is_err());
    }
}
