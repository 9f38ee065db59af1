//! Per-document symbol table.
//!
//! Occurrences reference symbols by identifier string; the catalog maps those
//! identifiers back to the document's `SymbolInformation` entries so the
//! signature extractor can reach documentation.

use std::collections::HashMap;

use scip::types::{Document, SymbolInformation};

/// Lookup table from symbol identifier to its metadata, scoped to a single
/// document. A miss is expected for occurrences that merely reference symbols
/// declared elsewhere.
pub struct SymbolCatalog<'a> {
    symbols: HashMap<&'a str, &'a SymbolInformation>,
}

impl<'a> SymbolCatalog<'a> {
    /// Build the catalog from a document's symbol list.
    ///
    /// If a document lists the same identifier more than once, the first
    /// entry wins; later duplicates are ignored so that lookups stay
    /// deterministic.
    pub fn for_document(doc: &'a Document) -> Self {
        let mut symbols: HashMap<&str, &SymbolInformation> =
            HashMap::with_capacity(doc.symbols.len());
        for info in &doc.symbols {
            symbols.entry(info.symbol.as_str()).or_insert(info);
        }
        Self { symbols }
    }

    /// Look up a symbol identifier. `None` means the symbol was not declared
    /// in this document's symbol table.
    pub fn get(&self, symbol: &str) -> Option<&'a SymbolInformation> {
        self.symbols.get(symbol).copied()
    }

    /// Number of distinct symbols in the catalog.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_info(symbol: &str, docs: &[&str]) -> SymbolInformation {
        SymbolInformation {
            symbol: symbol.to_string(),
            documentation: docs.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    fn document(symbols: Vec<SymbolInformation>) -> Document {
        Document {
            relative_path: "src/foo.ts".to_string(),
            symbols,
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let doc = document(vec![symbol_info("a b c 1.0.0 Foo#", &["```ts\nclass Foo\n```"])]);
        let catalog = SymbolCatalog::for_document(&doc);

        assert!(catalog.get("a b c 1.0.0 Foo#").is_some());
        assert!(catalog.get("a b c 1.0.0 Bar#").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_identifier_keeps_first() {
        let doc = document(vec![
            symbol_info("a b c 1.0.0 Foo#", &["first"]),
            symbol_info("a b c 1.0.0 Foo#", &["second"]),
        ]);
        let catalog = SymbolCatalog::for_document(&doc);

        let info = catalog.get("a b c 1.0.0 Foo#").unwrap();
        assert_eq!(info.documentation, vec!["first".to_string()]);
    }

    #[test]
    fn test_empty_document() {
        let doc = document(Vec::new());
        let catalog = SymbolCatalog::for_document(&doc);
        assert!(catalog.is_empty());
    }
}
