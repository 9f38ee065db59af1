//! Signature extraction: descriptor parsing + documentation classification
//! joined over the document's symbol catalog.

use std::path::Path;

use scip::types::Document;

use super::catalog::SymbolCatalog;
use super::doc;
use super::records::{SignatureRecord, SymbolContext};
use super::span::Span;
use super::symbol::ParsedSymbol;
use super::{effective_range, ExtractError};

/// Extract signature records from one document.
///
/// An occurrence survives only if its symbol is present in the catalog, its
/// identifier parses, it carries documentation, and the documentation is not
/// a use-site rendering (parameter, local variable, property). Everything
/// else is skipped silently; a malformed range stays fatal.
pub fn extract_signatures(
    document: &Document,
    catalog: &SymbolCatalog<'_>,
    lines: &[String],
) -> Result<Vec<SignatureRecord>, ExtractError> {
    let mut records = Vec::new();

    for occurrence in &document.occurrences {
        let Some(info) = catalog.get(&occurrence.symbol) else {
            continue;
        };
        let Some(parsed) = ParsedSymbol::parse(&occurrence.symbol) else {
            continue;
        };
        let Some(rendered) = info.documentation.first() else {
            continue;
        };
        if doc::is_noise(rendered) {
            continue;
        }

        let span = Span::decode(effective_range(occurrence)).map_err(|source| {
            ExtractError::BadRange {
                file: document.relative_path.clone(),
                symbol: occurrence.symbol.clone(),
                source,
            }
        })?;
        let snippet = span.slice_lines(lines);
        let type_sig = doc::classify(rendered);

        records.push(SignatureRecord {
            name: parsed.local_name().to_string(),
            signature: type_sig.signature,
            code_type: type_sig.kind.as_str().to_string(),
            docstring: doc::docstring(&info.documentation),
            line: span.start_line,
            line_from: span.start_line,
            line_to: span.end_line,
            context: SymbolContext {
                module: parsed.package.clone(),
                file_path: document.relative_path.clone(),
                file_name: file_name(&document.relative_path),
                struct_name: parsed.containing_type().map(str::to_string),
                snippet,
            },
        });
    }

    Ok(records)
}

fn file_name(relative_path: &str) -> String {
    Path::new(relative_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative_path.to_string())
}
