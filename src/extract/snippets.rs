//! Snippet extraction: one flat record per defining occurrence.

use scip::types::Document;

use super::records::SnippetRecord;
use super::span::Span;
use super::{effective_range, ExtractError};

/// Extract snippet records from one document. `lines` is the document's full
/// source split on newlines; slicing is inclusive of both endpoints.
///
/// Import statements carry no declaration content worth retrieving, so
/// snippets whose text starts with `import` are dropped.
pub fn extract_snippets(
    document: &Document,
    lines: &[String],
) -> Result<Vec<SnippetRecord>, ExtractError> {
    let mut records = Vec::new();

    for occurrence in &document.occurrences {
        let span = Span::decode(effective_range(occurrence)).map_err(|source| {
            ExtractError::BadRange {
                file: document.relative_path.clone(),
                symbol: occurrence.symbol.clone(),
                source,
            }
        })?;

        let code_snippet = span.slice_lines(lines);
        if code_snippet.starts_with("import") {
            continue;
        }

        records.push(SnippetRecord {
            file: document.relative_path.clone(),
            start_line: span.start_line,
            start_character: span.start_char,
            end_line: span.end_line,
            end_character: span.end_char,
            code_snippet,
        });
    }

    Ok(records)
}
