//! Extraction core: turns a loaded SCIP index plus the source tree it was
//! computed from into flat snippet and signature records.
//!
//! Processing is synchronous and document-at-a-time; record order follows
//! document order, then occurrence order, so repeated runs over the same
//! input produce byte-identical output.

pub mod catalog;
pub mod doc;
pub mod records;
pub mod signatures;
pub mod snippets;
pub mod span;
pub mod symbol;

use std::fs;
use std::path::PathBuf;

use scip::types::{Document, Index, Occurrence};
use thiserror::Error;
use tracing::{debug, info};

pub use catalog::SymbolCatalog;
pub use records::{SignatureRecord, SnippetRecord, SymbolContext};
pub use span::{MalformedRange, Span};
pub use symbol::{Descriptor, ParsedSymbol};

/// Errors that abort an extraction run. Per-occurrence conditions (unknown
/// symbols, unparsable identifiers, filtered documentation) are skips, not
/// errors; these two mean the input itself cannot be trusted.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("occurrence of `{symbol}` in {file}: {source}")]
    BadRange {
        file: String,
        symbol: String,
        #[source]
        source: MalformedRange,
    },

    #[error("failed to read source file {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The range to slice for an occurrence: the enclosing range (full extent of
/// the declaration) when the indexer recorded one, the primary range
/// otherwise.
pub fn effective_range(occurrence: &Occurrence) -> &[i32] {
    if occurrence.enclosing_range.is_empty() {
        &occurrence.range
    } else {
        &occurrence.enclosing_range
    }
}

/// Both output streams of a run.
#[derive(Debug, Default)]
pub struct Extraction {
    pub snippets: Vec<SnippetRecord>,
    pub signatures: Vec<SignatureRecord>,
}

/// Walks an index document by document, reading each source file once and
/// feeding the snippet and signature extractors.
pub struct Extractor {
    project_root: PathBuf,
}

impl Extractor {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Run extraction over the whole index.
    pub fn extract(&self, index: &Index) -> Result<Extraction, ExtractError> {
        let mut extraction = Extraction::default();

        for document in &index.documents {
            let (mut snippets, mut signatures) = self.extract_document(document)?;
            extraction.snippets.append(&mut snippets);
            extraction.signatures.append(&mut signatures);
        }

        info!(
            documents = index.documents.len(),
            snippets = extraction.snippets.len(),
            signatures = extraction.signatures.len(),
            "extraction complete"
        );
        Ok(extraction)
    }

    /// Process a single document: build its symbol catalog, read its source
    /// file, and run both extractors over its occurrences.
    pub fn extract_document(
        &self,
        document: &Document,
    ) -> Result<(Vec<SnippetRecord>, Vec<SignatureRecord>), ExtractError> {
        let lines = self.document_lines(document)?;
        let catalog = SymbolCatalog::for_document(document);

        let snippets = snippets::extract_snippets(document, &lines)?;
        let signatures = signatures::extract_signatures(document, &catalog, &lines)?;

        debug!(
            file = %document.relative_path,
            snippets = snippets.len(),
            signatures = signatures.len(),
            "processed document"
        );
        Ok((snippets, signatures))
    }

    fn document_lines(&self, document: &Document) -> Result<Vec<String>, ExtractError> {
        let path = self.project_root.join(&document.relative_path);
        let text = fs::read_to_string(&path)
            .map_err(|source| ExtractError::SourceRead { path, source })?;
        Ok(text.split('\n').map(str::to_string).collect())
    }
}
