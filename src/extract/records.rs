//! Flat output records for the snippet and signature datasets.

use serde::{Deserialize, Serialize};

/// One extracted declaration snippet with its exact source coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub file: String,
    pub start_line: i32,
    pub start_character: i32,
    pub end_line: i32,
    pub end_character: i32,
    pub code_snippet: String,
}

/// Structural context attached to a signature record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolContext {
    /// Package name from the symbol identifier.
    pub module: String,
    pub file_path: String,
    pub file_name: String,
    /// Innermost containing type, when the descriptor chain has one.
    pub struct_name: Option<String>,
    pub snippet: String,
}

/// One extracted symbol signature with docstring and context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub name: String,
    pub signature: String,
    pub code_type: String,
    pub docstring: String,
    pub line: i32,
    pub line_from: i32,
    pub line_to: i32,
    pub context: SymbolContext,
}
