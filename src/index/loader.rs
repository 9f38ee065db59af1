use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use protobuf::Message;
use scip::types::Index;
use tracing::info;

/// Read and decode a SCIP index artifact.
pub fn load_index(path: &Path) -> Result<Index> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read index file {}", path.display()))?;

    let index = Index::parse_from_bytes(&bytes)
        .with_context(|| format!("Failed to decode SCIP index {}", path.display()))?;

    info!(
        path = %path.display(),
        documents = index.documents.len(),
        "loaded index"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scip::types::Document;

    #[test]
    fn test_load_round_trips_protobuf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.scip");

        let mut index = Index::new();
        index.documents.push(Document {
            relative_path: "src/app.ts".to_string(),
            ..Default::default()
        });
        fs::write(&path, index.write_to_bytes().unwrap()).unwrap();

        let loaded = load_index(&path).unwrap();
        assert_eq!(loaded.documents.len(), 1);
        assert_eq!(loaded.documents[0].relative_path, "src/app.ts");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_index(&dir.path().join("nope.scip")).is_err());
    }

    #[test]
    fn test_load_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.scip");
        // a wire-type-0 field with a truncated varint
        fs::write(&path, [0x08, 0xFF]).unwrap();
        assert!(load_index(&path).is_err());
    }
}
