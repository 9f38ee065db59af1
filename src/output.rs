//! Dataset writers: NDJSON streams and pretty-printed JSON documents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Write records as newline-delimited JSON, one object per line.
pub fn write_ndjson<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(record).context("Failed to serialize record")?;
        writeln!(writer, "{line}")
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))
}

/// Write a value as one pretty-printed JSON document.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(value).context("Failed to serialize value")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
        text: String,
    }

    #[test]
    fn test_write_ndjson_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("rows.jsonl");
        let rows = vec![
            Row { id: 1, text: "first".to_string() },
            Row { id: 2, text: "with\nnewline".to_string() },
        ];

        write_ndjson(&path, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let decoded: Row = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(decoded, rows[1]);
    }

    #[test]
    fn test_write_json_pretty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json_pretty(&path, &vec![1, 2, 3]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        let decoded: Vec<u32> = serde_json::from_str(&content).unwrap();
        assert_eq!(decoded, vec![1, 2, 3]);
    }
}
