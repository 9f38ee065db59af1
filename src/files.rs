//! Whole-file dataset: every TypeScript source in the project as one record,
//! for consumers that want full-file context next to the extracted snippets.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One source file with its lines (line terminators preserved) and 1-indexed
/// line bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub code: Vec<String>,
    pub startline: usize,
    pub endline: usize,
}

/// Walk `root` and collect every file matching the configured extensions,
/// skipping gitignored paths and the given ignore patterns. Records are
/// sorted by path so output is stable across runs.
pub fn collect_source_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
) -> Result<Vec<FileRecord>> {
    let extensions: HashSet<&str> = extensions.iter().map(String::as_str).collect();
    let mut records = Vec::new();

    let walker = WalkBuilder::new(root)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .hidden(true)
        .build();

    for entry in walker.filter_map(|entry| entry.ok()) {
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        let path_str = path.to_string_lossy();
        if ignore_patterns.iter().any(|pattern| path_str.contains(pattern)) {
            continue;
        }
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.contains(ext))
            .unwrap_or(false);
        if !matches_extension {
            continue;
        }

        records.push(read_file_record(root, path)?);
    }

    records.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(files = records.len(), "collected source files");
    Ok(records)
}

fn read_file_record(root: &Path, path: &Path) -> Result<FileRecord> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read source file {}", path.display()))?;
    // indexed projects occasionally contain files with broken encodings
    let text = String::from_utf8_lossy(&bytes);

    let code: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    let relative = path.strip_prefix(root).unwrap_or(path);

    Ok(FileRecord {
        path: relative.to_string_lossy().into_owned(),
        startline: 1,
        endline: code.len(),
        code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts_config() -> (Vec<String>, Vec<String>) {
        (
            vec!["ts".to_string()],
            vec!["node_modules".to_string()],
        )
    }

    #[test]
    fn test_collects_only_matching_extensions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.ts"), "const a = 1;\n").unwrap();
        std::fs::write(dir.path().join("readme.md"), "# nope\n").unwrap();

        let (extensions, ignores) = ts_config();
        let records = collect_source_files(dir.path(), &extensions, &ignores).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "app.ts");
        assert_eq!(records[0].startline, 1);
        assert_eq!(records[0].endline, 1);
        assert_eq!(records[0].code, vec!["const a = 1;\n".to_string()]);
    }

    #[test]
    fn test_skips_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("node_modules").join("dep");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("dep.ts"), "x\n").unwrap();
        std::fs::write(dir.path().join("main.ts"), "y\n").unwrap();

        let (extensions, ignores) = ts_config();
        let records = collect_source_files(dir.path(), &extensions, &ignores).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "main.ts");
    }

    #[test]
    fn test_records_are_sorted_by_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.ts"), "b\n").unwrap();
        std::fs::write(dir.path().join("a.ts"), "a\n").unwrap();

        let (extensions, ignores) = ts_config();
        let records = collect_source_files(dir.path(), &extensions, &ignores).unwrap();

        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["a.ts", "b.ts"]);
    }

    #[test]
    fn test_lines_keep_terminators() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("m.ts"), "one\ntwo").unwrap();

        let (extensions, ignores) = ts_config();
        let records = collect_source_files(dir.path(), &extensions, &ignores).unwrap();

        assert_eq!(
            records[0].code,
            vec!["one\n".to_string(), "two".to_string()]
        );
        assert_eq!(records[0].endline, 2);
    }
}
