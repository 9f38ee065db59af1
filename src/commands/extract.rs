//! Extract command: turn an index artifact plus its source tree into the
//! snippet and signature datasets.

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::path::PathBuf;

use crate::config::Config;
use crate::extract::{Extraction, Extractor};
use crate::index::{load_index, INDEX_FILE_NAME};
use crate::output::write_ndjson;

pub async fn run(project: PathBuf, index: Option<PathBuf>) -> Result<()> {
    let root = env::current_dir()?;
    let config = Config::load(&root)?;

    let index_path = index.unwrap_or_else(|| config.index_dir(&root).join(INDEX_FILE_NAME));
    if !index_path.exists() {
        bail!(
            "no index artifact at {} (run 'sciprag index' first)",
            index_path.display()
        );
    }

    let index = load_index(&index_path)?;
    let extractor = Extractor::new(&project);

    let progress = ProgressBar::new(index.documents.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] documents: [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut extraction = Extraction::default();
    for document in &index.documents {
        progress.set_message(document.relative_path.clone());
        let (mut snippets, mut signatures) = extractor.extract_document(document)?;
        extraction.snippets.append(&mut snippets);
        extraction.signatures.append(&mut signatures);
        progress.inc(1);
    }
    progress.finish_with_message("done");

    let snippets_path = config.snippets_path(&root);
    let signatures_path = config.signatures_path(&root);
    write_ndjson(&snippets_path, &extraction.snippets)?;
    write_ndjson(&signatures_path, &extraction.signatures)?;

    println!(
        "Extracted {} snippets -> {}",
        extraction.snippets.len(),
        snippets_path.display()
    );
    println!(
        "Extracted {} signatures -> {}",
        extraction.signatures.len(),
        signatures_path.display()
    );
    Ok(())
}
