//! Files command: dump the whole-file dataset.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::config::Config;
use crate::files::collect_source_files;
use crate::output::write_json_pretty;

pub async fn run(project: PathBuf) -> Result<()> {
    let root = env::current_dir()?;
    let config = Config::load(&root)?;

    let records = collect_source_files(
        &project,
        &config.files.extensions,
        &config.files.ignore_patterns,
    )?;

    let output_path = config.files_path(&root);
    write_json_pretty(&output_path, &records)?;

    println!("Collected {} files -> {}", records.len(), output_path.display());
    Ok(())
}
