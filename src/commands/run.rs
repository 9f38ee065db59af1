//! Run command: the full pipeline — produce the index, extract both
//! datasets, then dump the whole-file dataset.

use anyhow::Result;
use std::path::PathBuf;

pub async fn run(project: PathBuf, overwrite: bool) -> Result<()> {
    super::index::run(project.clone(), overwrite).await?;
    super::extract::run(project.clone(), None).await?;
    super::files::run(project).await
}
