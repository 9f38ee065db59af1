//! Index command: run the external indexer and store the artifact.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::config::Config;
use crate::index::{DockerIndexer, IndexProducer};

pub async fn run(project: PathBuf, overwrite: bool) -> Result<()> {
    let root = env::current_dir()?;
    let config = Config::load(&root)?;

    let producer = DockerIndexer::from_config(&config.indexer, overwrite);
    let index_path = producer.produce(&project, &config.index_dir(&root)).await?;

    println!("Index artifact: {}", index_path.display());
    Ok(())
}
