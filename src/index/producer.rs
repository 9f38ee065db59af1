//! External indexer invocation.
//!
//! The core never produces an index itself; it asks an [`IndexProducer`] for
//! the artifact path. The shipped implementation shells out to the Docker CLI
//! and runs `scip-typescript` in a Node container with the project mounted
//! read-only.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use crate::config::IndexerConfig;

/// File name of the index artifact inside the output directory.
pub const INDEX_FILE_NAME: &str = "index.scip";

/// Produces a SCIP index artifact for a project and returns its path.
#[async_trait]
pub trait IndexProducer {
    async fn produce(&self, project_path: &Path, output_dir: &Path) -> Result<PathBuf>;
}

/// Runs the indexer via `docker run`.
pub struct DockerIndexer {
    image: String,
    package: String,
    overwrite: bool,
}

impl DockerIndexer {
    pub fn new(image: impl Into<String>, package: impl Into<String>, overwrite: bool) -> Self {
        Self {
            image: image.into(),
            package: package.into(),
            overwrite,
        }
    }

    pub fn from_config(config: &IndexerConfig, overwrite: bool) -> Self {
        Self::new(&config.image, &config.package, overwrite || config.overwrite)
    }
}

#[async_trait]
impl IndexProducer for DockerIndexer {
    async fn produce(&self, project_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        let project_path = project_path
            .canonicalize()
            .with_context(|| format!("Project path {} not accessible", project_path.display()))?;

        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;
        let output_dir = output_dir
            .canonicalize()
            .with_context(|| format!("Output dir {} not accessible", output_dir.display()))?;

        let index_path = output_dir.join(INDEX_FILE_NAME);
        if index_path.exists() && !self.overwrite {
            info!(path = %index_path.display(), "reusing existing index artifact");
            return Ok(index_path);
        }

        info!(
            project = %project_path.display(),
            image = %self.image,
            "running indexer container"
        );

        // The project is mounted at its host path so the relative paths the
        // indexer records match the tree we later slice snippets from.
        let status = Command::new("docker")
            .arg("run")
            .arg("--rm")
            .arg("-v")
            .arg(format!(
                "{}:{}:ro",
                project_path.display(),
                project_path.display()
            ))
            .arg("-v")
            .arg(format!("{}:/out", output_dir.display()))
            .arg("--entrypoint")
            .arg("/usr/local/bin/npx")
            .arg(&self.image)
            .arg("-y")
            .arg(&self.package)
            .arg("index")
            .arg("--cwd")
            .arg(&project_path)
            .arg("--output")
            .arg(format!("/out/{INDEX_FILE_NAME}"))
            .status()
            .await
            .context("Failed to launch docker; is it installed and on PATH?")?;

        if !status.success() {
            bail!("indexer container exited with {status}");
        }
        if !index_path.exists() {
            bail!(
                "indexer finished but produced no artifact at {}",
                index_path.display()
            );
        }
        Ok(index_path)
    }
}
