use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".sciprag";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub indexer: IndexerConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the external indexer container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Docker image the indexer runs in
    #[serde(default = "default_image")]
    pub image: String,

    /// npm package of the indexer
    #[serde(default = "default_package")]
    pub package: String,

    /// Directory (relative to the data dir) holding the index artifact
    #[serde(default = "default_index_dir")]
    pub index_dir: String,

    /// Re-run the indexer even when an artifact already exists
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            image: default_image(),
            package: default_package(),
            index_dir: default_index_dir(),
            overwrite: false,
        }
    }
}

fn default_image() -> String {
    "node:22".to_string()
}

fn default_package() -> String {
    "@sourcegraph/scip-typescript".to_string()
}

fn default_index_dir() -> String {
    "out_index".to_string()
}

/// Output locations for the extracted datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Directory (relative to the project root) for all outputs
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Snippet stream file name
    #[serde(default = "default_snippets_file")]
    pub snippets_file: String,

    /// Signature stream file name
    #[serde(default = "default_signatures_file")]
    pub signatures_file: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            snippets_file: default_snippets_file(),
            signatures_file: default_signatures_file(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_snippets_file() -> String {
    "snippets.jsonl".to_string()
}

fn default_signatures_file() -> String {
    "signatures.jsonl".to_string()
}

/// Settings for the whole-file dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// File extensions to collect
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path fragments to skip (in addition to .gitignore)
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    /// Output file name
    #[serde(default = "default_files_output")]
    pub output_file: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_patterns: default_ignore_patterns(),
            output_file: default_files_output(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_ignore_patterns() -> Vec<String> {
    vec!["node_modules".to_string()]
}

fn default_files_output() -> String {
    "ts_files.json".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub enabled: bool,

    /// Also log to stderr
    #[serde(default = "default_true")]
    pub stderr: bool,

    /// Log level for the file log: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,

    /// Log directory (relative paths resolve against the project root)
    #[serde(default = "default_log_dir")]
    pub directory: PathBuf,

    /// Log file name prefix
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Rotation strategy: hourly, daily, minutely, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stderr: true,
            level: default_level(),
            directory: default_log_dir(),
            file_prefix: default_file_prefix(),
            rotation: default_rotation(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".sciprag/logs")
}

fn default_file_prefix() -> String {
    "sciprag.log".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Config {
    /// Load configuration from the .sciprag directory
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;

            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", config_path))
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to the .sciprag directory
    pub fn save(&self, root: &Path) -> Result<()> {
        let config_dir = root.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory {:?}", config_dir))?;

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the .sciprag directory
    pub fn sciprag_dir(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR)
    }

    /// Check if sciprag is initialized in the given directory
    pub fn is_initialized(root: &Path) -> bool {
        Self::sciprag_dir(root).exists()
    }

    /// Directory all datasets are written to
    pub fn data_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.extract.data_dir)
    }

    /// Directory the index artifact lives in
    pub fn index_dir(&self, root: &Path) -> PathBuf {
        self.data_dir(root).join(&self.indexer.index_dir)
    }

    pub fn snippets_path(&self, root: &Path) -> PathBuf {
        self.data_dir(root).join(&self.extract.snippets_file)
    }

    pub fn signatures_path(&self, root: &Path) -> PathBuf {
        self.data_dir(root).join(&self.extract.signatures_file)
    }

    pub fn files_path(&self, root: &Path) -> PathBuf {
        self.data_dir(root).join(&self.files.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indexer.image, "node:22");
        assert_eq!(config.indexer.package, "@sourcegraph/scip-typescript");
        assert!(!config.indexer.overwrite);
        assert_eq!(config.extract.snippets_file, "snippets.jsonl");
        assert_eq!(config.files.extensions, vec!["ts".to_string()]);
        assert!(config.files.ignore_patterns.contains(&"node_modules".to_string()));
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let config = Config::default();

        config.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();

        assert_eq!(config.indexer.image, loaded.indexer.image);
        assert_eq!(config.extract.data_dir, loaded.extract.data_dir);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.indexer.index_dir, "out_index");
    }

    #[test]
    fn test_output_paths_resolve_under_data_dir() {
        let config = Config::default();
        let root = Path::new("/proj");

        assert_eq!(
            config.snippets_path(root),
            Path::new("/proj/data/snippets.jsonl")
        );
        assert_eq!(config.index_dir(root), Path::new("/proj/data/out_index"));
    }
}
