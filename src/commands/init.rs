use anyhow::{bail, Result};
use std::env;
use tracing::info;

use crate::Config;

pub async fn run(force: bool) -> Result<()> {
    let root = env::current_dir()?;

    if Config::is_initialized(&root) && !force {
        bail!(
            "sciprag is already initialized in {:?} (use --force to overwrite)",
            Config::sciprag_dir(&root)
        );
    }

    let config = Config::default();
    config.save(&root)?;

    info!("Initialized sciprag in {:?}", Config::sciprag_dir(&root));
    println!(
        "✓ Created {} with default configuration",
        Config::sciprag_dir(&root).display()
    );
    println!("\nNext steps:");
    println!("  1. Edit .sciprag/config.toml to customize settings");
    println!("  2. Run 'sciprag run <project>' to index a project and extract datasets");

    Ok(())
}
