use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sciprag")]
#[command(author, version, about = "Flattens scip-typescript indexes into semantic search datasets")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize sciprag in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Produce the SCIP index for a TypeScript project
    Index {
        /// Path to the TypeScript project root
        project: PathBuf,

        /// Re-run the indexer even if an index artifact exists
        #[arg(long)]
        overwrite: bool,
    },

    /// Extract the snippet and signature datasets from an index
    Extract {
        /// Path to the TypeScript project root
        project: PathBuf,

        /// Path to the index artifact (defaults to the configured location)
        #[arg(short, long)]
        index: Option<PathBuf>,
    },

    /// Dump the whole-file dataset
    Files {
        /// Path to the TypeScript project root
        project: PathBuf,
    },

    /// Produce the index, then write all datasets
    Run {
        /// Path to the TypeScript project root
        project: PathBuf,

        /// Re-run the indexer even if an index artifact exists
        #[arg(long)]
        overwrite: bool,
    },
}
