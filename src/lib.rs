pub mod cli;
pub mod commands;
pub mod config;
pub mod extract;
pub mod files;
pub mod index;
pub mod logging;
pub mod output;

pub use config::Config;
pub use extract::{Extraction, Extractor};
