//! SCIP index artifact handling: decoding the protobuf file and producing it
//! with the external indexer.

mod loader;
mod producer;

pub use loader::load_index;
pub use producer::{DockerIndexer, IndexProducer, INDEX_FILE_NAME};
