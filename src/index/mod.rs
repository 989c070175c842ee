pub mod registry;
pub mod indexer;
