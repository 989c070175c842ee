use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use crate::scoring::scorer::Bm25Params;

/// Default lexical stage order, applied on both the indexing and query paths.
pub const DEFAULT_FILTERS: [&str; 4] = ["heuristics", "tokenize", "stop", "stem"];

/// Backing store selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreSpec {
    Memory,
    File { path: PathBuf },
}

impl Default for StoreSpec {
    fn default() -> Self {
        StoreSpec::Memory
    }
}

/// Engine configuration, captured at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub store: StoreSpec,

    /// Ordered lexical stage names.
    #[serde(default = "default_filters")]
    pub filters: Vec<String>,

    /// Replacement stop list source; `#`-prefixed lines are comments.
    #[serde(default)]
    pub stoplist: Option<String>,

    /// BM25 parameter overrides.
    #[serde(default)]
    pub values: Bm25Params,
}

fn default_filters() -> Vec<String> {
    DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            store: StoreSpec::Memory,
            filters: default_filters(),
            stoplist: None,
            values: Bm25Params::default(),
        }
    }
}
