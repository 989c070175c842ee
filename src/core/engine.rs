use crate::analysis::pipeline::Pipeline;
use crate::analysis::stage::Stage;
use crate::core::config::{EngineConfig, StoreSpec};
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::DocId;
use crate::index::{indexer, registry};
use crate::search::executor::{self, Query};
use crate::search::results::SearchHit;
use crate::storage::file::FileStore;
use crate::storage::memory::MemoryStore;
use crate::storage::store::Store;

/// The engine: one lexical pipeline, one backing store, one immutable
/// configuration. Writers must be serialized externally; concurrent
/// readers over a quiesced index are safe.
pub struct Engine {
    config: EngineConfig,
    pipeline: Pipeline,
    store: Box<dyn Store>,
    open: bool,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let store: Box<dyn Store> = match &config.store {
            StoreSpec::Memory => Box::new(MemoryStore::new()),
            StoreSpec::File { path } => Box::new(FileStore::new(path.clone())),
        };
        Engine::with_store(config, store)
    }

    /// Plugs in a caller-provided store; `config.store` is ignored.
    pub fn with_store(config: EngineConfig, store: Box<dyn Store>) -> Result<Self> {
        let pipeline = Pipeline::from_config(&config.filters, config.stoplist.as_deref())?;

        Ok(Engine {
            config,
            pipeline,
            store,
            open: false,
        })
    }

    /// Appends a user-supplied lexical stage after the configured ones.
    /// Call before the first index or search, or the two paths diverge.
    pub fn add_stage(&mut self, stage: Box<dyn Stage>) {
        self.pipeline.push(stage);
    }

    pub fn open_index(&mut self) -> Result<()> {
        self.store.open()?;
        self.open = true;
        Ok(())
    }

    pub fn close_index(&mut self) -> Result<()> {
        self.open = false;
        self.store.close()
    }

    pub fn clear_index(&mut self) -> Result<()> {
        registry::clear(self.store.as_mut())
    }

    pub fn index_document(&mut self, caller_key: &str, text: &str) -> Result<DocId> {
        indexer::index_document(self.store.as_mut(), &self.pipeline, caller_key, text)
    }

    /// The id a caller key was indexed under, if any.
    pub fn contains(&self, caller_key: &str) -> Result<Option<DocId>> {
        registry::lookup(self.store.as_ref(), caller_key)
    }

    pub fn stats(&self) -> Result<IndexStats> {
        let globals = registry::globals(self.store.as_ref())?;
        Ok(IndexStats::new(globals.doc_count, globals.total_terms))
    }

    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        executor::search(
            self.store.as_ref(),
            &self.pipeline,
            &self.config.values,
            query,
            limit,
        )
    }

    pub fn search_with_callback<F>(&self, query: Query, visit: F) -> Result<()>
    where
        F: FnMut(&str, f64, DocId) -> bool,
    {
        executor::search_with_callback(
            self.store.as_ref(),
            &self.pipeline,
            &self.config.values,
            query,
            visit,
        )
    }
}

impl Drop for Engine {
    /// The store is released on every exit path, including panics and
    /// early returns while the index is open.
    fn drop(&mut self) {
        if self.open {
            let _ = self.store.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use tempfile::tempdir;

    fn corpus_engine() -> Engine {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        engine.open_index().unwrap();
        for (key, text) in [
            ("1", "Hello world"),
            ("2", "World in motion"),
            ("3", "Cruel crazy beautiful world"),
            ("4", "Hey crazy"),
        ] {
            engine.index_document(key, text).unwrap();
        }
        engine
    }

    #[test]
    fn test_index_and_search() {
        let engine = corpus_engine();
        let hits = engine.search("Crazy", 10).unwrap();
        let keys: Vec<_> = hits.iter().map(|h| h.caller_key.as_str()).collect();
        assert_eq!(keys, vec!["4", "3"]);
    }

    #[test]
    fn test_indexed_text_is_found_again() {
        let mut engine = corpus_engine();
        engine.index_document("5", "a brand new document").unwrap();
        let hits = engine.search("a brand new document", 0).unwrap();
        assert!(hits.iter().any(|h| h.caller_key == "5"));
    }

    #[test]
    fn test_contains_and_stats() {
        let engine = corpus_engine();
        assert_eq!(engine.contains("3").unwrap(), Some(DocId(3)));
        assert_eq!(engine.contains("nope").unwrap(), None);

        let stats = engine.stats().unwrap();
        assert_eq!(stats.doc_count, 4);
        assert_eq!(stats.total_terms, 10);
        assert_eq!(stats.avg_doc_length, 2.5);
    }

    #[test]
    fn test_clear_then_search_is_empty_index() {
        let mut engine = corpus_engine();
        engine.clear_index().unwrap();
        let err = engine.search("anything", 10).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyIndex);
    }

    #[test]
    fn test_duplicate_caller_key() {
        let mut engine = corpus_engine();
        let err = engine.index_document("2", "again").unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyIndexed);
    }

    #[test]
    fn test_bm25_overrides_apply() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"values": {"b": 0.0}}"#).unwrap();
        let mut engine = Engine::new(config).unwrap();
        engine.open_index().unwrap();
        engine.index_document("short", "apple").unwrap();
        engine.index_document("long", "apple banana cherry durian elderberry").unwrap();

        // With B = 0 length normalization is off and both score the same
        let hits = engine.search("apple", 10).unwrap();
        assert_eq!(hits[0].score, hits[1].score);
    }

    #[test]
    fn test_persistence_across_sessions() {
        let dir = tempdir().unwrap();
        let config = EngineConfig {
            store: StoreSpec::File { path: dir.path().join("index.bin") },
            ..Default::default()
        };

        let mut engine = Engine::new(config.clone()).unwrap();
        engine.open_index().unwrap();
        engine.index_document("1", "Hello world").unwrap();
        engine.index_document("2", "World in motion").unwrap();
        engine.close_index().unwrap();

        let mut reopened = Engine::new(config).unwrap();
        reopened.open_index().unwrap();
        let hits = reopened.search("world", 10).unwrap();
        assert_eq!(hits.len(), 2);
        let err = reopened.index_document("1", "duplicate").unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyIndexed);
    }

    #[test]
    fn test_custom_stage() {
        struct Reverse;
        impl Stage for Reverse {
            fn process(&self, input: Vec<String>) -> Vec<String> {
                input.into_iter().map(|t| t.chars().rev().collect()).collect()
            }
            fn name(&self) -> &str {
                "reverse"
            }
            fn clone_box(&self) -> Box<dyn Stage> {
                Box::new(Reverse)
            }
        }

        let mut engine = Engine::new(EngineConfig::default()).unwrap();
        engine.add_stage(Box::new(Reverse));
        engine.open_index().unwrap();
        engine.index_document("k", "stressed").unwrap();

        // Both paths run the same extended pipeline
        let hits = engine.search("stressed", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].caller_key, "k");
    }
}
