use crate::core::error::Result;

/// Facade over the external ordered key-value store.
///
/// The engine packs all index structure into string keys and values; the
/// store only has to be a persistent map. Key iteration order is never
/// relied on.
pub trait Store {
    /// Acquire persistent resources.
    fn open(&mut self) -> Result<()>;

    /// Release persistent resources; called on every exit path.
    fn close(&mut self) -> Result<()>;

    fn get(&self, key: &str) -> Result<Option<String>>;

    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    fn delete(&mut self, key: &str) -> Result<()>;

    /// Remove every entry.
    fn clear(&mut self) -> Result<()>;
}
