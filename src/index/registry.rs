use crate::codec::document::free_next_of;
use crate::codec::globals::Globals;
use crate::codec::keys::{GLOBALS_KEY, doc_key, reverse_key};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::storage::store::Store;

/// Allocates a document id for a caller key and folds `doc_size` into the
/// global counters. Fresh ids count up from 1; a non-empty free list is
/// popped first, following the pointer threaded through that slot's
/// per-document record.
///
/// Fails with `AlreadyIndexed` before any write when the caller key is
/// present.
pub fn allocate(store: &mut dyn Store, caller_key: &str, doc_size: u64) -> Result<DocId> {
    let rkey = reverse_key(caller_key);
    if store.get(&rkey)?.is_some() {
        return Err(Error::new(
            ErrorKind::AlreadyIndexed,
            format!("caller key {:?} is already indexed", caller_key),
        ));
    }

    let mut globals = match store.get(GLOBALS_KEY)? {
        Some(value) => Globals::decode(&value)?,
        None => Globals::default(),
    };

    let id = match globals.free_head {
        None => {
            globals.doc_count += 1;
            globals.doc_count
        }
        Some(head) => {
            let slot_key = doc_key(DocId(head));
            let slot = store
                .get(&slot_key)?
                .ok_or_else(|| Error::corruption(&slot_key, "free-list head record missing"))?;
            globals.free_head = free_next_of(&slot_key, &slot)?;
            head
        }
    };

    globals.total_terms += doc_size;
    store.put(GLOBALS_KEY, &globals.encode())?;
    store.put(&rkey, &id.to_string())?;

    Ok(DocId(id))
}

/// Reads the global counters. An index with no global record has never
/// been written to.
pub fn globals(store: &dyn Store) -> Result<Globals> {
    match store.get(GLOBALS_KEY)? {
        Some(value) => Globals::decode(&value),
        None => Err(Error::new(
            ErrorKind::EmptyIndex,
            "no document has been indexed".to_string(),
        )),
    }
}

/// Reverse lookup: caller key to document id.
pub fn lookup(store: &dyn Store, caller_key: &str) -> Result<Option<DocId>> {
    let rkey = reverse_key(caller_key);
    match store.get(&rkey)? {
        None => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(|id| Some(DocId(id)))
            .map_err(|_| Error::corruption(&rkey, &format!("bad document id {:?}", value))),
    }
}

/// Wipes the index. The next allocation starts from id 1.
pub fn clear(store: &mut dyn Store) -> Result<()> {
    store.clear()
}
