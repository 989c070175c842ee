use std::collections::HashMap;
use tracing::debug;
use crate::analysis::pipeline::Pipeline;
use crate::codec::document::DocRecord;
use crate::codec::keys::doc_key;
use crate::codec::term::TermRecord;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::index::registry;
use crate::storage::store::Store;

/// Indexes one document under a caller-chosen key.
///
/// The term counts iterate in discovery order so repeated runs over the
/// same input produce byte-identical records. All writes for the document
/// go through the store without retries; a store failure mid-way leaves a
/// partially built index for the caller to discard.
pub fn index_document(
    store: &mut dyn Store,
    pipeline: &Pipeline,
    caller_key: &str,
    text: &str,
) -> Result<DocId> {
    // 1. Lexical pass
    let terms = pipeline.run(vec![text.to_string()]);
    let doc_size = terms.len() as u64;

    // 2. Count occurrences, keeping first-seen order
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for term in terms {
        match seen.get(&term) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                seen.insert(term.clone(), counts.len());
                counts.push((term, 1));
            }
        }
    }

    // 3. Allocate an id; fails early on a duplicate caller key
    let doc_id = registry::allocate(store, caller_key, doc_size)?;

    // 4. Append one posting per distinct term
    for (term, count) in &counts {
        let existing = store.get(term)?;
        let updated = TermRecord::append(existing.as_deref(), term, doc_id, *count)?;
        store.put(term, &updated)?;
    }

    // 5. Per-document record
    let record = DocRecord {
        terms: counts,
        doc_size,
        caller_key: caller_key.to_string(),
    };
    store.put(&doc_key(doc_id), &record.encode())?;

    debug!(
        doc_id = doc_id.0,
        doc_size,
        distinct_terms = record.terms.len(),
        "indexed document"
    );

    Ok(doc_id)
}
