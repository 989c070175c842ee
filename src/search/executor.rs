use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;
use crate::analysis::pipeline::Pipeline;
use crate::codec::document::{caller_key_of, doc_size_of};
use crate::codec::keys::doc_key;
use crate::codec::term::TermRecord;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::registry;
use crate::scoring::scorer::{Bm25Params, Bm25Scorer};
use crate::search::results::SearchHit;
use crate::storage::store::Store;

/// A query is either raw text, which goes through the lexical pipeline, or
/// a sequence of already-prepared terms used as-is.
#[derive(Debug, Clone)]
pub enum Query {
    Text(String),
    Terms(Vec<String>),
}

/// Scores every document matching the query and visits the results in
/// rank order. The visitor receives (caller key, score, doc id) and
/// returns `false` to stop emission; scoring has already completed by
/// then.
pub fn search_with_callback<F>(
    store: &dyn Store,
    pipeline: &Pipeline,
    params: &Bm25Params,
    query: Query,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(&str, f64, DocId) -> bool,
{
    // 1. Parameter preconditions, before any read
    params.validate()?;

    // 2. Query terms share the indexing vocabulary
    let terms = match query {
        Query::Text(text) => pipeline.run(vec![text]),
        Query::Terms(terms) => {
            if terms.iter().any(|t| t.is_empty()) {
                return Err(Error::new(
                    ErrorKind::BadQuery,
                    "term sequence contains an empty string".to_string(),
                ));
            }
            terms
        }
    };

    // 3. Corpus statistics; searching an untouched index is an error
    let globals = registry::globals(store)?;
    let scorer = Bm25Scorer::new(*params, globals.doc_count, globals.total_terms);

    // Distinct query terms in discovery order, so accumulation is
    // deterministic run to run
    let mut query_counts: Vec<(String, u64)> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for term in terms {
        match seen.get(&term) {
            Some(&slot) => query_counts[slot].1 += 1,
            None => {
                seen.insert(term.clone(), query_counts.len());
                query_counts.push((term, 1));
            }
        }
    }
    let distinct_terms = query_counts.len();

    // 4. Accumulate BM25 contributions per matching document
    let mut scores: HashMap<u64, f64> = HashMap::new();
    let mut length_cache: HashMap<u64, u64> = HashMap::new();

    for (term, query_freq) in &query_counts {
        let Some(value) = store.get(term)? else {
            continue; // absent terms contribute nothing, but still count in T
        };
        let record = TermRecord::decode(term, &value)?;

        let idf = scorer.idf(record.postings.len());
        let qtf = scorer.query_weight(*query_freq);

        for posting in &record.postings {
            let id = posting.doc_id.0;
            let length = match length_cache.get(&id) {
                Some(&length) => length,
                None => {
                    let dkey = doc_key(posting.doc_id);
                    let doc = store
                        .get(&dkey)?
                        .ok_or_else(|| Error::corruption(&dkey, "posting without document record"))?;
                    let length = doc_size_of(&dkey, &doc)?;
                    length_cache.insert(id, length);
                    length
                }
            };

            let tf = scorer.doc_weight(posting.count, length);
            *scores.entry(id).or_insert(0.0) += tf * idf * qtf;
        }
    }

    // 5. Average over the distinct query terms, matched or not
    let mut ranked: Vec<(u64, f64)> = scores.into_iter().collect();
    for (_, score) in &mut ranked {
        *score /= distinct_terms as f64;
    }

    // 6. Rank order: score descending, then doc id ascending
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    debug!(
        distinct_terms,
        matched_docs = ranked.len(),
        "query scored"
    );

    // 7. Emit until the visitor says stop
    for (id, score) in ranked {
        let dkey = doc_key(DocId(id));
        let doc = store
            .get(&dkey)?
            .ok_or_else(|| Error::corruption(&dkey, "scored document record missing"))?;
        let caller_key = caller_key_of(&dkey, &doc)?;
        if !visit(caller_key, score, DocId(id)) {
            break;
        }
    }

    Ok(())
}

/// Convenience wrapper over the callback form: collects up to `limit`
/// hits, or all of them when `limit` is zero.
pub fn search(
    store: &dyn Store,
    pipeline: &Pipeline,
    params: &Bm25Params,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchHit>> {
    let mut hits = Vec::new();

    search_with_callback(
        store,
        pipeline,
        params,
        Query::Text(query.to_string()),
        |caller_key, score, _| {
            hits.push(SearchHit::new(caller_key, score));
            limit == 0 || hits.len() < limit
        },
    )?;

    Ok(hits)
}
