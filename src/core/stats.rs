use serde::{Serialize, Deserialize};

/// Corpus-level counters, read from the global record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndexStats {
    pub doc_count: u64,       // Largest id ever allocated
    pub total_terms: u64,     // Sum of docSize across live documents
    pub avg_doc_length: f64,  // total_terms / doc_count
}

impl IndexStats {
    pub fn new(doc_count: u64, total_terms: u64) -> Self {
        let avg_doc_length = if doc_count == 0 {
            0.0
        } else {
            total_terms as f64 / doc_count as f64
        };

        IndexStats {
            doc_count,
            total_terms,
            avg_doc_length,
        }
    }
}
