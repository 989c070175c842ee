/// One ranked result: the caller's key for the document and its BM25
/// score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub caller_key: String,
    pub score: f64,
}

impl SearchHit {
    pub fn new(caller_key: &str, score: f64) -> Self {
        SearchHit {
            caller_key: caller_key.to_string(),
            score,
        }
    }
}
