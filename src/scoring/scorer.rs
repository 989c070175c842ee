use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

/// BM25 parameters (Robertson et al., Okapi at TREC-4).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Length-normalization strength, in [0, 1].
    #[serde(default = "default_b")]
    pub b: f64,
    /// Document-side term-frequency saturation.
    #[serde(default = "default_k1")]
    pub k1: f64,
    /// Query-side term-frequency saturation.
    #[serde(default = "default_k3")]
    pub k3: f64,
}

fn default_b() -> f64 {
    0.75
}

fn default_k1() -> f64 {
    1.2
}

fn default_k3() -> f64 {
    7.0
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params {
            b: default_b(),
            k1: default_k1(),
            k3: default_k3(),
        }
    }
}

impl Bm25Params {
    /// Checked at query entry, before any store reads.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.b) {
            return Err(Error::new(
                ErrorKind::Precondition,
                format!("B must be in [0, 1], got {}", self.b),
            ));
        }
        if self.k1 < 0.0 {
            return Err(Error::new(
                ErrorKind::Precondition,
                format!("K1 must be >= 0, got {}", self.k1),
            ));
        }
        if self.k3 < 0.0 {
            return Err(Error::new(
                ErrorKind::Precondition,
                format!("K3 must be >= 0, got {}", self.k3),
            ));
        }
        Ok(())
    }
}

/// Per-query BM25 state: the parameters plus the corpus statistics read
/// from the global record.
pub struct Bm25Scorer {
    pub params: Bm25Params,
    pub doc_count: u64,
    pub avg_doc_length: f64,
}

impl Bm25Scorer {
    pub fn new(params: Bm25Params, doc_count: u64, total_terms: u64) -> Self {
        Bm25Scorer {
            params,
            doc_count,
            avg_doc_length: total_terms as f64 / doc_count as f64,
        }
    }

    /// idf = ln(N / df). No smoothing; df >= 1 whenever the term exists.
    pub fn idf(&self, doc_freq: usize) -> f64 {
        (self.doc_count as f64 / doc_freq as f64).ln()
    }

    /// Query-side saturation: qtf = qf * (K3 + 1) / (qf + K3).
    pub fn query_weight(&self, query_freq: u64) -> f64 {
        let qf = query_freq as f64;
        qf * (self.params.k3 + 1.0) / (qf + self.params.k3)
    }

    /// Document-side saturation with length normalization:
    /// tf = tf_raw * (K1 + 1) / (tf_raw + K1 * ((1 - B) + B * L / L_avg)).
    pub fn doc_weight(&self, term_freq: u64, doc_length: u64) -> f64 {
        let tf = term_freq as f64;
        let norm = (1.0 - self.params.b) + self.params.b * doc_length as f64 / self.avg_doc_length;
        tf * (self.params.k1 + 1.0) / (tf + self.params.k1 * norm)
    }
}
