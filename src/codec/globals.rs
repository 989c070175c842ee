use crate::core::error::{Error, Result};
use crate::codec::keys::GLOBALS_KEY;

/// Global record: `"<docCount>,<totalTerms>,<freeHead>"`. An empty third
/// field means no document slot has been freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Globals {
    pub doc_count: u64,
    pub total_terms: u64,
    pub free_head: Option<u64>,
}

impl Globals {
    pub fn decode(value: &str) -> Result<Self> {
        let mut fields = value.split(',');

        let doc_count = parse_counter(fields.next(), value)?;
        let total_terms = parse_counter(fields.next(), value)?;
        let free_head = match fields.next() {
            None => return Err(Error::corruption(GLOBALS_KEY, "missing free-list field")),
            Some("") => None,
            Some(digits) => Some(digits.parse::<u64>().map_err(|_| {
                Error::corruption(GLOBALS_KEY, &format!("bad free-list head in {:?}", value))
            })?),
        };

        Ok(Globals {
            doc_count,
            total_terms,
            free_head,
        })
    }

    pub fn encode(&self) -> String {
        match self.free_head {
            Some(head) => format!("{},{},{}", self.doc_count, self.total_terms, head),
            None => format!("{},{},", self.doc_count, self.total_terms),
        }
    }
}

fn parse_counter(field: Option<&str>, value: &str) -> Result<u64> {
    field
        .and_then(|f| f.parse::<u64>().ok())
        .ok_or_else(|| Error::corruption(GLOBALS_KEY, &format!("bad counter in {:?}", value)))
}
