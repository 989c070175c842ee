use std::sync::LazyLock;
use regex::Regex;
use crate::core::error::{Error, Result};
use crate::core::types::DocId;

/// One `<docId>` or `<docId>=<count>` entry; a bare id means the term
/// appears once in that document.
static POSTING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:=(\d+))?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    pub count: u64,
}

/// Term record: `"<postings>:<cfreq>"` where postings are `;`-separated in
/// insertion order and `cfreq` is the collection frequency. Comma fields
/// after `cfreq` are reserved and carried through on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRecord {
    pub postings: Vec<Posting>,
    pub cfreq: u64,
    pub reserved: Vec<String>,
}

impl TermRecord {
    pub fn decode(key: &str, value: &str) -> Result<Self> {
        let (left, right) = value
            .split_once(':')
            .ok_or_else(|| Error::corruption(key, "term record has no ':' boundary"))?;

        let mut postings = Vec::new();
        for entry in left.split(';') {
            let caps = POSTING_RE
                .captures(entry)
                .ok_or_else(|| Error::corruption(key, &format!("bad posting {:?}", entry)))?;

            let doc_id = caps[1]
                .parse::<u64>()
                .map_err(|_| Error::corruption(key, &format!("bad posting id {:?}", entry)))?;
            let count = match caps.get(2) {
                Some(digits) => digits.as_str().parse::<u64>().map_err(|_| {
                    Error::corruption(key, &format!("bad posting count {:?}", entry))
                })?,
                None => 1,
            };

            postings.push(Posting {
                doc_id: DocId(doc_id),
                count,
            });
        }

        let mut fields = right.split(',');
        let cfreq = fields
            .next()
            .and_then(|f| f.parse::<u64>().ok())
            .ok_or_else(|| Error::corruption(key, &format!("bad cfreq in {:?}", right)))?;
        let reserved = fields.map(|f| f.to_string()).collect();

        Ok(TermRecord {
            postings,
            cfreq,
            reserved,
        })
    }

    pub fn encode(&self) -> String {
        let postings = self
            .postings
            .iter()
            .map(|p| encode_posting(p.doc_id, p.count))
            .collect::<Vec<_>>()
            .join(";");

        let mut out = format!("{}:{}", postings, self.cfreq);
        for field in &self.reserved {
            out.push(',');
            out.push_str(field);
        }
        out
    }

    /// Read-modify-write step of the indexer: append one posting to the
    /// stored value (or start a fresh record) and bump `cfreq` by `count`.
    pub fn append(existing: Option<&str>, key: &str, doc_id: DocId, count: u64) -> Result<String> {
        let record = match existing {
            None => TermRecord {
                postings: vec![Posting { doc_id, count }],
                cfreq: count,
                reserved: Vec::new(),
            },
            Some(value) => {
                let mut record = TermRecord::decode(key, value)?;
                record.postings.push(Posting { doc_id, count });
                record.cfreq += count;
                record
            }
        };

        Ok(record.encode())
    }
}

fn encode_posting(doc_id: DocId, count: u64) -> String {
    if count == 1 {
        format!("{}", doc_id)
    } else {
        format!("{}={}", doc_id, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_decode_both_posting_shapes() {
        let record = TermRecord::decode("world", "1;3=2;12:4").unwrap();
        assert_eq!(
            record.postings,
            vec![
                Posting { doc_id: DocId(1), count: 1 },
                Posting { doc_id: DocId(3), count: 2 },
                Posting { doc_id: DocId(12), count: 1 },
            ]
        );
        assert_eq!(record.cfreq, 4);
        assert!(record.reserved.is_empty());
    }

    #[test]
    fn test_round_trip() {
        for value in ["1:1", "1;2:2", "5=3:3", "1;3=2;4:4"] {
            let record = TermRecord::decode("t", value).unwrap();
            assert_eq!(record.encode(), value);
        }
    }

    #[test]
    fn test_append_to_absent() {
        assert_eq!(TermRecord::append(None, "t", DocId(1), 1).unwrap(), "1:1");
        assert_eq!(TermRecord::append(None, "t", DocId(2), 3).unwrap(), "2=3:3");
    }

    #[test]
    fn test_append_to_existing() {
        let value = TermRecord::append(Some("1:1"), "t", DocId(4), 2).unwrap();
        assert_eq!(value, "1;4=2:3");
    }

    #[test]
    fn test_reserved_fields_survive_append() {
        let value = TermRecord::append(Some("1:1,future,x"), "t", DocId(2), 1).unwrap();
        assert_eq!(value, "1;2:2,future,x");
    }

    #[test]
    fn test_malformed() {
        for value in ["", "1", "1;:1", "a:1", "1=:1", "1=2=3:1", "1:", "1:x"] {
            let err = TermRecord::decode("t", value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Corruption, "value {:?}", value);
            assert!(err.context.contains("\"t\""), "context names the key");
        }
    }
}
