use crate::core::error::{Error, Result};

/// Per-document record: `<escapedTerms>":"<docSize>","<callerKey>`.
///
/// The term list holds the document's distinct terms in discovery order,
/// shaped like postings (`term` or `term=count`); `;`, `=` and `\` inside a
/// term are backslash-escaped. The caller key is stored verbatim and read
/// back through the final `,` without touching the escaped list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRecord {
    pub terms: Vec<(String, u64)>,
    pub doc_size: u64,
    pub caller_key: String,
}

impl DocRecord {
    pub fn encode(&self) -> String {
        let entries = self
            .terms
            .iter()
            .map(|(term, count)| {
                if *count >= 2 {
                    format!("{}={}", escape(term), count)
                } else {
                    escape(term)
                }
            })
            .collect::<Vec<_>>()
            .join(";");

        format!("{}:{},{}", entries, self.doc_size, self.caller_key)
    }

    /// Full decode, escape-aware. The engine's read paths use
    /// [`caller_key_of`] and [`doc_size_of`] instead; this exists for
    /// consistency checks and forward compatibility.
    pub fn decode(key: &str, value: &str) -> Result<Self> {
        let boundary = value
            .find(':')
            .ok_or_else(|| Error::corruption(key, "document record has no ':' boundary"))?;
        let rest = &value[boundary + 1..];
        let comma = rest
            .find(',')
            .ok_or_else(|| Error::corruption(key, "document record has no docSize terminator"))?;

        let doc_size = rest[..comma]
            .parse::<u64>()
            .map_err(|_| Error::corruption(key, &format!("bad docSize {:?}", &rest[..comma])))?;

        Ok(DocRecord {
            terms: decode_terms(key, &value[..boundary])?,
            doc_size,
            caller_key: rest[comma + 1..].to_string(),
        })
    }
}

/// Fast path: the caller key is everything after the final `,`. This never
/// backtracks over the escaped term list.
pub fn caller_key_of<'a>(key: &str, value: &'a str) -> Result<&'a str> {
    let comma = value
        .rfind(',')
        .ok_or_else(|| Error::corruption(key, "document record has no caller key"))?;
    Ok(&value[comma + 1..])
}

/// Fast path: docSize is the decimal run between the `:` boundary and the
/// next `,`.
pub fn doc_size_of(key: &str, value: &str) -> Result<u64> {
    let boundary = value
        .find(':')
        .ok_or_else(|| Error::corruption(key, "document record has no ':' boundary"))?;
    let rest = &value[boundary + 1..];
    let comma = rest
        .find(',')
        .ok_or_else(|| Error::corruption(key, "document record has no docSize terminator"))?;

    rest[..comma]
        .parse::<u64>()
        .map_err(|_| Error::corruption(key, &format!("bad docSize {:?}", &rest[..comma])))
}

/// A freed slot's record carries the next free id as its only content; an
/// empty value terminates the list. Anything else was overwritten and the
/// free list can no longer be trusted.
pub fn free_next_of(key: &str, value: &str) -> Result<Option<u64>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u64>()
        .map(Some)
        .map_err(|_| Error::corruption(key, &format!("bad free-list pointer {:?}", value)))
}

fn escape(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if c == ';' || c == '=' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn decode_terms(key: &str, list: &str) -> Result<Vec<(String, u64)>> {
    if list.is_empty() {
        return Ok(Vec::new());
    }

    let mut terms = Vec::new();
    let mut term = String::new();
    let mut count_digits: Option<String> = None;
    let mut chars = list.chars();

    let mut flush = |term: &mut String, count_digits: &mut Option<String>| -> Result<()> {
        if term.is_empty() {
            return Err(Error::corruption(key, "empty term in document record"));
        }
        let count = match count_digits.take() {
            None => 1,
            Some(digits) => digits
                .parse::<u64>()
                .map_err(|_| Error::corruption(key, &format!("bad term count {:?}", digits)))?,
        };
        terms.push((std::mem::take(term), count));
        Ok(())
    };

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| Error::corruption(key, "dangling escape in term list"))?;
                term.push(escaped);
            }
            ';' => flush(&mut term, &mut count_digits)?,
            '=' if count_digits.is_none() => count_digits = Some(String::new()),
            c => match &mut count_digits {
                Some(digits) => digits.push(c),
                None => term.push(c),
            },
        }
    }
    flush(&mut term, &mut count_digits)?;

    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_encode() {
        let record = DocRecord {
            terms: vec![("hello".to_string(), 1), ("world".to_string(), 3)],
            doc_size: 4,
            caller_key: "doc-1".to_string(),
        };
        assert_eq!(record.encode(), "hello;world=3:4,doc-1");
    }

    #[test]
    fn test_round_trip() {
        let record = DocRecord {
            terms: vec![("hello".to_string(), 2), ("world".to_string(), 1)],
            doc_size: 3,
            caller_key: "k".to_string(),
        };
        assert_eq!(DocRecord::decode(" 1", &record.encode()).unwrap(), record);
    }

    #[test]
    fn test_escaped_round_trip() {
        // Pipeline terms are word characters only, but the codec must
        // honor the escape rules byte-for-byte regardless
        let record = DocRecord {
            terms: vec![("a;b=c\\d".to_string(), 2)],
            doc_size: 2,
            caller_key: "k".to_string(),
        };
        assert_eq!(record.encode(), "a\\;b\\=c\\\\d=2:2,k");
        assert_eq!(DocRecord::decode(" 1", &record.encode()).unwrap(), record);
    }

    #[test]
    fn test_empty_term_list() {
        // A document of nothing but stop words still gets a record
        let record = DocRecord {
            terms: Vec::new(),
            doc_size: 0,
            caller_key: "k".to_string(),
        };
        assert_eq!(record.encode(), ":0,k");
        assert_eq!(DocRecord::decode(" 1", ":0,k").unwrap(), record);
    }

    #[test]
    fn test_caller_key_fast_path() {
        assert_eq!(caller_key_of(" 1", "hello;world:2,doc-1").unwrap(), "doc-1");
        assert_eq!(caller_key_of(" 1", ":0,k").unwrap(), "k");
    }

    #[test]
    fn test_doc_size_fast_path() {
        assert_eq!(doc_size_of(" 1", "hello;world=3:4,k").unwrap(), 4);
        assert_eq!(doc_size_of(" 1", ":0,k").unwrap(), 0);
    }

    #[test]
    fn test_free_next() {
        assert_eq!(free_next_of(" 2", "").unwrap(), None);
        assert_eq!(free_next_of(" 2", "5").unwrap(), Some(5));
        let err = free_next_of(" 2", "hello:1,k").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Corruption);
    }

    #[test]
    fn test_malformed() {
        for value in ["", "hello", "hello:x,k", "hello:2"] {
            let err = DocRecord::decode(" 1", value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Corruption, "value {:?}", value);
        }
    }
}
