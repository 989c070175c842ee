use crate::core::types::DocId;

/// The four key families share one namespace. Terms are lowercase stems and
/// can never start with a space or tab, so prefixing keeps them disjoint.
pub const GLOBALS_KEY: &str = " ";

/// Per-document record key: `" " + docId`.
pub fn doc_key(id: DocId) -> String {
    format!(" {}", id.0)
}

/// Reverse-lookup key for a caller key: `"\t" + callerKey`.
pub fn reverse_key(caller_key: &str) -> String {
    format!("\t{}", caller_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_families_disjoint() {
        assert_eq!(doc_key(DocId(7)), " 7");
        assert_eq!(reverse_key("7"), "\t7");
        assert_ne!(doc_key(DocId(7)), reverse_key("7"));
        // The global record is not a valid doc key
        assert_ne!(GLOBALS_KEY, doc_key(DocId(0)));
    }
}
