use regex::Regex;
use crate::analysis::stage::Stage;

/// Joins the inputs with newlines and strips the hyphen after the prefixes
/// `re`, `pre`, `non`, `de` at word-internal positions, so `re-cycled`
/// reaches the tokenizer as `recycled`. Other hyphenations (`case-based`)
/// are left for the tokenizer to split.
pub struct Heuristics {
    pattern: Regex,
}

impl Heuristics {
    pub fn new() -> Self {
        Heuristics {
            pattern: Regex::new(r"(?i)\b(re|pre|non|de)-(\w)").unwrap(),
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Heuristics::new()
    }
}

impl Stage for Heuristics {
    fn process(&self, input: Vec<String>) -> Vec<String> {
        let joined = input.join("\n");
        vec![self.pattern.replace_all(&joined, "${1}${2}").into_owned()]
    }

    fn name(&self) -> &str {
        "heuristics"
    }

    fn clone_box(&self) -> Box<dyn Stage> {
        Box::new(Heuristics::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[&str]) -> Vec<String> {
        Heuristics::new().process(inputs.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_prefix_hyphens_removed() {
        assert_eq!(run(&["re-cycled paper"]), vec!["recycled paper"]);
        assert_eq!(run(&["pre-war non-zero de-duplicated"]), vec!["prewar nonzero deduplicated"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(run(&["Re-Cycled"]), vec!["ReCycled"]);
    }

    #[test]
    fn test_other_hyphens_kept() {
        // "case-based" splits at the tokenizer instead
        assert_eq!(run(&["case-based decade-long"]), vec!["case-based decade-long"]);
    }

    #[test]
    fn test_joins_with_newline() {
        assert_eq!(run(&["one", "two"]), vec!["one\ntwo"]);
    }
}
