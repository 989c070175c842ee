use regex::Regex;
use crate::analysis::stage::Stage;

/// Splits on non-word characters, emitting the maximal runs of letters,
/// digits and underscores in original order.
pub struct Tokenize {
    pattern: Regex,
}

impl Tokenize {
    pub fn new() -> Self {
        Tokenize {
            pattern: Regex::new(r"\w+").unwrap(),
        }
    }
}

impl Default for Tokenize {
    fn default() -> Self {
        Tokenize::new()
    }
}

impl Stage for Tokenize {
    fn process(&self, input: Vec<String>) -> Vec<String> {
        input
            .iter()
            .flat_map(|text| {
                self.pattern
                    .find_iter(text)
                    .map(|m| m.as_str().to_string())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn name(&self) -> &str {
        "tokenize"
    }

    fn clone_box(&self) -> Box<dyn Stage> {
        Box::new(Tokenize::new())
    }
}
