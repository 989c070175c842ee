use rust_stemmers::{Algorithm, Stemmer};
use crate::analysis::stage::Stage;

/// Porter-stems every token that contains at least one alphabetic
/// character, lowercasing it first; tokens with no letter pass through
/// unchanged. No token is ever dropped, so positions stay aligned.
pub struct Stem {
    pub algorithm: Algorithm,
}

impl Stem {
    pub fn new() -> Self {
        Stem {
            algorithm: Algorithm::English,
        }
    }
}

impl Default for Stem {
    fn default() -> Self {
        Stem::new()
    }
}

impl Stage for Stem {
    fn process(&self, input: Vec<String>) -> Vec<String> {
        let stemmer = Stemmer::create(self.algorithm);

        input
            .into_iter()
            .map(|token| {
                if token.chars().any(|c| c.is_alphabetic()) {
                    stemmer.stem(&token.to_lowercase()).into_owned()
                } else {
                    token
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "stem"
    }

    fn clone_box(&self) -> Box<dyn Stage> {
        Box::new(Stem {
            algorithm: self.algorithm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[&str]) -> Vec<String> {
        Stem::new().process(inputs.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_stems_and_lowercases() {
        assert_eq!(run(&["Crazy", "crazied"]), vec!["crazi", "crazi"]);
        assert_eq!(run(&["running"]), vec!["run"]);
    }

    #[test]
    fn test_letterless_tokens_pass_through() {
        assert_eq!(run(&["42", "_", "1990"]), vec!["42", "_", "1990"]);
    }

    #[test]
    fn test_no_tokens_dropped() {
        assert_eq!(run(&["a", "42", "worlds"]).len(), 3);
    }
}
