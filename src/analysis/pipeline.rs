use crate::analysis::stage::Stage;
use crate::analysis::stages::heuristics::Heuristics;
use crate::analysis::stages::stemmer::Stem;
use crate::analysis::stages::stopword::StopFilter;
use crate::analysis::stages::tokenize::Tokenize;
use crate::core::config::DEFAULT_FILTERS;
use crate::core::error::{Error, ErrorKind, Result};

/// Ordered composition of lexical stages, constructed once per engine and
/// shared between the indexing and query paths.
pub struct Pipeline {
    pub stages: Vec<Box<dyn Stage>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl Pipeline {
    /// Default stage order: heuristics, tokenize, stop, stem.
    pub fn standard() -> Self {
        let names: Vec<String> = DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect();
        Pipeline::from_config(&names, None).expect("default stage names resolve")
    }

    /// Builds a pipeline from configured stage names. An optional stop-list
    /// source replaces the built-in English set.
    pub fn from_config(names: &[String], stoplist: Option<&str>) -> Result<Self> {
        let mut stages: Vec<Box<dyn Stage>> = Vec::with_capacity(names.len());

        for name in names {
            let stage: Box<dyn Stage> = match name.as_str() {
                "heuristics" => Box::new(Heuristics::new()),
                "tokenize" => Box::new(Tokenize::new()),
                "stop" => match stoplist {
                    Some(source) => Box::new(StopFilter::from_source(source)),
                    None => Box::new(StopFilter::english()),
                },
                "stem" => Box::new(Stem::new()),
                other => {
                    return Err(Error::new(
                        ErrorKind::InvalidArgument,
                        format!("unknown lexical stage '{}'", other),
                    ));
                }
            };
            stages.push(stage);
        }

        Ok(Pipeline { stages })
    }

    /// Appends a user-supplied stage after the configured ones.
    pub fn push(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    pub fn run(&self, input: Vec<String>) -> Vec<String> {
        let mut tokens = input;
        for stage in &self.stages {
            tokens = stage.process(tokens);
        }
        tokens
    }
}

impl Clone for Pipeline {
    fn clone(&self) -> Self {
        Pipeline {
            stages: self.stages.iter().map(|s| s.clone_box()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn run(texts: &[&str]) -> Vec<String> {
        Pipeline::standard().run(texts.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_standard_pipeline() {
        assert_eq!(run(&["Hello, World!"]), vec!["hello", "world"]);
        assert_eq!(run(&["World in motion"]), vec!["world", "motion"]);
    }

    #[test]
    fn test_stop_words_removed() {
        assert_eq!(run(&["the"]), Vec::<String>::new());
        assert_eq!(run(&["The quick and the dead"]), vec!["quick", "dead"]);
    }

    #[test]
    fn test_stemming_collapses_variants() {
        assert_eq!(run(&["crazy"]), run(&["crazied"]));
        assert_eq!(run(&["re-cycled"]), vec!["recycl"]);
        assert_eq!(run(&["case-based"]), vec!["case", "base"]);
    }

    #[test]
    fn test_identity_on_empty_input() {
        assert_eq!(run(&[]), Vec::<String>::new());
        assert_eq!(run(&[""]), Vec::<String>::new());
    }

    #[test]
    fn test_idempotent() {
        let pipeline = Pipeline::standard();
        for text in ["Hello, World!", "Cruel crazy beautiful world", "re-cycled 42 things"] {
            let once = pipeline.run(vec![text.to_string()]);
            let twice = pipeline.run(once.clone());
            assert_eq!(once, twice, "text {:?}", text);
        }
    }

    #[test]
    fn test_custom_stoplist() {
        let names: Vec<String> = DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect();
        let pipeline = Pipeline::from_config(&names, Some("# mine\nworld")).unwrap();
        assert_eq!(pipeline.run(vec!["hello the world".to_string()]), vec!["hello", "the"]);
    }

    #[test]
    fn test_unknown_stage_rejected() {
        let names = vec!["tokenize".to_string(), "soundex".to_string()];
        let err = Pipeline::from_config(&names, None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }
}
