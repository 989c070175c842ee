/// One lexical stage. Stages consume an ordered sequence of strings and
/// produce an ordered sequence of strings; the composition of stages is the
/// shared vocabulary on both the indexing and query paths.
pub trait Stage: Send + Sync {
    fn process(&self, input: Vec<String>) -> Vec<String>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Stage>;
}
