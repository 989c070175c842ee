use std::collections::HashSet;
use crate::analysis::stage::Stage;

/// Default English stop set: articles, pronouns, prepositions, common
/// verbs, numerals and abbreviations.
const DEFAULT_STOP_WORDS: &[&str] = &[
    // articles, determiners, qualifiers
    "a", "an", "the", "this", "that", "these", "those", "each", "every",
    "either", "neither", "some", "any", "all", "both", "few", "several",
    "many", "much", "more", "most", "other", "others", "another", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "certain", "various",
    // pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours",
    "ourselves", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its",
    "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "whose", "anybody", "anyone", "anything",
    "everybody", "everyone", "everything", "nobody", "none", "nothing",
    "somebody", "someone", "something", "whatever", "whichever", "whoever",
    "whomever",
    // prepositions
    "about", "above", "across", "after", "against", "along", "amid",
    "among", "around", "at", "before", "behind", "below", "beneath",
    "beside", "besides", "between", "beyond", "by", "concerning", "despite",
    "down", "during", "except", "for", "from", "in", "inside", "into",
    "like", "near", "of", "off", "on", "onto", "out", "outside", "over",
    "past", "per", "since", "through", "throughout", "till", "to",
    "toward", "towards", "under", "underneath", "until", "unto", "up",
    "upon", "via", "with", "within", "without",
    // conjunctions, connectives
    "and", "but", "or", "yet", "although", "because", "however", "if",
    "nevertheless", "once", "then", "therefore", "though", "thus",
    "unless", "whereas", "wherever", "while", "whether",
    // common verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "done", "can", "could",
    "may", "might", "must", "shall", "should", "will", "would", "ought",
    "get", "gets", "got", "getting", "go", "goes", "going", "gone", "went",
    "come", "comes", "coming", "came", "make", "makes", "making", "made",
    "take", "takes", "taking", "took", "taken", "say", "says", "saying",
    "said", "see", "sees", "seeing", "saw", "seen", "know", "knows",
    "knowing", "knew", "known", "think", "thinks", "thinking", "thought",
    "want", "wants", "wanted", "use", "uses", "using", "used", "find",
    "finds", "finding", "found", "give", "gives", "giving", "gave",
    "given", "tell", "tells", "telling", "told", "become", "becomes",
    "becoming", "became", "let", "lets", "put", "puts", "seem", "seems",
    "seemed", "keep", "keeps", "kept",
    // adverbs and other function words
    "again", "ago", "almost", "already", "also", "always", "anywhere",
    "away", "back", "else", "elsewhere", "enough", "even", "ever",
    "everywhere", "far", "further", "here", "how", "instead", "just",
    "later", "least", "less", "meanwhile", "maybe", "moreover", "never",
    "now", "nowhere", "often", "otherwise", "perhaps", "quite", "rather",
    "really", "soon", "still", "somewhat", "somewhere", "there", "thereby",
    "therein", "when", "where", "why", "yes",
    // contraction fragments left by the tokenizer
    "d", "ll", "m", "o", "re", "s", "t", "ve", "y",
    // numerals
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "twenty", "thirty", "forty", "fifty",
    "sixty", "seventy", "eighty", "ninety", "hundred", "thousand",
    "million", "first", "second", "third", "fourth", "fifth", "twice",
    // abbreviations
    "dr", "mr", "mrs", "ms", "jr", "sr", "st", "etc", "eg", "ie", "vs",
    "inc", "ltd", "co",
];

/// Drops tokens whose lowercased form is in the stop set.
pub struct StopFilter {
    pub stop_words: HashSet<String>,
}

impl StopFilter {
    pub fn new(stop_words: HashSet<String>) -> Self {
        StopFilter { stop_words }
    }

    pub fn english() -> Self {
        StopFilter {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Builds a stop set from a whitespace-separated source string; lines
    /// starting with `#` are comments.
    pub fn from_source(source: &str) -> Self {
        let stop_words = source
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(|line| line.split_whitespace())
            .map(|word| word.to_lowercase())
            .collect();

        StopFilter { stop_words }
    }
}

impl Stage for StopFilter {
    fn process(&self, input: Vec<String>) -> Vec<String> {
        input
            .into_iter()
            .filter(|token| !self.stop_words.contains(&token.to_lowercase()))
            .collect()
    }

    fn name(&self) -> &str {
        "stop"
    }

    fn clone_box(&self) -> Box<dyn Stage> {
        Box::new(StopFilter {
            stop_words: self.stop_words.clone(),
        })
    }
}
