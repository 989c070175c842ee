pub mod heuristics;
pub mod tokenize;
pub mod stopword;
pub mod stemmer;
