//! Text normalization ahead of TF-IDF vectorization
//!
//! Pipeline: strip bracketed content, drop non-alphabetic characters,
//! collapse whitespace, lowercase, tokenize, remove stopwords, stem.

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// English stopwords filtered out before vectorization
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "me", "more", "most", "my", "myself",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Text normalizer shared by the chatbot, recommender and article QA
pub struct Preprocessor {
    brackets: Regex,
    non_alpha: Regex,
    spaces: Regex,
    stemmer: Stemmer,
}

impl Preprocessor {
    pub fn new() -> Self {
        Preprocessor {
            brackets: Regex::new(r"\[.*?\]").expect("valid bracket pattern"),
            non_alpha: Regex::new(r"[^a-zA-Z]").expect("valid alpha pattern"),
            spaces: Regex::new(r"\s+").expect("valid space pattern"),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Remove bracketed content and non-letters, collapse whitespace
    pub fn clean(&self, text: &str) -> String {
        let text = self.brackets.replace_all(text, " ");
        let text = self.non_alpha.replace_all(&text, " ");
        self.spaces.replace_all(&text, " ").trim().to_string()
    }

    /// Full pipeline: clean, lowercase, drop stopwords, stem
    pub fn preprocess(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    /// Normalized token stream for a piece of text
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.clean(text)
            .to_lowercase()
            .split_whitespace()
            .filter(|word| !STOPWORDS.contains(word))
            .map(|word| self.stemmer.stem(word).to_string())
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_brackets() {
        let pre = Preprocessor::new();
        assert_eq!(pre.clean("hello [aside] world"), "hello world");
    }

    #[test]
    fn test_clean_strips_non_alpha() {
        let pre = Preprocessor::new();
        assert_eq!(pre.clean("price: 42.50 $ up!"), "price up");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        let pre = Preprocessor::new();
        assert_eq!(pre.clean("  too   many    spaces "), "too many spaces");
    }

    #[test]
    fn test_preprocess_removes_stopwords() {
        let pre = Preprocessor::new();
        let out = pre.preprocess("what is the stock price");
        assert!(!out.contains("the"));
        assert!(out.contains("stock"));
    }

    #[test]
    fn test_preprocess_stems() {
        let pre = Preprocessor::new();
        // "recommendations" and "recommendation" stem to the same token
        assert_eq!(
            pre.preprocess("stock recommendations"),
            pre.preprocess("stock recommendation")
        );
    }

    #[test]
    fn test_preprocess_empty_input() {
        let pre = Preprocessor::new();
        assert_eq!(pre.preprocess(""), "");
        assert_eq!(pre.preprocess("  [only brackets]  123 "), "");
    }
}
