use std::collections::HashSet;

use crate::vectorizer::{
    config::{StopWords, VectorizerConfig},
    stop_words::ENGLISH_STOP_WORDS,
    token::TermFrequency,
};

/// Tokenizer: lowercase, split on non-alphanumeric chars,
/// drop short tokens and stop words.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    stop_words: HashSet<String>,
    min_token_len: usize,
}

impl Analyzer {
    pub fn new(config: &VectorizerConfig) -> Self {
        let stop_words = match &config.stop_words {
            StopWords::None => HashSet::new(),
            StopWords::English => ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            StopWords::Custom(words) => words.iter().map(|w| w.to_lowercase()).collect(),
        };
        Self {
            stop_words,
            min_token_len: config.min_token_len,
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty() && t.chars().count() >= self.min_token_len)
            .filter(|t| !self.is_stop_word(t))
            .map(str::to_string)
            .collect()
    }

    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.tokenize(text));
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        let analyzer = Analyzer::new(&VectorizerConfig::default());
        assert_eq!(
            analyzer.tokenize("Quoth the Raven, \"Nevermore.\""),
            vec!["quoth", "the", "raven", "nevermore"]
        );
        assert!(analyzer.tokenize("  --  ").is_empty());
    }

    #[test]
    fn english_stop_words_and_min_len() {
        let config = VectorizerConfig::default()
            .with_stop_words(StopWords::English)
            .with_min_token_len(2);
        let analyzer = Analyzer::new(&config);
        assert_eq!(analyzer.tokenize("Half a league, half a league onward"), vec![
            "half", "league", "half", "league", "onward"
        ]);
    }

    #[test]
    fn custom_stop_words_ignore_case() {
        let config = VectorizerConfig::default().with_stop_words(StopWords::custom(["THE"]));
        let freq = Analyzer::new(&config).term_frequency("The the fox");
        assert_eq!(freq.term_sum(), 1);
        assert_eq!(freq.term_count("fox"), 1);
    }
}
