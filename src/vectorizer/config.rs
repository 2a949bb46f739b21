use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Document-term matrix weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// raw occurrence count
    #[default]
    Count,
    /// count x idf
    TfIdf,
}

/// IDF formula used by `Weighting::TfIdf`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdfSmoothing {
    /// `ln(N / df)`; a term present in every document gets 0
    #[default]
    Plain,
    /// `ln((1 + N) / (1 + df)) + 1`; a term present in every document gets 1
    Smooth,
}

impl IdfSmoothing {
    #[inline]
    pub fn idf(self, doc_num: u64, doc_freq: u64) -> f64 {
        let n = doc_num as f64;
        let df = doc_freq as f64;
        match self {
            IdfSmoothing::Plain => (n / df).ln(),
            IdfSmoothing::Smooth => ((1.0 + n) / (1.0 + df)).ln() + 1.0,
        }
    }
}

/// Stop word selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWords {
    #[default]
    None,
    /// built-in English list
    English,
    /// caller-provided terms, matched after lowercasing
    Custom(BTreeSet<String>),
}

impl StopWords {
    pub fn custom<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopWords::Custom(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect())
    }
}

/// Vectorizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    pub stop_words: StopWords,
    /// a term must occur in at least this many documents
    pub min_document_frequency: u64,
    pub weighting: Weighting,
    pub idf: IdfSmoothing,
    /// scale TF-IDF rows to unit L2 norm
    pub normalize: bool,
    /// tokens shorter than this (in chars) are dropped
    pub min_token_len: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::None,
            min_document_frequency: 1,
            weighting: Weighting::Count,
            idf: IdfSmoothing::Plain,
            normalize: false,
            min_token_len: 1,
        }
    }
}

impl VectorizerConfig {
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_min_document_frequency(mut self, min_df: u64) -> Self {
        self.min_document_frequency = min_df;
        self
    }

    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn with_idf(mut self, idf: IdfSmoothing) -> Self {
        self.idf = idf;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }
}
