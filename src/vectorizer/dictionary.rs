use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::corpus::Corpus;

/// Dictionary
/// Terms kept as matrix columns, in lexicographic order,
/// each with its document frequency.
/// Column `j` of a document-term matrix is the `j`-th term here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    terms: IndexMap<Box<str>, u64>,
}

impl Dictionary {
    /// Keep the terms whose document frequency is at least `min_document_frequency`
    pub fn from_corpus(corpus: &Corpus, min_document_frequency: u64) -> Self {
        let mut terms: IndexMap<Box<str>, u64> = corpus
            .iter()
            .filter(|&(_, df)| df >= min_document_frequency)
            .map(|(term, df)| (Box::from(term), df))
            .collect();
        terms.sort_unstable_keys();
        Self { terms }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of `term`
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at column `index`
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|(t, _)| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of documents containing `term`, 0 when not in the dictionary
    #[inline]
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.terms.get(term).copied().unwrap_or(0)
    }

    /// Terms in column order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|t| t.as_ref())
    }

    /// `(term, document frequency)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.terms.iter().map(|(t, &df)| (t.as_ref(), df))
    }
}
