use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Document count and per-term document frequency of a body.
/// Base data for the dictionary cutoff and for IDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// term -> number of documents containing it
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add one document's distinct terms.
    /// Terms must be deduplicated by the caller.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            *self.term_counts.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Document frequency of `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms seen
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(t, &c)| (t.as_ref(), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_frequency_counts_documents_not_occurrences() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["the", "fox"]);
        corpus.add_set(&["the", "dog"]);
        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("the"), 2);
        assert_eq!(corpus.get_term_count("fox"), 1);
        assert_eq!(corpus.get_term_count("cat"), 0);
        assert_eq!(corpus.vocab_size(), 3);
    }
}
