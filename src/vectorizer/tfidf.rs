use crate::{
    utils::math::normalize_l2,
    vectorizer::{config::IdfSmoothing, corpus::Corpus, dictionary::Dictionary, token::TermFrequency},
};

/// Weighting engine trait
/// Turns one document's term counts into a matrix row.
/// `idf_vec` is computed once per body, `row` once per document.
pub trait WeightingEngine {
    /// Per-column multiplier, one entry per dictionary term
    fn idf_vec(&self, corpus: &Corpus, dictionary: &Dictionary) -> Vec<f64>;

    /// Matrix row for one document
    fn row(&self, freq: &TermFrequency, dictionary: &Dictionary, idf: &[f64]) -> Vec<f64> {
        weighted_counts(freq, dictionary, idf)
    }
}

/// `count(term) * idf[term]` in column order
#[inline]
pub fn weighted_counts(freq: &TermFrequency, dictionary: &Dictionary, idf: &[f64]) -> Vec<f64> {
    dictionary
        .terms()
        .zip(idf)
        .map(|(term, &w)| freq.term_count(term) as f64 * w)
        .collect()
}

/// Raw counts
#[derive(Debug, Clone, Copy, Default)]
pub struct CountEngine;

impl WeightingEngine for CountEngine {
    fn idf_vec(&self, _corpus: &Corpus, dictionary: &Dictionary) -> Vec<f64> {
        vec![1.0; dictionary.len()]
    }
}

/// count x idf, optionally L2-normalized per row
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfEngine {
    pub smoothing: IdfSmoothing,
    pub normalize: bool,
}

impl TfIdfEngine {
    pub fn new(smoothing: IdfSmoothing, normalize: bool) -> Self {
        Self { smoothing, normalize }
    }
}

impl WeightingEngine for TfIdfEngine {
    fn idf_vec(&self, corpus: &Corpus, dictionary: &Dictionary) -> Vec<f64> {
        let doc_num = corpus.get_doc_num();
        dictionary
            .iter()
            .map(|(_, df)| self.smoothing.idf(doc_num, df))
            .collect()
    }

    fn row(&self, freq: &TermFrequency, dictionary: &Dictionary, idf: &[f64]) -> Vec<f64> {
        let mut row = weighted_counts(freq, dictionary, idf);
        if self.normalize {
            normalize_l2(&mut row);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Corpus, Dictionary, TermFrequency) {
        let mut corpus = Corpus::new();
        corpus.add_set(&["a", "b"]);
        corpus.add_set(&["a"]);
        let dict = Dictionary::from_corpus(&corpus, 1);
        let freq: TermFrequency = ["a", "b", "b"].into_iter().collect();
        (corpus, dict, freq)
    }

    #[test]
    fn count_row_is_raw_counts() {
        let (corpus, dict, freq) = setup();
        let idf = CountEngine.idf_vec(&corpus, &dict);
        assert_eq!(CountEngine.row(&freq, &dict, &idf), vec![1.0, 2.0]);
    }

    #[test]
    fn plain_tfidf_zeroes_ubiquitous_terms() {
        let (corpus, dict, freq) = setup();
        let engine = TfIdfEngine::new(IdfSmoothing::Plain, false);
        let idf = engine.idf_vec(&corpus, &dict);
        let row = engine.row(&freq, &dict, &idf);
        assert_eq!(row[0], 0.0);
        assert!((row[1] - 2.0 * 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn normalized_rows_have_unit_norm() {
        let (corpus, dict, freq) = setup();
        let engine = TfIdfEngine::new(IdfSmoothing::Smooth, true);
        let idf = engine.idf_vec(&corpus, &dict);
        let row = engine.row(&freq, &dict, &idf);
        let n: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((n - 1.0).abs() < 1e-12);
    }
}
