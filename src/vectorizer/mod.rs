pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod stop_words;
pub mod tfidf;
pub mod token;

use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{
    body::Body,
    error::{LsaError, Result},
    vectorizer::{
        analyzer::Analyzer,
        config::{VectorizerConfig, Weighting},
        corpus::Corpus,
        dictionary::Dictionary,
        tfidf::{CountEngine, TfIdfEngine, WeightingEngine},
        token::TermFrequency,
    },
};

/// Vectorizer
/// Maps a body onto a document-term matrix and the dictionary defining its columns.
/// Holds configuration only; every call to `vectorize` is independent.
#[derive(Debug, Clone, Default)]
pub struct Vectorizer {
    config: VectorizerConfig,
}

/// Document-term matrix
/// One row per document (body order), one column per dictionary term.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTermMatrix {
    matrix: Array2<f64>,
    dictionary: Dictionary,
    weighting: Weighting,
}

impl Vectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Build the dictionary and the weighted document-term matrix.
    ///
    /// # Errors
    /// * `EmptyBody` - the body has no documents
    /// * `EmptyDictionary` - no term survives stop words and the document frequency cutoff
    pub fn vectorize(&self, body: &Body) -> Result<DocumentTermMatrix> {
        if body.is_empty() {
            return Err(LsaError::EmptyBody);
        }
        let analyzer = Analyzer::new(&self.config);
        // collect は順序を保つ
        let freqs: Vec<TermFrequency> = body
            .documents()
            .par_iter()
            .map(|doc| analyzer.term_frequency(&doc.text))
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_set(&freq.term_set_ref_str());
        }
        let dictionary = Dictionary::from_corpus(&corpus, self.config.min_document_frequency);
        debug!(
            documents = corpus.get_doc_num(),
            vocab = corpus.vocab_size(),
            kept = dictionary.len(),
            tokens = freqs.iter().map(TermFrequency::term_sum).sum::<u64>(),
            empty_documents = freqs.iter().filter(|f| f.is_empty()).count(),
            "dictionary built"
        );
        if dictionary.is_empty() {
            return Err(LsaError::EmptyDictionary);
        }

        let matrix = match self.config.weighting {
            Weighting::Count => Self::build(&CountEngine, &corpus, &dictionary, &freqs),
            Weighting::TfIdf => {
                let engine = TfIdfEngine::new(self.config.idf, self.config.normalize);
                Self::build(&engine, &corpus, &dictionary, &freqs)
            }
        };
        Ok(DocumentTermMatrix {
            matrix,
            dictionary,
            weighting: self.config.weighting,
        })
    }

    fn build<E>(engine: &E, corpus: &Corpus, dictionary: &Dictionary, freqs: &[TermFrequency]) -> Array2<f64>
    where
        E: WeightingEngine,
    {
        let idf = engine.idf_vec(corpus, dictionary);
        let mut matrix = Array2::zeros((freqs.len(), dictionary.len()));
        for (mut row, freq) in matrix.rows_mut().into_iter().zip(freqs) {
            for (cell, value) in row.iter_mut().zip(engine.row(freq, dictionary, &idf)) {
                *cell = value;
            }
        }
        matrix
    }
}

impl DocumentTermMatrix {
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    #[inline]
    pub fn n_documents(&self) -> usize {
        self.matrix.nrows()
    }

    #[inline]
    pub fn n_terms(&self) -> usize {
        self.matrix.ncols()
    }

    /// `(documents, terms)`
    pub fn shape(&self) -> (usize, usize) {
        self.matrix.dim()
    }

    pub fn row(&self, document: usize) -> Option<ArrayView1<'_, f64>> {
        (document < self.n_documents()).then(|| self.matrix.row(document))
    }

    /// Weight of `term` in `document`
    pub fn get(&self, document: usize, term: &str) -> Option<f64> {
        let column = self.dictionary.index_of(term)?;
        self.matrix.get((document, column)).copied()
    }

    pub fn into_parts(self) -> (Array2<f64>, Dictionary) {
        (self.matrix, self.dictionary)
    }
}
