pub mod ranking;
pub mod svd;
pub mod table;

use ndarray::{Array1, Array2, ArrayView2};
use serde::Serialize;

use crate::{
    body::Body,
    error::{LsaError, Result},
    topic::{
        ranking::RankedTerms,
        svd::TruncatedSvd,
        table::{topic_columns, EncodingTable, TermRow, TopicRow, TopicTable},
    },
    vectorizer::{dictionary::Dictionary, DocumentTermMatrix},
};

/// Topic projector
/// Reduces a document-term matrix to `n_topics` latent dimensions by truncated SVD.
#[derive(Debug, Clone, Copy)]
pub struct TopicProjector {
    n_topics: usize,
}

/// Result of a projection: topic-encoded documents, the term encoding matrix
/// and the dictionary labelling its rows.
#[derive(Debug, Clone, Serialize)]
pub struct TopicModel {
    svd: TruncatedSvd,
    dictionary: Dictionary,
}

impl TopicProjector {
    pub fn new(n_topics: usize) -> Self {
        Self { n_topics }
    }

    pub fn n_topics(&self) -> usize {
        self.n_topics
    }

    /// # Errors
    /// * `DimensionMismatch` - matrix with zero rows or columns
    /// * `InvalidRank` - `n_topics < 1` or `n_topics >= min(documents, terms)`
    pub fn project(&self, dtm: &DocumentTermMatrix) -> Result<TopicModel> {
        let svd = TruncatedSvd::compute(dtm.matrix().view(), self.n_topics)?;
        Ok(TopicModel {
            svd,
            dictionary: dtm.dictionary().clone(),
        })
    }

    /// Projection of an unlabeled matrix
    pub fn project_matrix(&self, m: ArrayView2<'_, f64>) -> Result<TruncatedSvd> {
        TruncatedSvd::compute(m, self.n_topics)
    }
}

impl TopicModel {
    /// `N x k`
    pub fn topic_encoded(&self) -> &Array2<f64> {
        &self.svd.topic_encoded
    }

    /// `T x k`, row `j` is dictionary term `j`
    pub fn encoding(&self) -> &Array2<f64> {
        &self.svd.encoding
    }

    pub fn singular_values(&self) -> &Array1<f64> {
        &self.svd.singular_values
    }

    pub fn explained_variance_ratio(&self) -> &Array1<f64> {
        &self.svd.explained_variance_ratio
    }

    pub fn n_topics(&self) -> usize {
        self.svd.n_topics()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn svd(&self) -> &TruncatedSvd {
        &self.svd
    }

    /// All terms of `topic` by descending absolute loading
    pub fn ranked_terms(&self, topic: usize) -> Result<RankedTerms> {
        if topic >= self.n_topics() {
            return Err(LsaError::InvalidTopic {
                topic,
                topics: self.n_topics(),
            });
        }
        let list = self
            .dictionary
            .terms()
            .zip(self.svd.encoding.column(topic))
            .map(|(term, &loading)| (Box::from(term), loading))
            .collect();
        let mut ranked = RankedTerms::new(topic, list);
        ranked.sort_by_abs_loading();
        Ok(ranked)
    }

    pub fn top_terms(&self, topic: usize, n: usize) -> Result<RankedTerms> {
        let mut ranked = self.ranked_terms(topic)?;
        ranked.truncate(n);
        Ok(ranked)
    }

    pub fn reconstruct(&self) -> Array2<f64> {
        self.svd.reconstruct()
    }

    pub fn reconstruction_error(&self, dtm: &DocumentTermMatrix) -> Result<f64> {
        self.svd.reconstruction_error(dtm.matrix().view())
    }

    /// Topic-encoded rows labeled with the body's text and labels
    pub fn topic_table(&self, body: &Body) -> Result<TopicTable> {
        let encoded = &self.svd.topic_encoded;
        if body.len() != encoded.nrows() {
            return Err(LsaError::DimensionMismatch {
                rows: body.len(),
                cols: encoded.ncols(),
            });
        }
        let rows = body
            .iter()
            .zip(encoded.rows())
            .map(|(doc, topics)| TopicRow {
                text: doc.text.clone(),
                label: doc.label.clone(),
                topics: topics.to_vec(),
            })
            .collect();
        Ok(TopicTable {
            columns: topic_columns(self.n_topics()),
            rows,
        })
    }

    pub fn encoding_table(&self) -> EncodingTable {
        let rows = self
            .dictionary
            .terms()
            .zip(self.svd.encoding.rows())
            .map(|(term, loadings)| TermRow {
                term: term.to_string(),
                loadings: loadings.to_vec(),
            })
            .collect();
        EncodingTable {
            columns: topic_columns(self.n_topics()),
            rows,
        }
    }
}
