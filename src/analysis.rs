use serde::Serialize;
use tracing::info;

use crate::{
    body::Body,
    error::Result,
    topic::{table::TopicTable, TopicModel, TopicProjector},
    vectorizer::{config::VectorizerConfig, DocumentTermMatrix, Vectorizer},
};

/// Vectorize `body` and project it onto `n_topics` topics in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub document_term: DocumentTermMatrix,
    pub model: TopicModel,
    pub table: TopicTable,
}

impl Analysis {
    pub fn run(body: &Body, config: &VectorizerConfig, n_topics: usize) -> Result<Self> {
        let document_term = Vectorizer::new(config.clone()).vectorize(body)?;
        let model = TopicProjector::new(n_topics).project(&document_term)?;
        let table = model.topic_table(body)?;
        info!(
            documents = document_term.n_documents(),
            terms = document_term.n_terms(),
            topics = n_topics,
            "latent semantic analysis finished"
        );
        Ok(Self {
            document_term,
            model,
            table,
        })
    }
}
