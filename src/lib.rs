//! Latent Semantic Analysis:
//! raw text -> document-term matrix -> truncated SVD -> topic-encoded documents.

pub mod analysis;
pub mod body;
pub mod error;
pub mod topic;
pub mod utils;
pub mod vectorizer;

/// Body and Document
/// A body is the ordered collection of documents under analysis.
/// Row `i` of every derived matrix belongs to document `i`.
/// A document may carry a label (e.g. the title of its source work),
/// which is used for display and grouping only.
///
/// Bodies can be read from a headed CSV with `Body::from_csv_reader`.
pub use body::{Body, Document};

/// Error type
/// `EmptyBody`, `EmptyDictionary`, `InvalidRank` and `DimensionMismatch`
/// cover misconfigured input; nothing is retried internally.
pub use error::{LsaError, Result};

/// Vectorizer
/// Tokenizes (lowercase, split on non-alphanumeric chars), removes stop words,
/// drops terms below the minimum document frequency and builds:
/// - the `Dictionary`, sorted lexicographically
/// - the `DocumentTermMatrix`, weighted by count or TF-IDF
///
/// # IDF
/// `IdfSmoothing::Plain` (default) uses `ln(N / df)`.
/// `IdfSmoothing::Smooth` uses `ln((1 + N) / (1 + df)) + 1`.
pub use vectorizer::{
    config::{IdfSmoothing, StopWords, VectorizerConfig, Weighting},
    dictionary::Dictionary,
    token::TermFrequency,
    DocumentTermMatrix, Vectorizer,
};

/// Weighting engine trait
/// Plug point for custom document-term weighting.
/// `CountEngine` and `TfIdfEngine` are provided.
pub use vectorizer::tfidf::{CountEngine, TfIdfEngine, WeightingEngine};

/// Topic projector
/// Truncated SVD (one-sided Jacobi) of the document-term matrix.
/// `TopicModel` holds:
/// - the topic-encoded matrix (`documents x k`)
/// - the encoding matrix (`terms x k`)
/// - singular values and explained variance ratios
///
/// # Sign
/// Singular vectors are defined up to sign. Every encoding column is flipped
/// so that its largest-magnitude entry is positive. Results from other SVD
/// implementations may differ in sign per topic.
pub use topic::{svd::TruncatedSvd, TopicModel, TopicProjector};

/// Interpretation helpers
/// - `RankedTerms`: terms of a topic by descending absolute loading
/// - `TopicTable` / `EncodingTable`: labeled numeric tables for display
/// - `LabelGroup`: topic points grouped by document label, one plot series each
pub use topic::{
    ranking::RankedTerms,
    table::{EncodingTable, LabelGroup, TopicTable},
};

pub use analysis::Analysis;
