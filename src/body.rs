use std::{io, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{LsaError, Result};

/// One unit of text (a sentence or a line).
/// The label carries source metadata such as the title of the work;
/// it is used for display and grouping only, never for computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub label: Option<String>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
        }
    }

    pub fn with_label(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: Some(label.into()),
        }
    }
}

/// Ordered collection of documents.
/// Row `i` of every matrix derived from a body belongs to `documents[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    documents: Vec<Document>,
}

impl Body {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Build an unlabeled body from plain texts
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts.into_iter().map(Document::new).collect()
    }

    /// Read a headed CSV.
    /// `text_column` holds the document text, `label_column` (optional) the label.
    /// Empty label cells become `None`.
    pub fn from_csv_reader<R>(reader: R, text_column: &str, label_column: Option<&str>) -> Result<Self>
    where
        R: io::Read,
    {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LsaError::MissingColumn(name.to_string()))
        };
        let text_idx = column(text_column)?;
        let label_idx = label_column.map(column).transpose()?;

        let mut body = Body::new();
        for record in rdr.records() {
            let record = record?;
            let text = record.get(text_idx).unwrap_or_default();
            let label = label_idx
                .and_then(|idx| record.get(idx))
                .filter(|l| !l.is_empty())
                .map(str::to_string);
            body.documents.push(Document {
                text: text.to_string(),
                label,
            });
        }
        tracing::debug!(documents = body.len(), "loaded body from csv");
        Ok(body)
    }

    pub fn from_csv_path<P>(path: P, text_column: &str, label_column: Option<&str>) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = std::fs::File::open(path).map_err(csv::Error::from)?;
        Self::from_csv_reader(file, text_column, label_column)
    }

    pub fn push(&mut self, document: Document) -> &mut Self {
        self.documents.push(document);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.text.as_str())
    }
}

impl FromIterator<Document> for Body {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
