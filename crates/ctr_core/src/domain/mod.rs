use serde::{Deserialize, Serialize};

/// Free-form metadata stored next to a chunk in the vector index.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A unit of retrieved content: the stored document text plus whatever metadata
/// the index kept alongside it (complaint id, product, issue, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    pub text: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Chunk {
    pub fn new(text: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Chunk with no metadata.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text, Metadata::new())
    }
}

/// Chunks ranked by similarity to the query, most relevant first.
pub type RetrievalResult = Vec<Chunk>;

/// Pipeline output.
///
/// `sources` are exactly the chunks the context was built from, in retrieval
/// order, so callers can render citations next to `text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub text: String,
    pub sources: RetrievalResult,
}

impl Answer {
    pub fn new(text: impl Into<String>, sources: RetrievalResult) -> Self {
        Self {
            text: text.into(),
            sources,
        }
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
