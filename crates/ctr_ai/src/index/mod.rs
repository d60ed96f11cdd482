//! Nearest-neighbour lookup over stored chunk embeddings.
//!
//! The response mirrors Chroma's column layout: one row per query embedding,
//! each row ranked most-similar first.

use ctr_core::domain::Metadata;
use ctr_core::error::AppError;
use serde::{Deserialize, Serialize};

pub mod chroma;
pub mod memory;
mod similarity;

pub use chroma::ChromaCollection;
pub use memory::{IndexRecord, MemoryIndex};

/// Optional columns a query can ask for. Ids are always returned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Include {
    Documents,
    Metadatas,
    Distances,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryResponse {
    #[serde(default)]
    pub ids: Vec<Vec<String>>,
    #[serde(default)]
    pub documents: Option<Vec<Vec<Option<String>>>>,
    #[serde(default)]
    pub metadatas: Option<Vec<Vec<Option<Metadata>>>>,
    #[serde(default)]
    pub distances: Option<Vec<Vec<Option<f32>>>>,
}

pub trait VectorIndex {
    fn query(
        &self,
        query_embeddings: &[Vec<f32>],
        n_results: usize,
        include: &[Include],
    ) -> Result<QueryResponse, AppError>;
}
