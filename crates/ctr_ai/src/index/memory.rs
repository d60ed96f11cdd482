use ctr_core::domain::Metadata;
use ctr_core::error::{codes, AppError};

use super::similarity::cosine;
use super::{Include, QueryResponse, VectorIndex};

/// A stored vector with the document text and metadata it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRecord {
    pub id: String,
    pub embedding: Vec<f32>,
    pub document: String,
    pub metadata: Metadata,
}

/// Brute-force cosine index held in memory.
///
/// Records are supplied already embedded; this type does no chunking or
/// embedding of its own. Distances are reported as `1 - cosine`, matching a
/// Chroma collection configured with `hnsw:space = cosine`.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    records: Vec<IndexRecord>,
}

impl MemoryIndex {
    pub fn new(records: Vec<IndexRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn rank(&self, query: &[f32]) -> Result<Vec<(usize, f32)>, AppError> {
        let mut hits: Vec<(usize, f32)> = Vec::new();
        for (pos, record) in self.records.iter().enumerate() {
            if record.embedding.len() != query.len() {
                return Err(AppError::new(
                    codes::INDEX_QUERY_FAILED,
                    "Query embedding dims do not match index dims",
                )
                .with_details(format!(
                    "id={}; index_dims={}; query_dims={}",
                    record.id,
                    record.embedding.len(),
                    query.len()
                )));
            }
            // NaN or overflowed scores cannot be ranked.
            if let Some(score) = cosine(query, &record.embedding).filter(|s| s.is_finite()) {
                hits.push((pos, score));
            }
        }
        // Stable sort keeps insertion order for equal scores.
        hits.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(hits)
    }
}

impl VectorIndex for MemoryIndex {
    fn query(
        &self,
        query_embeddings: &[Vec<f32>],
        n_results: usize,
        include: &[Include],
    ) -> Result<QueryResponse, AppError> {
        let want_documents = include.contains(&Include::Documents);
        let want_metadatas = include.contains(&Include::Metadatas);
        let want_distances = include.contains(&Include::Distances);

        let mut out = QueryResponse {
            ids: Vec::new(),
            documents: want_documents.then(Vec::new),
            metadatas: want_metadatas.then(Vec::new),
            distances: want_distances.then(Vec::new),
        };

        for query in query_embeddings {
            let mut hits = self.rank(query)?;
            hits.truncate(n_results);

            out.ids
                .push(hits.iter().map(|(pos, _)| self.records[*pos].id.clone()).collect());
            if let Some(rows) = out.documents.as_mut() {
                rows.push(
                    hits.iter()
                        .map(|(pos, _)| Some(self.records[*pos].document.clone()))
                        .collect(),
                );
            }
            if let Some(rows) = out.metadatas.as_mut() {
                rows.push(
                    hits.iter()
                        .map(|(pos, _)| Some(self.records[*pos].metadata.clone()))
                        .collect(),
                );
            }
            if let Some(rows) = out.distances.as_mut() {
                rows.push(hits.iter().map(|(_, score)| Some(1.0 - score)).collect());
            }
        }

        Ok(out)
    }
}
