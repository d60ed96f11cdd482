use ctr_core::config::RagConfig;
use ctr_core::error::{codes, AppError};
use serde::Serialize;

use super::{Include, QueryResponse, VectorIndex};
use crate::local::require_local_base_url;

/// A collection in a local Chroma server, queried over its REST API.
#[derive(Debug, Clone)]
pub struct ChromaCollection {
    base_url: String,
    collection_id: String,
}

impl ChromaCollection {
    pub fn new(base_url: &str, collection_id: &str) -> Result<Self, AppError> {
        let base_url = require_local_base_url("Chroma", base_url)?;
        let collection_id = collection_id.trim();
        if collection_id.is_empty() {
            return Err(AppError::new(
                codes::CONFIG_INVALID,
                "Chroma collection id must not be empty",
            ));
        }
        Ok(Self {
            base_url,
            collection_id: collection_id.to_string(),
        })
    }

    pub fn from_config(config: &RagConfig) -> Result<Self, AppError> {
        let collection_id = config.chroma_collection_id.as_deref().ok_or_else(|| {
            AppError::new(codes::CONFIG_INVALID, "Chroma collection id is not configured")
                .with_details("key=chroma_collection_id")
        })?;
        Self::new(&config.chroma_base_url, collection_id)
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    fn query_url(&self) -> String {
        format!(
            "{}/api/v1/collections/{}/query",
            self.base_url, self.collection_id
        )
    }
}

#[derive(Debug, Clone, Serialize)]
struct QueryRequest<'a> {
    query_embeddings: &'a [Vec<f32>],
    n_results: usize,
    include: &'a [Include],
}

impl VectorIndex for ChromaCollection {
    fn query(
        &self,
        query_embeddings: &[Vec<f32>],
        n_results: usize,
        include: &[Include],
    ) -> Result<QueryResponse, AppError> {
        let req = QueryRequest {
            query_embeddings,
            n_results,
            include,
        };
        tracing::debug!(
            collection = %self.collection_id,
            n_results,
            queries = query_embeddings.len(),
            "querying chroma collection"
        );

        let resp = ureq::post(&self.query_url())
            .timeout(std::time::Duration::from_secs(10))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new(codes::INDEX_QUERY_FAILED, "Failed to encode index query")
                    .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) if r.status() == 200 => r.into_json::<QueryResponse>().map_err(|e| {
                AppError::new(codes::INDEX_QUERY_FAILED, "Failed to decode index query response")
                    .with_details(e.to_string())
            }),
            Ok(r) => Err(
                AppError::new(codes::INDEX_QUERY_FAILED, "Index query failed")
                    .with_details(format!(
                        "status={}; collection={}",
                        r.status(),
                        self.collection_id
                    )),
            ),
            Err(e) => Err(
                AppError::new(codes::INDEX_QUERY_FAILED, "Failed to call index query endpoint")
                    .with_details(e.to_string())
                    .with_retryable(true),
            ),
        }
    }
}
