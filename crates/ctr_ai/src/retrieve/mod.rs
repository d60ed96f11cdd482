use ctr_core::domain::{Chunk, RetrievalResult};
use ctr_core::error::{codes, AppError};

use crate::embeddings::Embedder;
use crate::index::{Include, VectorIndex};

pub use ctr_core::config::DEFAULT_TOP_K;

/// Embed `query` and fetch its `k` nearest chunks from `index`.
///
/// Chunks come back in the index's ranking order. Fewer than `k` are returned
/// when the index holds fewer matches. Embedder and index errors are passed
/// through untouched.
pub fn retrieve_relevant_chunks(
    query: &str,
    index: &dyn VectorIndex,
    embedder: &dyn Embedder,
    k: usize,
) -> Result<RetrievalResult, AppError> {
    if k == 0 {
        return Err(AppError::new(
            codes::RETRIEVAL_INVALID_K,
            "k must be a positive integer",
        ));
    }

    let query_embedding = embedder.encode(query)?;
    let resp = index.query(
        &[query_embedding],
        k,
        &[Include::Documents, Include::Metadatas],
    )?;

    let documents = first_row(resp.documents, "documents")?;
    let metadatas = first_row(resp.metadatas, "metadatas")?;

    // Rows are paired positionally; a short row ends the result.
    let chunks: RetrievalResult = documents
        .into_iter()
        .zip(metadatas)
        .map(|(doc, metadata)| Chunk::new(doc.unwrap_or_default(), metadata.unwrap_or_default()))
        .collect();

    tracing::debug!(k, found = chunks.len(), "retrieved chunks");
    Ok(chunks)
}

fn first_row<T>(column: Option<Vec<Vec<T>>>, name: &str) -> Result<Vec<T>, AppError> {
    let column = column.ok_or_else(|| {
        AppError::new(
            codes::INDEX_RESPONSE_INVALID,
            "Index response is missing a requested column",
        )
        .with_details(format!("column={name}"))
    })?;
    Ok(column.into_iter().next().unwrap_or_default())
}
