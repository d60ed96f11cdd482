use ctr_core::domain::{Chunk, Metadata};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable reference to one source of an answer.
///
/// `ordinal` is the chunk's rank in retrieval order and `text_sha256` pins the
/// exact text that was placed in the prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    pub ordinal: usize,
    pub text_sha256: String,
    pub metadata: Metadata,
}

pub fn text_sha256(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

pub fn citations_for(sources: &[Chunk]) -> Vec<Citation> {
    sources
        .iter()
        .enumerate()
        .map(|(ordinal, chunk)| Citation {
            ordinal,
            text_sha256: text_sha256(&chunk.text),
            metadata: chunk.metadata.clone(),
        })
        .collect()
}
