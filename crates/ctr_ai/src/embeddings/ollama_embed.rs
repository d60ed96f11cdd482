use ctr_core::error::{codes, AppError};
use serde::{Deserialize, Serialize};

use super::Embedder;
use crate::ollama::OllamaClient;

const MAX_INPUT_BYTES: usize = 12_000;

#[derive(Debug, Clone)]
pub struct OllamaEmbedder {
    client: OllamaClient,
    model: String,
}

impl OllamaEmbedder {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Clone, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct EmbeddingsResponse {
    embedding: Vec<f32>,
}

/// Longest prefix of `input` that fits in `max_bytes` without splitting a char.
pub(crate) fn bounded_prefix(input: &str, max_bytes: usize) -> &str {
    if input.len() <= max_bytes {
        return input;
    }
    let mut end = max_bytes;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

impl Embedder for OllamaEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let prompt = bounded_prefix(text, MAX_INPUT_BYTES);

        let url = format!("{}/api/embeddings", self.client.base_url());
        let req = EmbeddingsRequest {
            model: &self.model,
            prompt,
        };
        tracing::debug!(model = %self.model, bytes = prompt.len(), "requesting embedding");

        let resp = ureq::post(&url)
            .timeout(std::time::Duration::from_secs(10))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new(codes::EMBEDDING_FAILED, "Failed to encode embeddings request")
                    .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: EmbeddingsResponse = r.into_json().map_err(|e| {
                    AppError::new(codes::EMBEDDING_FAILED, "Failed to decode embeddings response")
                        .with_details(e.to_string())
                })?;
                if v.embedding.is_empty() {
                    return Err(AppError::new(
                        codes::EMBEDDING_FAILED,
                        "Embeddings response was empty",
                    ));
                }
                Ok(v.embedding)
            }
            Ok(r) => Err(
                AppError::new(codes::EMBEDDING_FAILED, "Embeddings request failed")
                    .with_details(format!("status={}; model={}", r.status(), self.model)),
            ),
            Err(e) => Err(
                AppError::new(codes::EMBEDDING_FAILED, "Failed to call embeddings endpoint")
                    .with_details(e.to_string())
                    .with_retryable(true),
            ),
        }
    }
}
