use ctr_core::error::AppError;

/// Turns text into the vector space the index was built in.
pub trait Embedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, AppError>;
}

pub mod ollama_embed;

pub use ollama_embed::OllamaEmbedder;
