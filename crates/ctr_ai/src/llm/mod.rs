use ctr_core::error::AppError;
use serde::{Deserialize, Serialize};

/// One candidate produced by a generation model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Generation {
    pub generated_text: String,
}

impl Generation {
    pub fn new(generated_text: impl Into<String>) -> Self {
        Self {
            generated_text: generated_text.into(),
        }
    }
}

/// A text generation model. Returns one or more candidates for `prompt`; the
/// pipeline only reads the first.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<Vec<Generation>, AppError>;
}

pub mod ollama_llm;

pub use ollama_llm::OllamaGenerator;
