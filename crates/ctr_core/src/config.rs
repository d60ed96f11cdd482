//! Pipeline configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! `CTR_*` environment variables. Nothing here talks to the network; the
//! adapters in `ctr_ai` validate their own base URLs when constructed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{codes, AppError};

pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MAX_CONTEXT_TOKENS: usize = 400;
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_GENERATION_MODEL: &str = "llama3.2";
pub const DEFAULT_CHROMA_BASE_URL: &str = "http://127.0.0.1:8000";

pub const ENV_TOP_K: &str = "CTR_TOP_K";
pub const ENV_MAX_CONTEXT_TOKENS: &str = "CTR_MAX_CONTEXT_TOKENS";
pub const ENV_OLLAMA_BASE_URL: &str = "CTR_OLLAMA_BASE_URL";
pub const ENV_EMBEDDING_MODEL: &str = "CTR_EMBEDDING_MODEL";
pub const ENV_GENERATION_MODEL: &str = "CTR_GENERATION_MODEL";
pub const ENV_CHROMA_BASE_URL: &str = "CTR_CHROMA_BASE_URL";
pub const ENV_CHROMA_COLLECTION_ID: &str = "CTR_CHROMA_COLLECTION_ID";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RagConfig {
    /// Number of nearest chunks to retrieve per question.
    pub top_k: usize,
    /// Word budget for the context inserted into the prompt.
    pub max_context_tokens: usize,
    pub ollama_base_url: String,
    pub embedding_model: String,
    pub generation_model: String,
    pub chroma_base_url: String,
    pub chroma_collection_id: Option<String>,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            max_context_tokens: DEFAULT_MAX_CONTEXT_TOKENS,
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            chroma_base_url: DEFAULT_CHROMA_BASE_URL.to_string(),
            chroma_collection_id: None,
        }
    }
}

impl RagConfig {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::new(codes::CONFIG_READ_FAILED, "Failed to read config file")
                .with_details(format!("path={}; err={}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::new(codes::CONFIG_INVALID, "Failed to parse config file")
                .with_details(format!("path={}; err={}", path.display(), e))
        })
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `CTR_*` overrides looked up through `lookup`.
    ///
    /// Numeric values that fail to parse are ignored (and logged) so a typo in
    /// the environment never silently zeroes a budget.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_TOP_K) {
            match raw.trim().parse::<usize>() {
                Ok(v) => self.top_k = v,
                Err(_) => tracing::warn!(
                    "Invalid {} value '{}': expected a positive integer",
                    ENV_TOP_K,
                    raw
                ),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_CONTEXT_TOKENS) {
            match raw.trim().parse::<usize>() {
                Ok(v) => self.max_context_tokens = v,
                Err(_) => tracing::warn!(
                    "Invalid {} value '{}': expected a positive integer",
                    ENV_MAX_CONTEXT_TOKENS,
                    raw
                ),
            }
        }

        if let Some(v) = lookup(ENV_OLLAMA_BASE_URL) {
            self.ollama_base_url = v;
        }
        if let Some(v) = lookup(ENV_EMBEDDING_MODEL) {
            self.embedding_model = v;
        }
        if let Some(v) = lookup(ENV_GENERATION_MODEL) {
            self.generation_model = v;
        }
        if let Some(v) = lookup(ENV_CHROMA_BASE_URL) {
            self.chroma_base_url = v;
        }
        if let Some(v) = lookup(ENV_CHROMA_COLLECTION_ID) {
            let v = v.trim().to_string();
            self.chroma_collection_id = if v.is_empty() { None } else { Some(v) };
        }

        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.top_k == 0 {
            return Err(AppError::new(codes::CONFIG_INVALID, "top_k must be positive"));
        }
        if self.max_context_tokens == 0 {
            return Err(AppError::new(
                codes::CONFIG_INVALID,
                "max_context_tokens must be positive",
            ));
        }
        for (key, value) in [
            ("embedding_model", &self.embedding_model),
            ("generation_model", &self.generation_model),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::new(codes::CONFIG_INVALID, "Model name must not be empty")
                    .with_details(format!("key={key}")));
            }
        }
        Ok(())
    }
}
