use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error codes raised by this workspace. Errors coming from an external
/// embedder, index or generator keep whatever code that adapter assigned.
pub mod codes {
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
    pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
    pub const REMOTE_NOT_ALLOWED: &str = "CTR_REMOTE_NOT_ALLOWED";
    pub const OLLAMA_UNHEALTHY: &str = "CTR_OLLAMA_UNHEALTHY";
    pub const OLLAMA_UNREACHABLE: &str = "CTR_OLLAMA_UNREACHABLE";
    pub const EMBEDDING_FAILED: &str = "CTR_EMBEDDING_FAILED";
    pub const GENERATION_FAILED: &str = "CTR_GENERATION_FAILED";
    pub const GENERATION_EMPTY: &str = "CTR_GENERATION_EMPTY";
    pub const INDEX_QUERY_FAILED: &str = "CTR_INDEX_QUERY_FAILED";
    pub const INDEX_RESPONSE_INVALID: &str = "CTR_INDEX_RESPONSE_INVALID";
    pub const RETRIEVAL_INVALID_K: &str = "CTR_RETRIEVAL_INVALID_K";
}

/// Structured error shared by the pipeline and every capability it calls.
///
/// The shape is serializable so a host application can hand it across an RPC
/// boundary unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "[{}] {} ({})", self.code, self.message, details),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for AppError {}
