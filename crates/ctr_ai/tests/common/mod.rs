#![allow(dead_code)]

use std::cell::RefCell;

use ctr_ai::embeddings::Embedder;
use ctr_ai::index::{Include, IndexRecord, MemoryIndex, QueryResponse, VectorIndex};
use ctr_ai::llm::{Generation, TextGenerator};
use ctr_core::domain::Metadata;
use ctr_core::error::AppError;
use serde_json::json;

/// Embeds text as `[count('a'), count('b')]`.
pub struct CountABEmbedder;

impl Embedder for CountABEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let mut a = 0u32;
        let mut b = 0u32;
        for ch in text.chars() {
            if ch == 'a' {
                a += 1;
            } else if ch == 'b' {
                b += 1;
            }
        }
        Ok(vec![a as f32, b as f32])
    }
}

pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn encode(&self, _text: &str) -> Result<Vec<f32>, AppError> {
        Err(AppError::new("UPSTREAM_EMBED_DOWN", "embedding backend unavailable").with_retryable(true))
    }
}

pub struct FailingIndex;

impl VectorIndex for FailingIndex {
    fn query(&self, _q: &[Vec<f32>], _n: usize, _include: &[Include]) -> Result<QueryResponse, AppError> {
        Err(AppError::new("UPSTREAM_INDEX_DOWN", "collection unavailable"))
    }
}

/// Returns a canned response and records what it was asked for.
pub struct CannedIndex {
    pub response: QueryResponse,
    pub calls: RefCell<Vec<(usize, Vec<Include>)>>,
}

impl CannedIndex {
    pub fn new(response: QueryResponse) -> Self {
        Self {
            response,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl VectorIndex for CannedIndex {
    fn query(&self, q: &[Vec<f32>], n: usize, include: &[Include]) -> Result<QueryResponse, AppError> {
        assert_eq!(q.len(), 1, "pipeline sends exactly one query embedding");
        self.calls.borrow_mut().push((n, include.to_vec()));
        Ok(self.response.clone())
    }
}

/// Records every prompt and answers with `out`.
pub struct RecordingLlm {
    pub out: Vec<Generation>,
    pub prompts: RefCell<Vec<String>>,
}

impl RecordingLlm {
    pub fn answering(text: &str) -> Self {
        Self {
            out: vec![Generation::new(text)],
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl TextGenerator for RecordingLlm {
    fn generate(&self, prompt: &str) -> Result<Vec<Generation>, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.out.clone())
    }
}

pub struct FailingLlm;

impl TextGenerator for FailingLlm {
    fn generate(&self, _prompt: &str) -> Result<Vec<Generation>, AppError> {
        Err(AppError::new("UPSTREAM_LLM_DOWN", "model crashed"))
    }
}

pub fn meta(product: &str, complaint_id: u64) -> Metadata {
    match json!({ "product": product, "complaint_id": complaint_id }) {
        serde_json::Value::Object(m) => m,
        _ => unreachable!(),
    }
}

pub fn record(id: &str, embedding: Vec<f32>, document: &str, metadata: Metadata) -> IndexRecord {
    IndexRecord {
        id: id.to_string(),
        embedding,
        document: document.to_string(),
        metadata,
    }
}

/// Three complaints: one 'a'-heavy, one 'b'-heavy, one mixed.
pub fn complaint_index() -> MemoryIndex {
    MemoryIndex::new(vec![
        record("c-a", vec![4.0, 0.0], "aaaa late fee on savings account", meta("Savings account", 1)),
        record("c-b", vec![0.0, 4.0], "bbbb card billed twice", meta("Credit card", 2)),
        record("c-ab", vec![2.0, 2.0], "abab loan statement missing", meta("Personal loan", 3)),
    ])
}
