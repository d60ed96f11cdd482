use ctr_core::config::RagConfig;
use ctr_core::domain::Answer;
use ctr_core::error::{codes, AppError};

use crate::context::{build_context, truncate_context, DEFAULT_MAX_CONTEXT_TOKENS};
use crate::embeddings::Embedder;
use crate::index::VectorIndex;
use crate::llm::TextGenerator;
use crate::retrieve::retrieve_relevant_chunks;

pub mod prompts;

/// Returned without calling the model when retrieval finds nothing.
pub const INSUFFICIENT_INFORMATION_ANSWER: &str =
    "I do not have enough information to answer this question.";

/// Answer `question` from the `k` nearest chunks in `index`.
///
/// The returned sources are exactly the retrieved chunks, in retrieval order.
pub fn generate_rag_answer(
    question: &str,
    index: &dyn VectorIndex,
    embedder: &dyn Embedder,
    llm: &dyn TextGenerator,
    k: usize,
) -> Result<Answer, AppError> {
    answer_with_budget(question, index, embedder, llm, k, DEFAULT_MAX_CONTEXT_TOKENS)
}

/// Same as [`generate_rag_answer`], with `k` and the context budget taken from `config`.
pub fn generate_rag_answer_with_config(
    question: &str,
    index: &dyn VectorIndex,
    embedder: &dyn Embedder,
    llm: &dyn TextGenerator,
    config: &RagConfig,
) -> Result<Answer, AppError> {
    config.validate()?;
    answer_with_budget(
        question,
        index,
        embedder,
        llm,
        config.top_k,
        config.max_context_tokens,
    )
}

fn answer_with_budget(
    question: &str,
    index: &dyn VectorIndex,
    embedder: &dyn Embedder,
    llm: &dyn TextGenerator,
    k: usize,
    max_context_tokens: usize,
) -> Result<Answer, AppError> {
    let retrieved = retrieve_relevant_chunks(question, index, embedder, k)?;
    if retrieved.is_empty() {
        tracing::info!(k, "no chunks retrieved; answering without the model");
        return Ok(Answer::new(INSUFFICIENT_INFORMATION_ANSWER, Vec::new()));
    }

    let context = truncate_context(&build_context(&retrieved), max_context_tokens);
    let prompt = prompts::rag_prompt(&context, question);
    tracing::debug!(
        sources = retrieved.len(),
        context_bytes = context.len(),
        "calling generation model"
    );

    let generated = llm.generate(&prompt)?.into_iter().next().ok_or_else(|| {
        AppError::new(
            codes::GENERATION_EMPTY,
            "Generation model returned no outputs",
        )
    })?;

    Ok(Answer::new(generated.generated_text.trim(), retrieved))
}
