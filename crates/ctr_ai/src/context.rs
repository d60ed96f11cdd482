use ctr_core::domain::Chunk;

pub use ctr_core::config::DEFAULT_MAX_CONTEXT_TOKENS;

/// Render chunks as `- <text>` bullets separated by blank lines.
pub fn build_context(chunks: &[Chunk]) -> String {
    chunks
        .iter()
        .map(|chunk| format!("- {}", chunk.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Keep at most `max_tokens` whitespace-separated words of `context`.
///
/// Words are counted naively, not with the model's tokenizer. A context that is
/// already within budget is returned as-is; otherwise the leading words are
/// rejoined with single spaces, which may cut a chunk mid-sentence.
pub fn truncate_context(context: &str, max_tokens: usize) -> String {
    if context.split_whitespace().nth(max_tokens).is_none() {
        return context.to_string();
    }
    context
        .split_whitespace()
        .take(max_tokens)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_builds_empty_context() {
        assert_eq!(build_context(&[]), "");
        assert_eq!(truncate_context("", DEFAULT_MAX_CONTEXT_TOKENS), "");
    }

    #[test]
    fn truncation_to_zero_words_is_empty() {
        assert_eq!(truncate_context("- a b", 0), "");
    }

    #[test]
    fn exact_budget_is_untouched() {
        assert_eq!(truncate_context("- a\n\n- b", 4), "- a\n\n- b");
        assert_eq!(truncate_context("- a\n\n- b", 3), "- a -");
    }
}
