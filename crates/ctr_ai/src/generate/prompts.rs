/// Fill the complaint-analysis template with retrieved context and the user's question.
pub fn rag_prompt(context: &str, question: &str) -> String {
    // The model must stay inside the excerpts and say so when they fall short.
    format!(
        r#"
You are a financial analyst assistant for CrediTrust.
Answer the question using ONLY the complaint excerpts provided below.
If the information is not present in the context, say you do not have enough information.

Context:
{context}

Question:
{question}

Answer:
"#
    )
}
