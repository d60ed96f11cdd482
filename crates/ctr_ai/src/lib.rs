pub mod citation;
pub mod context;
pub mod embeddings;
pub mod generate;
pub mod index;
pub mod llm;
pub mod local;
pub mod ollama;
pub mod retrieve;
