use ctr_core::error::{codes, AppError};
use serde::{Deserialize, Serialize};

use super::{Generation, TextGenerator};
use crate::ollama::OllamaClient;

#[derive(Debug, Clone)]
pub struct OllamaGenerator {
    client: OllamaClient,
    model: String,
}

impl OllamaGenerator {
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
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl TextGenerator for OllamaGenerator {
    fn generate(&self, prompt: &str) -> Result<Vec<Generation>, AppError> {
        let url = format!("{}/api/generate", self.client.base_url());
        let req = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };
        tracing::debug!(model = %self.model, prompt_bytes = prompt.len(), "requesting generation");

        let resp = ureq::post(&url)
            .timeout(std::time::Duration::from_secs(30))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new(codes::GENERATION_FAILED, "Failed to encode generate request")
                    .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: GenerateResponse = r.into_json().map_err(|e| {
                    AppError::new(codes::GENERATION_FAILED, "Failed to decode generate response")
                        .with_details(e.to_string())
                })?;
                if v.response.trim().is_empty() {
                    return Err(AppError::new(
                        codes::GENERATION_FAILED,
                        "Generate response was empty",
                    ));
                }
                Ok(vec![Generation::new(v.response)])
            }
            Ok(r) => Err(
                AppError::new(codes::GENERATION_FAILED, "Generate request failed")
                    .with_details(format!("status={}; model={}", r.status(), self.model)),
            ),
            Err(e) => Err(
                AppError::new(codes::GENERATION_FAILED, "Failed to call generate endpoint")
                    .with_details(e.to_string())
                    .with_retryable(true),
            ),
        }
    }
}
