//! Client for an OpenAI-compatible completions endpoint
//!
//! One POST per call, answer text taken from `choices[0].message.content`.
//! Response decoding lives in [`parse_completion`] so it can be tested on
//! captured payloads without a network.

use std::env;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::LlmError;
use crate::types::{CompletionRequest, CompletionResponse};

pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    pub default_model: String,
}

impl CompletionClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Read `TESI_LLM_URL`, `TESI_LLM_KEY` and `TESI_LLM_MODEL` from the
    /// environment, defaulting to the aggregator endpoint the app ships with.
    pub fn from_env() -> Self {
        let base_url = env::var("TESI_LLM_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("TESI_LLM_KEY").unwrap_or_default();
        let mut client = Self::new(base_url, api_key);
        if let Ok(model) = env::var("TESI_LLM_MODEL") {
            client.default_model = model;
        }
        client
    }

    /// A single-user-turn request against the configured default model.
    pub fn request(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest::user(self.default_model.clone(), prompt)
    }

    /// POST the request and return the answer text.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        debug!(model = %request.model, "completion request");
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Network {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| LlmError::Network {
            message: e.to_string(),
        })?;

        if !(200..300).contains(&status) {
            return Err(LlmError::Api {
                status,
                message: body,
            });
        }

        parse_completion(&body)
    }
}

/// Extract the answer text from a chat-completions response body.
pub fn parse_completion(json: &str) -> Result<String, LlmError> {
    let response: CompletionResponse =
        serde_json::from_str(json).map_err(|e| LlmError::MalformedResponse {
            message: e.to_string(),
        })?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyResponse)?;
    Ok(choice.message.content)
}
