//! OpenAI-compatible chat-completions client.
//!
//! Speaks the `/v1/chat/completions` wire format: bearer auth, a model
//! identifier, role-tagged messages, and a sampling temperature. The base
//! URL is configurable so any compatible provider works.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::error::CompletionError;
use super::trait_def::CompletionClient;
use super::types::{CompletionRequest, CompletionResponse};

/// Client for the OpenAI chat-completions wire format.
pub struct OpenAiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenAiClient {
    /// Create a client for the given credential, model, and base URL.
    ///
    /// No timeout is configured; the transport default applies.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Build the request body for the chat-completions endpoint.
    ///
    /// The system instruction becomes the leading `system` message,
    /// followed by the exchange messages in order.
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut messages = vec![serde_json::json!({
            "role": "system",
            "content": request.system_prompt,
        })];
        messages.extend(request.messages.iter().map(|message| {
            serde_json::json!({
                "role": message.role,
                "content": message.content,
            })
        }));

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        })
    }

    /// Extract the generated text from an API response.
    fn parse_response(&self, api_response: OpenAiResponse) -> CompletionResponse {
        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);
        CompletionResponse { content }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        debug!(model = %self.model, "complete: called");
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            debug!(status, "complete: API error");
            return Err(CompletionError::ApiError { status, message });
        }

        debug!("complete: success");
        let api_response: OpenAiResponse = response.json().await?;
        Ok(self.parse_response(api_response))
    }
}

// OpenAI API response types

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}
