//! Ollama HTTP client
//!
//! Two endpoints: `/api/tags` for the live model roster and `/api/chat` for
//! completions. The roster is ephemeral - fetched when needed, never cached.

use crate::config::Settings;
use crate::error::{LlmError, Result};
use crate::llm::message::ChatMessage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Fixed timeout for roster fetches; chat requests use the configured one
const TAGS_TIMEOUT: Duration = Duration::from_secs(5);

/// Request payload for the chat endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: ChatRequestOptions,
}

/// Sampling options forwarded with a chat request
#[derive(Debug, Serialize)]
struct ChatRequestOptions {
    temperature: f32,
}

/// Response from the chat endpoint (non-streaming)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Response from the tags endpoint (model listing)
#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

/// Client for a local Ollama server
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client for the given base URL
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client for the configured server
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ollama_url.clone())
    }

    /// Fetch the model roster from `/api/tags`
    pub async fn available_models(&self) -> Result<Vec<String>> {
        let response = self
            .http
            .get(format!("{}/api/tags", self.base_url))
            .timeout(TAGS_TIMEOUT)
            .send()
            .await
            .map_err(network_error)?;
        let response = check_status(response)?;

        let tags: TagsResponse = response.json().await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Fetch the roster, degrading any failure to an empty list.
    ///
    /// Callers decide what an empty roster means: skip the existence check
    /// for explicit model sets, abort for the interactive flow.
    pub async fn roster(&self) -> Vec<String> {
        match self.available_models().await {
            Ok(models) => models,
            Err(e) => {
                warn!("⚠️  Could not fetch available models: {}", e);
                Vec::new()
            }
        }
    }

    /// Send a chat completion request governed by the given settings.
    ///
    /// Model, temperature, stream flag, and timeout all come from the
    /// resolved settings; the reply content is returned verbatim.
    pub async fn chat(&self, settings: &Settings, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &settings.model,
            messages,
            stream: settings.stream_responses,
            options: ChatRequestOptions {
                temperature: settings.temperature,
            },
        };

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;
        let response = check_status(response)?;

        let chat: ChatResponse = response.json().await?;
        Ok(chat.message.content)
    }
}

fn network_error(e: reqwest::Error) -> crate::error::Error {
    LlmError::Network {
        message: e.to_string(),
    }
    .into()
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(LlmError::ApiError {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("unknown").to_string(),
        }
        .into());
    }
    Ok(response)
}
