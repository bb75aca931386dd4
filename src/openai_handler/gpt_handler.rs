use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::entities::error::{AppError, ErrorType};
use crate::environment::Config;
use crate::openai_handler::gpt_request::{CompletionOptions, GPTRequest};

/// Sends a system + user prompt pair to a chat model and returns the
/// assistant text, `None` when the completion carried no content.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<Option<String>, AppError>;
}

#[derive(Debug, Deserialize)]
struct GPTResponse {
    #[serde(default)]
    choices: Vec<GPTChoice>,
}

#[derive(Debug, Deserialize)]
struct GPTChoice {
    message: GPTMessageResponse,
}

#[derive(Debug, Deserialize)]
struct GPTMessageResponse {
    content: Option<String>,
}

/// `ChatCompletion` backed by the OpenAI `/v1/chat/completions` endpoint.
pub struct OpenAiChatClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiChatClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_api_base_url.clone(),
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<Option<String>, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::new(
                ErrorType::ConfigError,
                "The api_key client option must be set by the OPENAI_API_KEY environment variable",
            )
        })?;

        let gpt_request = GPTRequest::new(system_prompt, user_prompt, options);
        debug!(
            model = %options.model,
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(build_chat_completions_url(&self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&gpt_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), &body));
        }

        extract_message_content(&body)
    }
}

fn build_chat_completions_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}/v1/chat/completions", base)
    }
}

fn upstream_error(status: u16, body: &str) -> AppError {
    AppError::new(ErrorType::UpstreamError, format!("Error code: {} - {}", status, body))
}

fn extract_message_content(body: &str) -> Result<Option<String>, AppError> {
    let gpt_response: GPTResponse = serde_json::from_str(body)?;
    Ok(gpt_response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content))
}
