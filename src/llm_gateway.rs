//! Completion provider: turns a natural-language request into raw command
//! text via the OpenAI chat completions API.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde_json::{json, Value};
use tokio::time::sleep;

use crate::error::AppError;
use crate::prompts;
use crate::sanitizer;
use crate::shell_resolver::ShellKind;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// One concrete provider is constructed per run and passed explicitly to the
/// pipeline; there is no ambient client state.
#[async_trait]
pub trait CompletionProvider {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    /// POST with retry on 5xx/429/network errors, exponential backoff.
    async fn post_with_retry(&self, body: &Value) -> Result<reqwest::Response> {
        let max_retries = 3;
        let mut attempt = 0;
        let mut backoff = Duration::from_secs(1);

        loop {
            attempt += 1;
            match self
                .client
                .post(CHAT_COMPLETIONS_URL)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(body)
                .send()
                .await
            {
                Ok(resp) => {
                    if resp.status().is_server_error()
                        || resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        if attempt > max_retries {
                            return Ok(resp); // surface the error response
                        }
                    } else {
                        // Success or a non-retryable client error.
                        return Ok(resp);
                    }
                }
                Err(e) => {
                    if attempt > max_retries {
                        return Err(anyhow::anyhow!("max retries exceeded: {}", e));
                    }
                    warn!(
                        "LLM network error (attempt {}/{}): {}. Retrying in {:?}...",
                        attempt, max_retries, e, backoff
                    );
                }
            }

            sleep(backoff).await;
            backoff *= 2;
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": &self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "temperature": 0.2
        });

        let response = self.post_with_retry(&body).await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("OpenAI API error: {}", error_text));
        }

        let body: Value = response.json().await?;
        match body["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => {
                let raw = serde_json::to_string_pretty(&body).unwrap_or_default();
                Err(anyhow::anyhow!("no content in LLM response. Raw body: {}", raw))
            }
        }
    }
}

/// Ask the provider for a command and normalize the answer down to a single
/// command line. Provider failures are fatal to the run and surfaced
/// verbatim.
pub async fn generate_command(
    provider: &dyn CompletionProvider,
    request: &str,
    shell: ShellKind,
) -> Result<String, AppError> {
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let user_prompt =
        prompts::build_user_prompt(request, std::env::consts::OS, shell.name(), &cwd);

    let raw = provider
        .complete(prompts::COMMAND_SYNTHESIS_PROMPT, &user_prompt)
        .await
        .map_err(|e| AppError::Provider(e.to_string()))?;

    Ok(sanitizer::sanitize_completion(&raw))
}
