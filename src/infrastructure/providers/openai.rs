//! OpenAI(호환) Chat Completions provider 어댑터.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::application::config::Config;
use crate::domain::conversion::CompletionRequest;
use crate::infrastructure::config::resolve_provider_api_key;

use super::ChatProvider;
use super::api_runner::{build_api_client, collect_text, endpoint, send_json};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    credential: String,
    max_tokens: u32,
}

impl OpenAiProvider {
    /// 활성화되어 있고 API key가 해석될 때만 provider를 만든다.
    pub fn from_config(config: &Config) -> Option<Self> {
        let provider = config.providers.openai.as_ref()?;
        if !provider.is_enabled() {
            return None;
        }
        let credential = resolve_provider_api_key(provider).credential?;

        Some(Self {
            client: build_api_client(provider.timeout_ms()),
            base_url: provider
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: provider
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            credential,
            max_tokens: provider.max_tokens(),
        })
    }

    fn build_payload(&self, request: &CompletionRequest) -> Value {
        let mut payload = json!({
            "model": self.model,
            "temperature": request.temperature,
            "max_tokens": self.max_tokens,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_prompt }
            ]
        });
        if request.json_response {
            payload["response_format"] = json!({ "type": "json_object" });
        }
        payload
    }
}

fn extract_openai_content(response: &Value) -> String {
    response
        .pointer("/choices/0/message/content")
        .map(collect_text)
        .unwrap_or_default()
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn id(&self) -> &'static str {
        "openai"
    }

    fn name(&self) -> &'static str {
        "OpenAI"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let request = self
            .client
            .post(endpoint(&self.base_url, "chat/completions"))
            .bearer_auth(&self.credential)
            .json(&self.build_payload(request));

        let response = send_json(self.name(), "request chat completion", request).await?;
        let content = extract_openai_content(&response).trim().to_string();
        if content.is_empty() {
            bail!("OpenAI: empty response content");
        }
        Ok(content)
    }
}
