//! Anthropic/Claude Messages API provider 어댑터.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::{Value, json};

use crate::application::config::Config;
use crate::domain::conversion::CompletionRequest;
use crate::infrastructure::config::resolve_provider_api_key;

use super::ChatProvider;
use super::api_runner::{build_api_client, collect_text, endpoint, send_json};

pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    model: String,
    credential: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// 활성화되어 있고 API key가 해석될 때만 provider를 만든다.
    pub fn from_config(config: &Config) -> Option<Self> {
        let provider = config.providers.anthropic.as_ref()?;
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
        // Messages API에는 JSON 모드가 없어 assistant 턴을 `{`로 미리 채운다.
        let mut messages = vec![json!({ "role": "user", "content": request.user_prompt })];
        if request.json_response {
            messages.push(json!({ "role": "assistant", "content": "{" }));
        }

        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": request.temperature,
            "system": request.system_prompt,
            "messages": messages
        })
    }

    /// 프록시 키를 포함해 모든 키를 x-api-key 헤더로 보낸다.
    fn build_request(&self, request: &CompletionRequest) -> RequestBuilder {
        self.client
            .post(endpoint(&self.base_url, "messages"))
            .header("x-api-key", &self.credential)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.build_payload(request))
    }
}

fn extract_anthropic_content(response: &Value) -> String {
    if let Some(content) = response.get("content") {
        return collect_text(content);
    }
    String::new()
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    fn id(&self) -> &'static str {
        "anthropic"
    }

    fn name(&self) -> &'static str {
        "Claude"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let http_request = self.build_request(request);
        let response = send_json(self.name(), "request Anthropic API", http_request).await?;
        let content = extract_anthropic_content(&response).trim().to_string();
        if content.is_empty() {
            bail!("Claude: empty response content");
        }

        if request.json_response && !content.starts_with('{') {
            return Ok(format!("{{{content}"));
        }
        Ok(content)
    }
}
