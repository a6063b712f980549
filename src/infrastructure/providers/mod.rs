//! 카테고리 추출용 LLM provider 공통 모듈.
//! 각 HTTP API(OpenAI/Anthropic)를 호출하고 응답 텍스트를 표준화한다.

pub mod anthropic;
mod api_runner;
pub mod openai;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::conversion::CompletionRequest;

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// 내부 식별자
    fn id(&self) -> &'static str;
    /// 사용자 표시 이름
    fn name(&self) -> &'static str;
    /// 채팅 완성 1회 호출
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// 사용할 provider를 고른다. 우선순위는 openai → anthropic이며,
/// 활성화되어 있고 API key가 해석되는 첫 provider만 사용한다.
pub fn build_provider(config: &Config) -> Option<Box<dyn ChatProvider>> {
    if let Some(provider) = openai::OpenAiProvider::from_config(config) {
        return Some(Box::new(provider));
    }
    if let Some(provider) = anthropic::AnthropicProvider::from_config(config) {
        return Some(Box::new(provider));
    }
    None
}

/// 설정 진단용: 선택될 provider 식별자.
pub fn selected_provider_id(config: &Config) -> Option<&'static str> {
    build_provider(config).map(|provider| provider.id())
}
