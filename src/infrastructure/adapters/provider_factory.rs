//! LLM 팩토리 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::application::ports::{LanguageModel, LanguageModelFactory};
use crate::domain::conversion::CompletionRequest;
use crate::infrastructure::providers;

/// 설정에서 HTTP provider를 골라 `LanguageModel` 포트로 노출한다.
pub struct LanguageModelFactoryAdapter;

impl LanguageModelFactory for LanguageModelFactoryAdapter {
    fn build(&self, config: &Config) -> Option<Box<dyn LanguageModel>> {
        let inner = providers::build_provider(config)?;
        tracing::debug!(provider = inner.id(), "selected extraction provider");
        Some(Box::new(ChatProviderModel { inner }))
    }
}

/// 인프라 provider를 애플리케이션 포트로 감싸는 래퍼.
struct ChatProviderModel {
    inner: Box<dyn providers::ChatProvider>,
}

#[async_trait]
impl LanguageModel for ChatProviderModel {
    fn id(&self) -> &'static str {
        self.inner.id()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.inner.complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::ProviderConfig;

    #[test]
    fn returns_none_without_runnable_provider() {
        assert!(LanguageModelFactoryAdapter.build(&Config::default()).is_none());
    }

    #[test]
    fn wraps_selected_provider() {
        let mut config = Config::default();
        config.providers.anthropic = Some(ProviderConfig {
            api_key: Some("sk-ant-test".to_string()),
            ..ProviderConfig::default()
        });

        let model = LanguageModelFactoryAdapter.build(&config).unwrap();
        assert_eq!(model.id(), "anthropic");
        assert_eq!(model.name(), "Claude");
    }
}
