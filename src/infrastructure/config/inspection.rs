//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_provider_api_key;
use crate::application::config::{DefaultsConfig, ProviderConfig};
use crate::infrastructure::providers::{anthropic, openai, selected_provider_id};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub providers: ProvidersInspection,
    /// 실제 추출에 쓰일 provider(없으면 keyword 모드)
    pub extraction_mode: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub gender: String,
    pub quality_level: String,
    pub relationship: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvidersInspection {
    pub openai: Option<ProviderInspection>,
    pub anthropic: Option<ProviderInspection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderInspection {
    pub enabled: bool,
    pub runnable: bool,
    pub model: String,
    pub api_base: String,
    pub timeout_ms: u64,
    pub max_tokens: u32,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                gender: config.default_gender().code().to_string(),
                quality_level: config.default_quality_level().code().to_string(),
                relationship: config.default_relationship().code().to_string(),
                temperature: config.temperature(),
            },
            providers: ProvidersInspection {
                openai: config.providers.openai.as_ref().map(|cfg| {
                    ProviderInspection::from_config(
                        cfg,
                        openai::DEFAULT_MODEL,
                        openai::DEFAULT_API_BASE,
                    )
                }),
                anthropic: config.providers.anthropic.as_ref().map(|cfg| {
                    ProviderInspection::from_config(
                        cfg,
                        anthropic::DEFAULT_MODEL,
                        anthropic::DEFAULT_API_BASE,
                    )
                }),
            },
            extraction_mode: selected_provider_id(config)
                .unwrap_or("keyword")
                .to_string(),
        }
    }
}

impl ProviderInspection {
    fn from_config(cfg: &ProviderConfig, default_model: &str, default_api_base: &str) -> Self {
        let enabled = cfg.is_enabled();
        let api_resolution = resolve_provider_api_key(cfg);
        let api_ready = api_resolution.credential.is_some();

        Self {
            enabled,
            runnable: enabled && api_ready,
            model: cfg
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
            api_base: cfg
                .api_base
                .clone()
                .unwrap_or_else(|| default_api_base.to_string()),
            timeout_ms: cfg.timeout_ms(),
            max_tokens: cfg.max_tokens(),
            api_key_source: api_resolution.source,
            api_key_resolved: api_ready,
        }
    }
}
