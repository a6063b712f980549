//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

use crate::domain::category::{Gender, QualityLevel, Relationship};

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;
pub const DEFAULT_MAX_TOKENS: u32 = 300;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 변환 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 카테고리 추출용 LLM 제공자 설정
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 요청에 성별이 없을 때 쓰는 값(female/male)
    pub gender: Option<String>,
    /// 요청에 품질 단계가 없을 때 쓰는 값(draft/standard/high/premium)
    pub quality_level: Option<String>,
    /// 요청에 관계가 없을 때 쓰는 값(friend/lover/colleague)
    pub relationship: Option<String>,
    /// 추출 호출 temperature
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProvidersConfig {
    pub openai: Option<ProviderConfig>,
    pub anthropic: Option<ProviderConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProviderConfig {
    /// provider 활성화 여부(기본 true)
    pub enabled: Option<bool>,
    /// 모델 식별자(선택)
    pub model: Option<String>,
    /// API 베이스 URL(선택)
    pub api_base: Option<String>,
    /// 인증 키(직접값, 권장하지 않음)
    pub api_key: Option<String>,
    /// 인증 키를 읽을 환경변수 이름
    pub api_key_env: Option<String>,
    /// HTTP 요청 타임아웃(ms)
    pub timeout_ms: Option<u64>,
    /// 응답 최대 토큰
    pub max_tokens: Option<u32>,
}

impl Config {
    pub fn default_gender(&self) -> Gender {
        Gender::from_config(self.defaults.gender.as_deref())
    }

    pub fn default_quality_level(&self) -> QualityLevel {
        QualityLevel::from_config(self.defaults.quality_level.as_deref())
    }

    pub fn default_relationship(&self) -> Relationship {
        Relationship::from_config(self.defaults.relationship.as_deref())
    }

    pub fn temperature(&self) -> f32 {
        self.defaults
            .temperature
            .filter(|t| (0.0..=2.0).contains(t))
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.providers.merge_from(other.providers);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.gender.is_some() {
            self.gender = other.gender;
        }
        if other.quality_level.is_some() {
            self.quality_level = other.quality_level;
        }
        if other.relationship.is_some() {
            self.relationship = other.relationship;
        }
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
    }
}

impl ProviderConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn merge_from(&mut self, other: ProviderConfig) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
        if other.timeout_ms.is_some() {
            self.timeout_ms = other.timeout_ms;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
    }
}

impl ProvidersConfig {
    pub fn merge_from(&mut self, other: ProvidersConfig) {
        merge_provider_config(&mut self.openai, other.openai);
        merge_provider_config(&mut self.anthropic, other.anthropic);
    }
}

fn merge_provider_config(target: &mut Option<ProviderConfig>, incoming: Option<ProviderConfig>) {
    match (target.as_mut(), incoming) {
        (Some(existing), Some(next)) => existing.merge_from(next),
        (None, Some(next)) => *target = Some(next),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_config_overrides_per_field() {
        let mut base: Config = serde_json::from_str(
            r#"{
                "defaults": { "gender": "male", "quality_level": "high" },
                "providers": { "openai": { "model": "gpt-4o-mini", "api_key_env": "OPENAI_API_KEY" } }
            }"#,
        )
        .unwrap();
        let overlay: Config = serde_json::from_str(
            r#"{
                "defaults": { "quality_level": "premium" },
                "providers": { "openai": { "model": "gpt-4.1-mini" }, "anthropic": { "enabled": false } }
            }"#,
        )
        .unwrap();

        base.merge_from(overlay);

        assert_eq!(base.default_gender(), Gender::Male);
        assert_eq!(base.default_quality_level(), QualityLevel::Premium);
        let openai = base.providers.openai.as_ref().unwrap();
        assert_eq!(openai.model.as_deref(), Some("gpt-4.1-mini"));
        assert_eq!(openai.api_key_env.as_deref(), Some("OPENAI_API_KEY"));
        assert!(!base.providers.anthropic.as_ref().unwrap().is_enabled());
    }

    #[test]
    fn out_of_range_temperature_uses_default() {
        let mut config = Config::default();
        config.defaults.temperature = Some(7.5);
        assert_eq!(config.temperature(), DEFAULT_TEMPERATURE);
    }
}
