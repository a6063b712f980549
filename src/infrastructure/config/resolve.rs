//! 설정 값(key/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::ProviderConfig;

/// Provider(API key) 해석 결과.
#[derive(Debug, Clone)]
pub struct ProviderCredentialResolution {
    pub credential: Option<String>,
    pub source: Option<String>,
}

/// Provider API key를 해석한다. 직접값이 우선이고, 없으면 환경변수를 조회한다.
pub fn resolve_provider_api_key(cfg: &ProviderConfig) -> ProviderCredentialResolution {
    if let Some(key) = cfg.api_key.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return ProviderCredentialResolution {
            credential: Some(key.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let Some(env_name) = cfg
        .api_key_env
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    else {
        return ProviderCredentialResolution {
            credential: None,
            source: None,
        };
    };

    match env::var(env_name).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => ProviderCredentialResolution {
            credential: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => ProviderCredentialResolution {
            credential: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_key_wins_over_env() {
        let cfg = ProviderConfig {
            api_key: Some("  sk-inline ".to_string()),
            api_key_env: Some("CHATSCENE_TEST_UNUSED_KEY".to_string()),
            ..ProviderConfig::default()
        };

        let resolved = resolve_provider_api_key(&cfg);
        assert_eq!(resolved.credential.as_deref(), Some("sk-inline"));
        assert_eq!(resolved.source.as_deref(), Some("inline"));
    }

    #[test]
    fn missing_env_is_labelled() {
        let cfg = ProviderConfig {
            api_key_env: Some("CHATSCENE_TEST_DEFINITELY_MISSING_KEY".to_string()),
            ..ProviderConfig::default()
        };

        let resolved = resolve_provider_api_key(&cfg);
        assert!(resolved.credential.is_none());
        assert_eq!(
            resolved.source.as_deref(),
            Some("env:CHATSCENE_TEST_DEFINITELY_MISSING_KEY (missing)")
        );
    }

    #[test]
    fn nothing_configured_resolves_nothing() {
        let resolved = resolve_provider_api_key(&ProviderConfig::default());
        assert!(resolved.credential.is_none());
        assert!(resolved.source.is_none());
    }
}
