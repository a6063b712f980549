//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::application::config::Config;
use crate::domain::conversion::CompletionRequest;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 채팅 완성 LLM 호출 포트.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// 내부 식별자
    fn id(&self) -> &'static str;
    /// 사용자 표시 이름
    fn name(&self) -> &'static str;
    /// 요청 1건을 보내고 응답 본문 텍스트를 돌려준다.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// 설정에서 사용할 LLM을 고르는 팩토리 포트.
/// 사용할 수 있는 제공자가 없으면 None.
pub trait LanguageModelFactory: Send + Sync {
    fn build(&self, config: &Config) -> Option<Box<dyn LanguageModel>>;
}

/// 시각 조회 포트(지연 시간 측정/헬스 타임스탬프).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
}
