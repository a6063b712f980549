//! 채팅 메시지를 이미지 생성 프롬프트로 변환하는 유스케이스.

mod extract;

use std::sync::{Mutex, PoisonError};

use futures::future::join_all;

use crate::application::config::Config;
use crate::application::ports::{Clock, LanguageModel};
use crate::domain::category::{ConversionOptions, QualityLevel, Relationship};
use crate::domain::conversion::{
    ConversionRequest, ExtractionSource, GenerationInfo, PromptResult,
};
use crate::domain::policy::{assemble_prompt, quality_score, template_label};
use crate::domain::stats::{ConversionOutcome, ConversionStats, PerformanceStats, ServiceHealth};

pub use extract::{CategoryExtractor, ExtractionError, decode_extraction};

/// 카테고리 기반 프롬프트 변환 서비스.
/// 통계는 인스턴스가 소유하며 재시작하면 초기화된다.
pub struct CategoryPromptService {
    extractor: CategoryExtractor,
    clock: Box<dyn Clock>,
    default_quality: QualityLevel,
    default_relationship: Relationship,
    stats: Mutex<ConversionStats>,
}

impl CategoryPromptService {
    pub fn new(extractor: CategoryExtractor, clock: Box<dyn Clock>) -> Self {
        Self {
            extractor,
            clock,
            default_quality: QualityLevel::default(),
            default_relationship: Relationship::default(),
            stats: Mutex::new(ConversionStats::default()),
        }
    }

    /// 설정 기본값을 반영해 서비스를 구성한다. 모델이 없으면 키워드 추출을 쓴다.
    pub fn from_config(
        config: &Config,
        model: Option<Box<dyn LanguageModel>>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let extractor = match model {
            Some(model) => CategoryExtractor::Model {
                model,
                temperature: config.temperature(),
            },
            None => CategoryExtractor::Keyword,
        };

        Self::new(extractor, clock)
            .with_defaults(config.default_quality_level(), config.default_relationship())
    }

    pub fn with_defaults(mut self, quality: QualityLevel, relationship: Relationship) -> Self {
        self.default_quality = quality;
        self.default_relationship = relationship;
        self
    }

    /// 현재 추출 방식(provider id 또는 `keyword`).
    pub fn extraction_mode(&self) -> &'static str {
        self.extractor.mode()
    }

    /// 메시지 1건을 변환한다. 추출 실패는 기본값 템플릿으로 흡수되므로 항상 결과를 돌려준다.
    pub async fn convert_message(&self, message: &str, options: ConversionOptions) -> PromptResult {
        let started = self.clock.now();
        let quality = options.quality_level.unwrap_or(self.default_quality);
        let relationship = options.relationship.unwrap_or(self.default_relationship);

        let extraction = self.extractor.extract(message, options.gender).await;
        let assembled = assemble_prompt(
            &extraction.categories,
            options.gender,
            relationship,
            quality,
        );

        let elapsed = self.clock.now() - started;
        let processing_time_ms = u64::try_from(elapsed.num_milliseconds()).unwrap_or(0);

        let outcome = match extraction.source {
            ExtractionSource::Fallback => ConversionOutcome::Fallback,
            ExtractionSource::Model | ExtractionSource::Keyword => ConversionOutcome::Extracted,
        };
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(outcome, processing_time_ms);

        tracing::debug!(
            source = extraction.source.code(),
            specific = assembled.specific_categories,
            latency_ms = processing_time_ms,
            "converted message to prompt"
        );

        PromptResult {
            quality_score: quality_score(assembled.specific_categories, quality),
            generation_info: GenerationInfo {
                gender: options.gender,
                relationship,
                quality_level: quality,
                template_used: template_label(relationship, options.gender),
                template_version: crate::domain::templates::TEMPLATE_VERSION,
                extraction_source: extraction.source,
                model: extraction.model,
                specific_categories: assembled.specific_categories,
                processing_time_ms,
            },
            positive_prompt: assembled.positive_prompt,
            negative_prompt: assembled.negative_prompt,
            category_breakdown: assembled.category_breakdown,
        }
    }

    /// 여러 메시지를 동시에 변환한다. 결과는 입력 순서를 따른다.
    pub async fn convert_messages(&self, requests: &[ConversionRequest]) -> Vec<PromptResult> {
        join_all(
            requests
                .iter()
                .map(|request| self.convert_message(&request.message, request.options)),
        )
        .await
    }

    pub fn performance_stats(&self) -> PerformanceStats {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }

    pub fn service_health(&self) -> ServiceHealth {
        let now = self.clock.now();
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .health(now)
    }
}
