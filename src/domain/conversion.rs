//! 메시지→프롬프트 변환 결과 값 객체.

use serde::Serialize;

use crate::domain::category::{
    CategoryExtraction, ConversionOptions, Gender, QualityLevel, Relationship,
};

/// 일괄 변환 입력 1건.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub message: String,
    pub options: ConversionOptions,
}

impl ConversionRequest {
    pub fn new(message: impl Into<String>, options: ConversionOptions) -> Self {
        Self {
            message: message.into(),
            options,
        }
    }
}

/// 카테고리 값이 어디서 왔는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    /// LLM 응답을 해석한 값
    Model,
    /// LLM 없이 고정 키워드 테이블로 찾은 값
    Keyword,
    /// 추출 실패로 전부 `default`가 된 값
    Fallback,
}

impl ExtractionSource {
    pub fn code(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Keyword => "keyword",
            Self::Fallback => "fallback",
        }
    }
}

/// 카테고리 추출 단계 결과.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub categories: CategoryExtraction,
    pub source: ExtractionSource,
    /// 호출한 모델 제공자 이름(호출하지 않았으면 None)
    pub model: Option<String>,
}

/// LLM 호출 요청 1건.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    /// JSON 객체 응답 모드를 요청할지 여부
    pub json_response: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationInfo {
    pub gender: Gender,
    pub relationship: Relationship,
    pub quality_level: QualityLevel,
    pub template_used: String,
    pub template_version: &'static str,
    pub extraction_source: ExtractionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub specific_categories: usize,
    pub processing_time_ms: u64,
}

/// 이미지 생성에 넘길 최종 프롬프트 묶음.
#[derive(Debug, Clone, Serialize)]
pub struct PromptResult {
    pub positive_prompt: String,
    pub negative_prompt: String,
    /// 카테고리별 영문 문구(미해석 카테고리는 `default`)
    pub category_breakdown: CategoryExtraction,
    pub quality_score: f64,
    pub generation_info: GenerationInfo,
}
