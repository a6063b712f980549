//! 카테고리 추출 단계(LLM 1회 호출 + 필드별 기본값 디코딩).

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::application::ports::LanguageModel;
use crate::domain::category::{Category, CategoryExtraction, Gender};
use crate::domain::conversion::{CompletionRequest, Extraction, ExtractionSource};
use crate::domain::keywords::extract_by_keywords;
use crate::domain::policy::{build_extraction_system_prompt, build_extraction_user_prompt};

/// 추출 응답을 쓸 수 없는 이유. 모두 전체 폴백으로 흡수된다.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("language model request failed: {0}")]
    Request(String),
    #[error("language model returned an empty response")]
    EmptyResponse,
    #[error("no JSON object found in response")]
    MissingJson,
    #[error("malformed JSON in response: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// 다섯 필드를 느슨하게 받는 응답 형태. 타입 검증은 필드별로 따로 한다.
#[derive(Debug, Default, Deserialize)]
struct RawCategories {
    #[serde(default)]
    location_environment: Option<Value>,
    #[serde(default)]
    outfit_style: Option<Value>,
    #[serde(default)]
    action_pose: Option<Value>,
    #[serde(default)]
    expression_emotion: Option<Value>,
    #[serde(default)]
    atmosphere_lighting: Option<Value>,
}

impl RawCategories {
    fn field(&self, category: Category) -> Option<&Value> {
        match category {
            Category::LocationEnvironment => self.location_environment.as_ref(),
            Category::OutfitStyle => self.outfit_style.as_ref(),
            Category::ActionPose => self.action_pose.as_ref(),
            Category::ExpressionEmotion => self.expression_emotion.as_ref(),
            Category::AtmosphereLighting => self.atmosphere_lighting.as_ref(),
        }
    }
}

/// 모델 응답 텍스트를 카테고리 추출 결과로 변환한다.
/// 누락/비문자열/공백 필드는 `default`가 되고, JSON 객체 자체가 없으면 에러다.
pub fn decode_extraction(text: &str) -> Result<CategoryExtraction, ExtractionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    // 코드 펜스나 앞뒤 설명 문장이 섞여 와도 첫 번째 객체 하나만 읽고 나머지는 버린다.
    let Some(start) = text.find('{') else {
        return Err(ExtractionError::MissingJson);
    };
    if !text[start..].contains('}') {
        return Err(ExtractionError::MissingJson);
    }

    let raw = serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<RawCategories>()
        .next()
        .ok_or(ExtractionError::MissingJson)??;
    let mut extraction = CategoryExtraction::all_default();
    for category in Category::ALL {
        if let Some(value) = raw.field(category).and_then(Value::as_str) {
            extraction.set(category, value);
        }
    }
    Ok(extraction)
}

/// 카테고리 추출 전략.
pub enum CategoryExtractor {
    /// LLM에 고정 지시문으로 1회 질의한다.
    Model {
        model: Box<dyn LanguageModel>,
        temperature: f32,
    },
    /// LLM 없이 고정 키워드 테이블만 사용한다.
    Keyword,
}

impl CategoryExtractor {
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Model { model, .. } => model.id(),
            Self::Keyword => "keyword",
        }
    }

    /// 추출은 실패하지 않는다. 모델 오류는 모두 기본값 폴백으로 흡수한다.
    pub async fn extract(&self, message: &str, gender: Gender) -> Extraction {
        if message.trim().is_empty() {
            tracing::debug!("empty message; skipping category extraction");
            return fallback(None);
        }

        match self {
            Self::Keyword => Extraction {
                categories: extract_by_keywords(message),
                source: ExtractionSource::Keyword,
                model: None,
            },
            Self::Model { model, temperature } => {
                match request_categories(model.as_ref(), message, gender, *temperature).await {
                    Ok(categories) => Extraction {
                        categories,
                        source: ExtractionSource::Model,
                        model: Some(model.name().to_string()),
                    },
                    Err(err) => {
                        tracing::warn!(
                            provider = model.name(),
                            error = %err,
                            "category extraction failed; using default categories"
                        );
                        fallback(Some(model.name().to_string()))
                    }
                }
            }
        }
    }
}

async fn request_categories(
    model: &dyn LanguageModel,
    message: &str,
    gender: Gender,
    temperature: f32,
) -> Result<CategoryExtraction, ExtractionError> {
    let request = CompletionRequest {
        system_prompt: build_extraction_system_prompt(gender),
        user_prompt: build_extraction_user_prompt(message),
        temperature,
        json_response: true,
    };

    let text = model
        .complete(&request)
        .await
        .map_err(|err| ExtractionError::Request(format!("{err:#}")))?;
    decode_extraction(&text)
}

fn fallback(model: Option<String>) -> Extraction {
    Extraction {
        categories: CategoryExtraction::all_default(),
        source: ExtractionSource::Fallback,
        model,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::DEFAULT_VALUE;

    #[test]
    fn decodes_plain_json_object() {
        let extraction = decode_extraction(
            r#"{"location_environment":"카페","outfit_style":"캐주얼","action_pose":"앉아있기","expression_emotion":"행복","atmosphere_lighting":"따뜻한"}"#,
        )
        .unwrap();

        assert_eq!(extraction.location_environment, "카페");
        assert_eq!(extraction.atmosphere_lighting, "따뜻한");
        assert_eq!(extraction.non_default_count(), 5);
    }

    #[test]
    fn strips_code_fences_and_prose() {
        let text = "Here you go:\n```json\n{\"action_pose\": \"셀카\"}\n```\n";
        let extraction = decode_extraction(text).unwrap();

        assert_eq!(extraction.action_pose, "셀카");
        assert_eq!(extraction.location_environment, DEFAULT_VALUE);
    }

    #[test]
    fn ignores_trailing_prose_with_braces() {
        let text = "{\"location_environment\": \"카페\", \"action_pose\": \"셀카\"}\nNote: unknown slots use {default}.";
        let extraction = decode_extraction(text).unwrap();

        assert_eq!(extraction.location_environment, "카페");
        assert_eq!(extraction.action_pose, "셀카");
        assert_eq!(extraction.outfit_style, DEFAULT_VALUE);
    }

    #[test]
    fn english_model_values_resolve_to_phrases() {
        use crate::domain::category::{Gender, QualityLevel, Relationship};
        use crate::domain::policy::assemble_prompt;

        let extraction =
            decode_extraction(r#"{"location_environment":"cafe","outfit_style":"Hanbok"}"#)
                .unwrap();
        let assembled = assemble_prompt(
            &extraction,
            Gender::Female,
            Relationship::Friend,
            QualityLevel::Standard,
        );

        assert_eq!(assembled.specific_categories, 2);
        assert_eq!(
            assembled.category_breakdown.location_environment,
            "cozy cafe interior, wooden tables"
        );
        assert_eq!(assembled.category_breakdown.outfit_style, "traditional hanbok");
        assert!(assembled.positive_prompt.contains("traditional hanbok"));
    }

    #[test]
    fn missing_or_non_string_fields_become_default() {
        let extraction = decode_extraction(
            r#"{"location_environment": 3, "outfit_style": null, "action_pose": ["걷기"], "expression_emotion": "  ", "extra": "x"}"#,
        )
        .unwrap();

        assert_eq!(extraction, CategoryExtraction::all_default());
    }

    #[test]
    fn rejects_responses_without_json() {
        assert!(matches!(
            decode_extraction("   "),
            Err(ExtractionError::EmptyResponse)
        ));
        assert!(matches!(
            decode_extraction("I cannot help with that."),
            Err(ExtractionError::MissingJson)
        ));
        assert!(matches!(
            decode_extraction("} oops {"),
            Err(ExtractionError::MissingJson)
        ));
        assert!(matches!(
            decode_extraction("{\"location_environment\": \"카페\""),
            Err(ExtractionError::MissingJson)
        ));
        assert!(matches!(
            decode_extraction("{location_environment: 카페}"),
            Err(ExtractionError::MalformedJson(_))
        ));
    }

    #[tokio::test]
    async fn keyword_extractor_never_calls_out() {
        let extractor = CategoryExtractor::Keyword;
        let extraction = extractor.extract("한복 입고 셀카 찍었어", Gender::Female).await;

        assert_eq!(extraction.source, ExtractionSource::Keyword);
        assert_eq!(extraction.categories.outfit_style, "한복");
        assert_eq!(extraction.categories.action_pose, "셀카");
        assert!(extraction.model.is_none());
    }
}
