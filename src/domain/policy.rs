//! 도메인 정책(추출 지시문 구성, 프롬프트 조립, 품질 점수).

use crate::domain::category::{
    Category, CategoryExtraction, DEFAULT_VALUE, Gender, QualityLevel, Relationship,
};
use crate::domain::templates::{
    base_negative_terms, character_template, gender_negative_terms, lookup_phrase, phrase_table,
    quality_boilerplate,
};

const SCORE_BASE: f64 = 0.1;
const SCORE_PER_CATEGORY: f64 = 0.12;

/// 조립 단계 결과.
#[derive(Debug, Clone)]
pub struct AssembledPrompt {
    pub positive_prompt: String,
    pub negative_prompt: String,
    pub category_breakdown: CategoryExtraction,
    /// 영문 문구로 해석된 카테고리 수
    pub specific_categories: usize,
}

/// 카테고리 추출용 고정 시스템 지시문.
/// 허용 어휘는 번역 테이블의 대표 값에서 그대로 가져온다.
pub fn build_extraction_system_prompt(gender: Gender) -> String {
    let mut out = String::new();
    out.push_str("You analyze chat messages for an image generation pipeline.\n");
    out.push_str(&format!(
        "The character in the scene is {} ({}).\n",
        gender.code(),
        gender.marker()
    ));
    out.push_str("Classify the message into the five categories below.\n");
    out.push_str("For each category pick exactly one allowed value, or \"");
    out.push_str(DEFAULT_VALUE);
    out.push_str("\" when the message says nothing about it.\n\n");

    for category in Category::ALL {
        let allowed = phrase_table(category)
            .iter()
            .map(|entry| entry.key)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "- {}: {}. Allowed: {}\n",
            category.key(),
            category.description(),
            allowed
        ));
    }

    out.push_str("\nRespond with a single JSON object and nothing else, for example:\n");
    out.push_str(&format!(
        "{{\"{}\": \"카페\", \"{}\": \"{}\", \"{}\": \"커피 마시기\", \"{}\": \"행복\", \"{}\": \"따뜻한\"}}\n",
        Category::LocationEnvironment.key(),
        Category::OutfitStyle.key(),
        DEFAULT_VALUE,
        Category::ActionPose.key(),
        Category::ExpressionEmotion.key(),
        Category::AtmosphereLighting.key(),
    ));
    out
}

pub fn build_extraction_user_prompt(message: &str) -> String {
    format!("Message:\n{}", message.trim())
}

/// 추출 결과와 성별/관계/품질 단계로 최종 프롬프트를 조립한다.
/// 순서: 인물 템플릿 → 카테고리 문구(고정 순서) → 품질 상용구.
pub fn assemble_prompt(
    extraction: &CategoryExtraction,
    gender: Gender,
    relationship: Relationship,
    quality: QualityLevel,
) -> AssembledPrompt {
    let mut positive: Vec<&str> = character_template(relationship, gender).to_vec();
    let mut breakdown = CategoryExtraction::all_default();
    let mut specific_categories = 0;

    for category in Category::ALL {
        if let Some(phrase) = lookup_phrase(category, extraction.get(category)) {
            positive.push(phrase);
            breakdown.set(category, phrase);
            specific_categories += 1;
        }
    }

    positive.extend_from_slice(quality_boilerplate(quality));

    let negative: Vec<&str> = base_negative_terms()
        .chain(gender_negative_terms(gender).iter().copied())
        .collect();

    AssembledPrompt {
        positive_prompt: positive.join(", "),
        negative_prompt: negative.join(", "),
        category_breakdown: breakdown,
        specific_categories,
    }
}

/// 0 초과 1 이하의 품질 점수(소수 둘째 자리 반올림).
pub fn quality_score(specific_categories: usize, quality: QualityLevel) -> f64 {
    let specific = specific_categories.min(Category::ALL.len()) as f64;
    let raw = SCORE_BASE + SCORE_PER_CATEGORY * specific + tier_bonus(quality);
    (raw * 100.0).round() / 100.0
}

fn tier_bonus(quality: QualityLevel) -> f64 {
    match quality {
        QualityLevel::Draft => 0.0,
        QualityLevel::Standard => 0.1,
        QualityLevel::High => 0.2,
        QualityLevel::Premium => 0.3,
    }
}

/// generation_info에 기록하는 템플릿 식별자.
pub fn template_label(relationship: Relationship, gender: Gender) -> String {
    format!("category_based:{}:{}", relationship.code(), gender.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::templates::SAFETY_NEGATIVE_TERMS;

    fn cafe_extraction() -> CategoryExtraction {
        let mut extraction = CategoryExtraction::all_default();
        extraction.set(Category::LocationEnvironment, "카페");
        extraction.set(Category::ActionPose, "커피 마시기");
        extraction.set(Category::ExpressionEmotion, "행복");
        extraction
    }

    #[test]
    fn positive_prompt_follows_fixed_order() {
        let assembled = assemble_prompt(
            &cafe_extraction(),
            Gender::Female,
            Relationship::Friend,
            QualityLevel::Standard,
        );

        let positive = &assembled.positive_prompt;
        assert!(positive.starts_with("1girl, solo"));
        let cafe = positive.find("cozy cafe interior").unwrap();
        let coffee = positive.find("drinking coffee").unwrap();
        let smile = positive.find("happy smile").unwrap();
        let quality = positive.find("best quality").unwrap();
        assert!(cafe < coffee && coffee < smile && smile < quality);
        assert_eq!(assembled.specific_categories, 3);
    }

    #[test]
    fn breakdown_uses_english_phrases_and_default_placeholders() {
        let assembled = assemble_prompt(
            &cafe_extraction(),
            Gender::Male,
            Relationship::Lover,
            QualityLevel::High,
        );

        let breakdown = &assembled.category_breakdown;
        assert_eq!(breakdown.location_environment, "cozy cafe interior, wooden tables");
        assert_eq!(breakdown.outfit_style, DEFAULT_VALUE);
        assert_eq!(breakdown.atmosphere_lighting, DEFAULT_VALUE);
    }

    #[test]
    fn unknown_values_contribute_nothing() {
        let mut extraction = CategoryExtraction::all_default();
        extraction.set(Category::OutfitStyle, "우주복");

        let assembled = assemble_prompt(
            &extraction,
            Gender::Female,
            Relationship::Friend,
            QualityLevel::Draft,
        );
        assert!(!assembled.positive_prompt.contains("우주복"));
        assert_eq!(assembled.specific_categories, 0);
        assert_eq!(assembled.category_breakdown.outfit_style, DEFAULT_VALUE);
    }

    #[test]
    fn negative_prompt_is_tier_invariant_and_starts_with_safety_terms() {
        let prompts: Vec<String> = QualityLevel::ALL
            .iter()
            .map(|quality| {
                assemble_prompt(
                    &CategoryExtraction::all_default(),
                    Gender::Female,
                    Relationship::Friend,
                    *quality,
                )
                .negative_prompt
            })
            .collect();

        assert!(prompts.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(prompts[0].starts_with(&SAFETY_NEGATIVE_TERMS.join(", ")));
    }

    #[test]
    fn score_is_ordered_by_tier_and_category_count() {
        let scores: Vec<f64> = QualityLevel::ALL
            .iter()
            .map(|quality| quality_score(2, *quality))
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(quality_score(0, QualityLevel::Draft) > 0.0);
        assert!(quality_score(3, QualityLevel::Draft) > quality_score(2, QualityLevel::Draft));
        assert_eq!(quality_score(5, QualityLevel::Premium), 1.0);
        assert_eq!(quality_score(9, QualityLevel::Premium), 1.0);
    }

    #[test]
    fn extraction_prompt_lists_every_category_key() {
        let prompt = build_extraction_system_prompt(Gender::Male);
        for category in Category::ALL {
            assert!(prompt.contains(category.key()));
        }
        assert!(prompt.contains("1boy"));
        assert!(prompt.contains("교복"));
    }

    #[test]
    fn template_label_mentions_category_based() {
        assert_eq!(
            template_label(Relationship::Colleague, Gender::Male),
            "category_based:colleague:male"
        );
    }
}
