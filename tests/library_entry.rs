use chatscene::convert_message;
use chatscene::domain::category::{ConversionOptions, Gender, QualityLevel};
use chatscene::domain::conversion::ExtractionSource;
use chatscene::domain::templates::SAFETY_NEGATIVE_TERMS;

#[tokio::test]
async fn blank_message_yields_default_prompt() {
    let result = convert_message(
        "   ",
        ConversionOptions::new(Gender::Male).with_quality(QualityLevel::Draft),
    )
    .await
    .unwrap();

    assert_eq!(result.generation_info.extraction_source, ExtractionSource::Fallback);
    assert_eq!(result.generation_info.specific_categories, 0);
    assert!(result.positive_prompt.starts_with("1boy"));
    assert!(result.generation_info.model.is_none());
    for term in SAFETY_NEGATIVE_TERMS {
        assert!(result.negative_prompt.contains(term));
    }
}
