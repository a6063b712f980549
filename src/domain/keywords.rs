//! LLM 없이 고정 키워드 테이블로 카테고리를 찾는 규칙.

use crate::domain::category::{Category, CategoryExtraction};
use crate::domain::templates::phrase_table;

/// 메시지에서 각 카테고리의 첫 번째로 등장하는 키워드를 찾는다.
/// 같은 카테고리에서 여러 항목이 걸리면 메시지에서 더 앞에 나온 항목을 고른다.
pub fn extract_by_keywords(message: &str) -> CategoryExtraction {
    let haystack = message.to_lowercase();
    let mut extraction = CategoryExtraction::all_default();

    for category in Category::ALL {
        let best = phrase_table(category)
            .iter()
            .filter_map(|entry| {
                entry
                    .keywords
                    .iter()
                    .filter_map(|keyword| haystack.find(&keyword.to_lowercase()))
                    .min()
                    .map(|pos| (pos, entry.key))
            })
            .min_by_key(|(pos, _)| *pos);

        if let Some((_, key)) = best {
            extraction.set(category, key);
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::DEFAULT_VALUE;

    #[test]
    fn finds_korean_keywords() {
        let extraction = extract_by_keywords("오늘 카페에서 커피를 마시면서 너무 행복했어");

        assert_eq!(extraction.location_environment, "카페");
        assert_eq!(extraction.action_pose, "커피 마시기");
        assert_eq!(extraction.expression_emotion, "행복");
        assert_eq!(extraction.outfit_style, DEFAULT_VALUE);
    }

    #[test]
    fn matches_english_keywords_case_insensitively() {
        let extraction = extract_by_keywords("Walking on the Beach at sunset");

        assert_eq!(extraction.location_environment, "해변");
        assert_eq!(extraction.action_pose, "걷기");
        assert_eq!(extraction.atmosphere_lighting, "노을");
    }

    #[test]
    fn earliest_match_wins_within_a_category() {
        let extraction = extract_by_keywords("도서관 갔다가 공원 갔어");
        assert_eq!(extraction.location_environment, "도서관");
    }

    #[test]
    fn empty_message_is_all_default() {
        assert_eq!(extract_by_keywords(""), CategoryExtraction::all_default());
    }
}
