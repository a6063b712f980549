//! Domain layer
//! 카테고리/템플릿/조립 규칙과 통계 판정을 외부 I/O 없이 표현한다.

pub mod category;
pub mod conversion;
pub mod keywords;
pub mod policy;
pub mod stats;
pub mod templates;
