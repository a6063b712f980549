//! 카테고리 추출 도메인 엔티티/값 객체.

use serde::{Deserialize, Serialize};

/// 추출 실패/누락 필드에 채우는 자리표시 값.
pub const DEFAULT_VALUE: &str = "default";

/// 메시지에서 추출하는 다섯 개의 고정 카테고리.
/// 선언 순서가 곧 프롬프트 조립 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    LocationEnvironment,
    OutfitStyle,
    ActionPose,
    ExpressionEmotion,
    AtmosphereLighting,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::LocationEnvironment,
        Category::OutfitStyle,
        Category::ActionPose,
        Category::ExpressionEmotion,
        Category::AtmosphereLighting,
    ];

    /// JSON 키 이름.
    pub fn key(self) -> &'static str {
        match self {
            Self::LocationEnvironment => "location_environment",
            Self::OutfitStyle => "outfit_style",
            Self::ActionPose => "action_pose",
            Self::ExpressionEmotion => "expression_emotion",
            Self::AtmosphereLighting => "atmosphere_lighting",
        }
    }

    /// 추출 지시문에 넣을 카테고리 설명.
    pub fn description(self) -> &'static str {
        match self {
            Self::LocationEnvironment => "where the scene takes place",
            Self::OutfitStyle => "what the character is wearing",
            Self::ActionPose => "what the character is doing",
            Self::ExpressionEmotion => "the character's facial expression or emotion",
            Self::AtmosphereLighting => "overall mood, weather, time of day or lighting",
        }
    }
}

/// 메시지 1건에서 추출한 카테고리 값 묶음.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExtraction {
    pub location_environment: String,
    pub outfit_style: String,
    pub action_pose: String,
    pub expression_emotion: String,
    pub atmosphere_lighting: String,
}

impl Default for CategoryExtraction {
    fn default() -> Self {
        Self::all_default()
    }
}

impl CategoryExtraction {
    /// 모든 필드가 `default`인 폴백 추출 결과.
    pub fn all_default() -> Self {
        Self {
            location_environment: DEFAULT_VALUE.to_string(),
            outfit_style: DEFAULT_VALUE.to_string(),
            action_pose: DEFAULT_VALUE.to_string(),
            expression_emotion: DEFAULT_VALUE.to_string(),
            atmosphere_lighting: DEFAULT_VALUE.to_string(),
        }
    }

    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::LocationEnvironment => &self.location_environment,
            Category::OutfitStyle => &self.outfit_style,
            Category::ActionPose => &self.action_pose,
            Category::ExpressionEmotion => &self.expression_emotion,
            Category::AtmosphereLighting => &self.atmosphere_lighting,
        }
    }

    /// 값을 설정한다. 공백뿐인 값은 `default`로 정규화한다.
    pub fn set(&mut self, category: Category, value: &str) {
        let value = value.trim();
        let value = if value.is_empty() {
            DEFAULT_VALUE.to_string()
        } else {
            value.to_string()
        };
        match category {
            Category::LocationEnvironment => self.location_environment = value,
            Category::OutfitStyle => self.outfit_style = value,
            Category::ActionPose => self.action_pose = value,
            Category::ExpressionEmotion => self.expression_emotion = value,
            Category::AtmosphereLighting => self.atmosphere_lighting = value,
        }
    }

    pub fn is_default(&self, category: Category) -> bool {
        is_default_value(self.get(category))
    }

    /// `default`가 아닌 필드 수.
    pub fn non_default_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|category| !self.is_default(**category))
            .count()
    }
}

pub fn is_default_value(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(DEFAULT_VALUE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// 지원값: female/f/girl/woman/여성/여자, male/m/boy/man/남성/남자
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "female" | "f" | "girl" | "woman" | "여성" | "여자" => Some(Self::Female),
            "male" | "m" | "boy" | "man" | "남성" | "남자" => Some(Self::Male),
            _ => None,
        }
    }

    /// 설정 문자열을 해석한다(미지정/알수없음은 female 기본값).
    pub fn from_config(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Self::Female)
    }

    /// 프롬프트 맨 앞에 들어가는 인물 마커 토큰.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Female => "1girl",
            Self::Male => "1boy",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// 사용자와 캐릭터 사이의 관계 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Friend,
    Lover,
    Colleague,
}

impl Relationship {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "friend" | "친구" => Some(Self::Friend),
            "lover" | "partner" | "연인" | "애인" => Some(Self::Lover),
            "colleague" | "coworker" | "동료" => Some(Self::Colleague),
            _ => None,
        }
    }

    pub fn from_config(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Friend => "friend",
            Self::Lover => "lover",
            Self::Colleague => "colleague",
        }
    }
}

/// 이미지 품질 단계. 선언 순서가 등급 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Draft,
    #[default]
    Standard,
    High,
    Premium,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 4] = [
        QualityLevel::Draft,
        QualityLevel::Standard,
        QualityLevel::High,
        QualityLevel::Premium,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "standard" => Some(Self::Standard),
            "high" => Some(Self::High),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    pub fn from_config(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Standard => "standard",
            Self::High => "high",
            Self::Premium => "premium",
        }
    }
}

/// 변환 요청 옵션. 미지정 값은 서비스 기본값을 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    pub gender: Gender,
    pub quality_level: Option<QualityLevel>,
    pub relationship: Option<Relationship>,
}

impl ConversionOptions {
    pub fn new(gender: Gender) -> Self {
        Self {
            gender,
            quality_level: None,
            relationship: None,
        }
    }

    pub fn with_quality(mut self, quality_level: QualityLevel) -> Self {
        self.quality_level = Some(quality_level);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = Some(relationship);
        self
    }
}
