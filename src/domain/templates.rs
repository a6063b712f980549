//! 프롬프트 조각 고정 테이블.
//!
//! 모든 테이블은 정적이며 런타임에 바뀌지 않는다. 문구를 바꾸면
//! `TEMPLATE_VERSION`도 함께 올린다.

use crate::domain::category::{Category, Gender, QualityLevel, Relationship, is_default_value};

pub const TEMPLATE_VERSION: &str = "category-v1";

/// 품질/추출 결과와 무관하게 네거티브 프롬프트에 항상 들어가는 최소 금지어.
pub const SAFETY_NEGATIVE_TERMS: [&str; 5] = [
    "nsfw",
    "nude",
    "sexual content",
    "inappropriate",
    "explicit",
];

const EXTENDED_SAFETY_TERMS: &[&str] = &[
    "suggestive",
    "revealing clothes",
    "underwear",
    "gore",
    "violence",
];

const QUALITY_NEGATIVE_TERMS: &[&str] = &[
    "lowres",
    "bad anatomy",
    "bad hands",
    "extra fingers",
    "missing fingers",
    "deformed",
    "blurry",
    "worst quality",
    "low quality",
    "jpeg artifacts",
    "watermark",
    "signature",
    "text",
];

/// 카테고리 값 하나에 대한 번역 항목.
#[derive(Debug, Clone, Copy)]
pub struct PhraseEntry {
    /// LLM에게 허용 어휘로 제시하는 대표 값
    pub key: &'static str,
    /// 프롬프트에 들어가는 영문 문구
    pub phrase: &'static str,
    /// 자유 문장에서 이 항목을 찾을 때 쓰는 어간
    pub keywords: &'static [&'static str],
}

const fn entry(
    key: &'static str,
    phrase: &'static str,
    keywords: &'static [&'static str],
) -> PhraseEntry {
    PhraseEntry {
        key,
        phrase,
        keywords,
    }
}

const LOCATION_ENVIRONMENT: &[PhraseEntry] = &[
    entry("카페", "cozy cafe interior, wooden tables", &["카페", "커피숍", "cafe"]),
    entry("해변", "sunny beach, ocean waves, sand", &["해변", "바다", "beach"]),
    entry("공원", "city park, green trees, bench", &["공원", "park"]),
    entry("집", "cozy living room, sofa", &["집에", "거실", "home"]),
    entry("학교", "school classroom, desks, blackboard", &["학교", "교실", "school"]),
    entry("사무실", "modern office, computer desk", &["사무실", "회사", "office"]),
    entry("도서관", "quiet library, tall bookshelves", &["도서관", "library"]),
    entry("거리", "busy city street, storefronts", &["거리", "시내", "street"]),
    entry("산", "mountain trail, scenic view", &["산에", "등산", "mountain"]),
    entry("놀이공원", "amusement park, ferris wheel", &["놀이공원", "놀이동산", "amusement park"]),
    entry("레스토랑", "elegant restaurant, candle-lit table", &["레스토랑", "식당", "restaurant"]),
];

const OUTFIT_STYLE: &[PhraseEntry] = &[
    entry("캐주얼", "casual outfit, hoodie and jeans", &["캐주얼", "후드", "청바지", "casual"]),
    entry("정장", "formal suit, neat tie", &["정장", "수트", "suit"]),
    entry("교복", "school uniform", &["교복", "uniform"]),
    entry("드레스", "elegant dress", &["드레스", "원피스", "dress"]),
    entry("운동복", "sportswear, sneakers", &["운동복", "트레이닝", "sportswear"]),
    entry("한복", "traditional hanbok", &["한복", "hanbok"]),
    entry("잠옷", "cozy pajamas", &["잠옷", "파자마", "pajamas"]),
    entry("코트", "long winter coat, scarf", &["코트", "목도리", "coat"]),
];

const ACTION_POSE: &[PhraseEntry] = &[
    entry("앉아있기", "sitting", &["앉아", "앉은", "sitting"]),
    entry("서있기", "standing", &["서 있", "서있", "standing"]),
    entry("걷기", "walking", &["걷", "산책", "walking"]),
    entry("달리기", "running", &["달리", "뛰", "running"]),
    entry("손 흔들기", "waving hand", &["손 흔", "손을 흔", "waving"]),
    entry("책 읽기", "reading a book", &["책 읽", "책을 읽", "독서", "reading"]),
    entry("커피 마시기", "holding a coffee cup, drinking coffee", &["커피 마", "커피를 마", "drinking coffee"]),
    entry("요리하기", "cooking in the kitchen", &["요리", "cooking"]),
    entry("셀카", "taking a selfie", &["셀카", "셀피", "selfie"]),
];

const EXPRESSION_EMOTION: &[PhraseEntry] = &[
    entry("행복", "happy smile", &["행복", "기뻐", "기쁘", "happy"]),
    entry("웃음", "laughing, open mouth smile", &["웃", "laugh"]),
    entry("슬픔", "sad expression, teary eyes", &["슬퍼", "슬프", "우울", "sad"]),
    entry("놀람", "surprised expression, wide eyes", &["놀라", "놀랐", "surprised"]),
    entry("화남", "pouting, annoyed expression", &["화나", "화났", "짜증", "angry"]),
    entry("수줍음", "shy, light blush", &["수줍", "부끄", "shy"]),
    entry("평온", "calm, serene expression", &["평온", "편안", "calm"]),
    entry("설렘", "excited, sparkling eyes", &["설레", "설렘", "두근", "excited"]),
    entry("피곤", "tired, sleepy eyes", &["피곤", "졸려", "tired"]),
];

const ATMOSPHERE_LIGHTING: &[PhraseEntry] = &[
    entry("따뜻한", "warm lighting, soft shadows", &["따뜻", "포근", "warm"]),
    entry("노을", "sunset, golden hour", &["노을", "해질", "석양", "sunset"]),
    entry("밤", "night, glowing city lights", &["밤", "야경", "night"]),
    entry("아침", "soft morning light", &["아침", "morning"]),
    entry("비", "rainy day, wet reflections", &["비가", "비 오", "우산", "rain"]),
    entry("눈", "snowfall, winter atmosphere", &["눈이", "눈 오", "겨울", "snow"]),
    entry("햇살", "bright sunlight, clear sky", &["햇살", "햇빛", "맑", "sunny"]),
    entry("로맨틱", "romantic atmosphere, soft bokeh", &["로맨틱", "romantic"]),
    entry("몽환적", "dreamy atmosphere, soft glow", &["몽환", "dreamy"]),
];

/// 카테고리별 번역 테이블.
pub fn phrase_table(category: Category) -> &'static [PhraseEntry] {
    match category {
        Category::LocationEnvironment => LOCATION_ENVIRONMENT,
        Category::OutfitStyle => OUTFIT_STYLE,
        Category::ActionPose => ACTION_POSE,
        Category::ExpressionEmotion => EXPRESSION_EMOTION,
        Category::AtmosphereLighting => ATMOSPHERE_LIGHTING,
    }
}

/// 추출된 값을 영문 문구로 변환한다.
/// 대표 값, 영문 문구, 등록된 동의어 중 하나와 일치해야 하며, `default`/미등록 값은 `None`이다.
pub fn lookup_phrase(category: Category, raw: &str) -> Option<&'static str> {
    let value = raw.trim();
    if is_default_value(value) {
        return None;
    }

    let lowered = value.to_lowercase();
    phrase_table(category)
        .iter()
        .find(|entry| {
            entry.key == value
                || entry.phrase.eq_ignore_ascii_case(value)
                || entry.keywords.contains(&lowered.as_str())
        })
        .map(|entry| entry.phrase)
}

/// (관계, 성별) 조합의 인물 기본 문구. 첫 항목은 항상 성별 마커다.
pub fn character_template(relationship: Relationship, gender: Gender) -> &'static [&'static str] {
    match (relationship, gender) {
        (Relationship::Friend, Gender::Female) => &[
            "1girl",
            "solo",
            "beautiful young woman",
            "friendly smile",
            "looking at viewer",
        ],
        (Relationship::Friend, Gender::Male) => &[
            "1boy",
            "solo",
            "handsome young man",
            "friendly smile",
            "looking at viewer",
        ],
        (Relationship::Lover, Gender::Female) => &[
            "1girl",
            "solo",
            "beautiful young woman",
            "affectionate gaze",
            "looking at viewer",
        ],
        (Relationship::Lover, Gender::Male) => &[
            "1boy",
            "solo",
            "handsome young man",
            "affectionate gaze",
            "looking at viewer",
        ],
        (Relationship::Colleague, Gender::Female) => &[
            "1girl",
            "solo",
            "young professional woman",
            "polite smile",
        ],
        (Relationship::Colleague, Gender::Male) => &[
            "1boy",
            "solo",
            "young professional man",
            "polite smile",
        ],
    }
}

/// 성별별 네거티브 문구(반대 성별/다인원 억제).
pub fn gender_negative_terms(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Female => &["1boy", "male focus", "multiple girls"],
        Gender::Male => &["1girl", "female focus", "multiple boys"],
    }
}

/// 품질 단계별 상용구. 높은 단계일수록 가중치 토큰이 강해진다.
pub fn quality_boilerplate(quality: QualityLevel) -> &'static [&'static str] {
    match quality {
        QualityLevel::Draft => &["anime style", "simple shading"],
        QualityLevel::Standard => &["masterpiece", "best quality", "anime style", "detailed"],
        QualityLevel::High => &[
            "(masterpiece:1.2)",
            "best quality",
            "highly detailed",
            "anime style",
            "sharp focus",
        ],
        QualityLevel::Premium => &[
            "(masterpiece:1.4)",
            "(best quality:1.4)",
            "ultra detailed",
            "8k resolution",
            "anime style",
            "cinematic lighting",
            "sharp focus",
        ],
    }
}

/// 단계와 무관한 네거티브 문구 전체(안전 금지어가 항상 먼저 온다).
pub fn base_negative_terms() -> impl Iterator<Item = &'static str> {
    SAFETY_NEGATIVE_TERMS
        .iter()
        .chain(EXTENDED_SAFETY_TERMS)
        .chain(QUALITY_NEGATIVE_TERMS)
        .copied()
}
