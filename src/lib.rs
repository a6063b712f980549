//! chatscene library root.
//! 채팅 메시지를 카테고리 기반 이미지 생성 프롬프트로 바꾸는 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::category::ConversionOptions;
use domain::conversion::PromptResult;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 단건 변환 함수.
/// 설정을 읽어 provider를 고르며, 추출 실패는 기본값 프롬프트로 흡수된다.
/// 호출마다 서비스를 새로 만들므로 통계는 호출 사이에 누적되지 않는다.
/// 통계/헬스가 필요하면 `CategoryPromptService`를 직접 만들어 재사용한다.
pub async fn convert_message(message: &str, options: ConversionOptions) -> Result<PromptResult> {
    let composition = AppComposition::default();
    let config = composition.config()?;
    let service = composition.prompt_service(&config);
    Ok(service.convert_message(message, options).await)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
