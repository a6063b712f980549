//! 설정 파일 탐색/병합 결과를 확인하는 유스케이스.

use anyhow::Result;

use crate::application::ports::{ConfigRepository, Reporter};

/// 현재 적용 중인 설정을 진단 JSON으로 돌려준다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub reporter: &'a dyn Reporter,
}

impl<'a> InspectConfigUseCase<'a> {
    pub fn execute(&self) -> Result<String> {
        let config = self.config_repo.load()?;
        self.reporter.section("Config");
        self.reporter
            .kv("gender", config.default_gender().code());
        self.reporter
            .kv("quality", config.default_quality_level().code());
        self.reporter
            .kv("relationship", config.default_relationship().code());
        self.config_repo.inspect_pretty_json()
    }
}
